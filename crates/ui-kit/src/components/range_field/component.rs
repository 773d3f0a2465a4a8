use dioxus::prelude::*;
use ui_types::{FieldValue, Rules};

use crate::components::form::{use_field, FieldChrome};
use crate::components::slider::{snap_to_step, SingleSlider};

/// Slider bound to a numeric form value. It always holds a number, so the
/// required rule never fails.
#[component]
pub fn RangeField(
    name: String,
    label: String,
    #[props(default)] description: Option<String>,
    #[props(default = false)] optional: bool,
    #[props(default)] rules: Rules,
    #[props(default = 0.0)] min: f64,
    #[props(default = 100.0)] max: f64,
    #[props(default = 1.0)] step: f64,
    #[props(default)] default_value: Option<f64>,
    /// Appended to the displayed value, e.g. `%`.
    #[props(default)]
    unit: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    let start = snap_to_step(default_value.unwrap_or(min), min, max, step);
    let field = use_field(&name, &label, optional, &rules, FieldValue::Number(Some(start)));
    let id = field.id();
    let shown = field.value().as_number().unwrap_or(start);

    rsx! {
        FieldChrome {
            id: id.clone(),
            label,
            description,
            error: field.error(),
            required: field.is_required(),
            div {
                class: "field-control",
                SingleSlider {
                    id: id.clone(),
                    min,
                    max,
                    step,
                    default_value: start,
                    disabled,
                    on_change: move |v: f64| field.set(FieldValue::Number(Some(v))),
                }
                output { class: "field-range-value", r#for: "{id}", "{shown}{unit}" }
            }
        }
    }
}
