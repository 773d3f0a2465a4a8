use dioxus::prelude::*;
use ui_types::{FieldValue, Rules};

use crate::components::form::{use_field, FieldChrome};
use crate::components::switch::{Switch, SwitchThumb};

/// On/off toggle bound to a boolean form value.
///
/// Unless `optional`, the switch must be on to submit, as with an
/// "accept the terms" toggle.
#[component]
pub fn SwitchField(
    name: String,
    label: String,
    #[props(default)] description: Option<String>,
    #[props(default = false)] optional: bool,
    #[props(default)] rules: Rules,
    #[props(default = false)] default_checked: bool,
    #[props(default = false)] disabled: bool,
) -> Element {
    let field = use_field(&name, &label, optional, &rules, FieldValue::Bool(default_checked));
    let id = field.id();

    rsx! {
        FieldChrome {
            id: id.clone(),
            label,
            description,
            error: field.error(),
            required: field.is_required(),
            Switch {
                id: "{id}",
                checked: Some(field.value().as_bool()),
                disabled,
                on_checked_change: move |on: bool| {
                    field.set(FieldValue::Bool(on));
                    field.touch();
                },
                SwitchThumb {}
            }
        }
    }
}
