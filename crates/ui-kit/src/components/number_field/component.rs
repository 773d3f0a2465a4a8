use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMinus, LdPlus};
use dioxus_free_icons::Icon;
use ui_types::{FieldValue, Rules};

use crate::components::form::{described_by, use_field, FieldChrome};

/// Parse user input; blank or non-finite text is no number.
pub fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Value after pressing a stepper button.
///
/// An empty field starts from `min` (or zero) instead of stepping.
pub fn step_value(current: Option<f64>, step: f64, min: Option<f64>, max: Option<f64>, up: bool) -> f64 {
    let next = match current {
        None => min.unwrap_or(0.0),
        Some(value) if up => value + step,
        Some(value) => value - step,
    };
    // keep 0.1 + 0.2 from showing up as 0.30000000000000004
    let next = (next * 1e9).round() / 1e9;
    let next = min.map_or(next, |min| next.max(min));
    max.map_or(next, |max| next.min(max))
}

fn bound_rules(min: Option<f64>, max: Option<f64>) -> Rules {
    let mut rules = Rules::new();
    if let Some(min) = min {
        rules = rules.min(min, format!("Must be at least {min}"));
    }
    if let Some(max) = max {
        rules = rules.max(max, format!("Must be at most {max}"));
    }
    rules
}

/// Numeric input with decrement/increment buttons.
///
/// `min` and `max` become validation rules unless `rules` already carries
/// a rule of the same kind.
#[component]
pub fn NumberField(
    name: String,
    label: String,
    #[props(default)] description: Option<String>,
    #[props(default = false)] optional: bool,
    #[props(default)] rules: Rules,
    #[props(default)] min: Option<f64>,
    #[props(default)] max: Option<f64>,
    #[props(default = 1.0)] step: f64,
    #[props(default)] default_value: Option<f64>,
    #[props(default = false)] disabled: bool,
) -> Element {
    let combined = bound_rules(min, max).overridden_by(&rules);
    let field = use_field(&name, &label, optional, &combined, FieldValue::Number(default_value));
    let mut raw = use_signal(|| default_value.map(|v| v.to_string()).unwrap_or_default());

    let id = field.id();
    let current = field.value().as_number();
    // the form value wins when it moved without typing, e.g. after a reset
    let text = if parse_number(&raw.read()) == current {
        raw.read().clone()
    } else {
        current.map(|v| v.to_string()).unwrap_or_default()
    };
    let unparsable = !text.trim().is_empty() && parse_number(&text).is_none();
    let error = if unparsable {
        Some("Enter a number".to_string())
    } else {
        field.error()
    };

    let mut nudge = move |up: bool| {
        let next = step_value(current, step, min, max, up);
        raw.set(next.to_string());
        field.set(FieldValue::Number(Some(next)));
    };

    rsx! {
        FieldChrome {
            id: id.clone(),
            label,
            description,
            error: error.clone(),
            required: field.is_required(),
            div {
                class: "field-control",
                button {
                    class: "button",
                    "data-style": "outline",
                    "data-size": "icon",
                    r#type: "button",
                    "aria-label": "Decrease",
                    disabled: disabled || matches!((current, min), (Some(value), Some(min)) if value <= min),
                    onclick: move |_| nudge(false),
                    Icon::<LdMinus> { icon: LdMinus, width: 14, height: 14 }
                }
                input {
                    id: "{id}",
                    name: "{name}",
                    class: "field-input",
                    r#type: "text",
                    inputmode: "decimal",
                    value: "{text}",
                    disabled,
                    "aria-invalid": error.is_some(),
                    "aria-describedby": described_by(&id, error.is_some()),
                    oninput: move |evt| {
                        let text = evt.value();
                        field.set(FieldValue::Number(parse_number(&text)));
                        raw.set(text);
                    },
                    onblur: move |_| field.touch(),
                }
                button {
                    class: "button",
                    "data-style": "outline",
                    "data-size": "icon",
                    r#type: "button",
                    "aria-label": "Increase",
                    disabled: disabled || matches!((current, max), (Some(value), Some(max)) if value >= max),
                    onclick: move |_| nudge(true),
                    Icon::<LdPlus> { icon: LdPlus, width: 14, height: 14 }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_rejects_blank_and_garbage() {
        assert_eq!(parse_number(" 42 "), Some(42.0));
        assert_eq!(parse_number("-1.5"), Some(-1.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn stepping_clamps_to_bounds() {
        assert_eq!(step_value(Some(9.0), 2.0, Some(0.0), Some(10.0), true), 10.0);
        assert_eq!(step_value(Some(1.0), 2.0, Some(0.0), Some(10.0), false), 0.0);
        assert_eq!(step_value(Some(0.1), 0.2, None, None, true), 0.3);
    }

    #[test]
    fn stepping_an_empty_field_starts_at_min() {
        assert_eq!(step_value(None, 5.0, Some(3.0), None, true), 3.0);
        assert_eq!(step_value(None, 5.0, None, None, false), 0.0);
    }

    #[test]
    fn bounds_become_rules() {
        let rules = bound_rules(Some(1.0), None);
        assert_eq!(
            rules.check(&FieldValue::Number(Some(0.0))),
            Some("Must be at least 1".to_string())
        );
    }
}
