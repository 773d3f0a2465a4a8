use dioxus::prelude::*;
use ui_types::{FieldValue, ListOption, Rules};

use crate::components::checkbox::LabeledCheckbox;
use crate::components::form::{use_field, FieldChrome};
use crate::components::radio_group::{RadioGroup, RadioOptions};
use crate::components::select::{SelectContent, SelectOptions, SelectRoot, SelectTrigger, SelectValue};

/// Add or remove `value` from `selected`, keeping the options' order.
pub fn toggle_member(options: &[ListOption], selected: &[String], value: &str, on: bool) -> Vec<String> {
    options
        .iter()
        .map(|option| option.value.as_str())
        .filter(|candidate| {
            if *candidate == value {
                on
            } else {
                selected.iter().any(|s| s == candidate)
            }
        })
        .map(str::to_string)
        .collect()
}

/// One choice out of a short list, rendered as radio buttons.
#[component]
pub fn RadioGroupField(
    name: String,
    label: String,
    options: Vec<ListOption>,
    #[props(default)] description: Option<String>,
    #[props(default = false)] optional: bool,
    #[props(default)] rules: Rules,
    #[props(default)] default_value: String,
) -> Element {
    let field = use_field(&name, &label, optional, &rules, FieldValue::Text(default_value.clone()));
    let id = field.id();
    let error = field.error();

    rsx! {
        FieldChrome {
            id: id.clone(),
            label,
            description,
            error,
            required: field.is_required(),
            group: true,
            RadioGroup {
                default_value,
                on_value_change: move |value: String| {
                    field.set(FieldValue::Text(value));
                    field.touch();
                },
                div {
                    class: "field-options",
                    RadioOptions { options }
                }
            }
        }
    }
}

/// Any number of choices, rendered as checkboxes. The value is the list of
/// checked option values.
#[component]
pub fn CheckboxGroupField(
    name: String,
    label: String,
    options: Vec<ListOption>,
    #[props(default)] description: Option<String>,
    #[props(default = false)] optional: bool,
    #[props(default)] rules: Rules,
    #[props(default)] default_value: Vec<String>,
) -> Element {
    let field = use_field(&name, &label, optional, &rules, FieldValue::List(default_value));
    let id = field.id();
    let error = field.error();
    let selected = field.value().as_list().to_vec();

    let order = options.clone();
    let choose = use_callback(move |(value, on): (String, bool)| {
        let current = field.value().as_list().to_vec();
        field.set(FieldValue::List(toggle_member(&order, &current, &value, on)));
        field.touch();
    });

    rsx! {
        FieldChrome {
            id: id.clone(),
            label,
            description,
            error,
            required: field.is_required(),
            group: true,
            div {
                class: "field-options",
                for option in options {
                    LabeledCheckbox {
                        key: "{option.value}",
                        id: format!("{id}-{}", option.value),
                        label: option.label.clone(),
                        checked: selected.contains(&option.value),
                        disabled: option.disabled,
                        on_change: {
                            let value = option.value.clone();
                            move |on: bool| choose.call((value.clone(), on))
                        },
                    }
                }
            }
        }
    }
}

/// Dropdown select bound to the form; the value is the chosen option's value.
#[component]
pub fn SelectField(
    name: String,
    label: String,
    options: Vec<ListOption>,
    #[props(default)] description: Option<String>,
    #[props(default = "Select…".to_string())] placeholder: String,
    #[props(default = false)] optional: bool,
    #[props(default)] rules: Rules,
    #[props(default)] default_value: Option<String>,
    #[props(default = false)] disabled: bool,
) -> Element {
    let initial = FieldValue::Text(default_value.clone().unwrap_or_default());
    let field = use_field(&name, &label, optional, &rules, initial);
    let id = field.id();
    let error = field.error();

    rsx! {
        FieldChrome {
            id: id.clone(),
            label,
            description,
            error,
            required: field.is_required(),
            SelectRoot::<String> {
                default_value,
                placeholder,
                disabled,
                on_value_change: move |value: Option<String>| {
                    field.set(FieldValue::Text(value.unwrap_or_default()));
                    field.touch();
                },
                SelectTrigger {
                    id: "{id}",
                    SelectValue {}
                }
                SelectContent {
                    SelectOptions { options }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ui_types::options_from_pairs;

    #[test]
    fn toggling_keeps_option_order() {
        let options = options_from_pairs(&[("a", "A"), ("b", "B"), ("c", "C")]);
        let selected = vec!["c".to_string()];
        assert_eq!(toggle_member(&options, &selected, "a", true), vec!["a", "c"]);
        assert_eq!(toggle_member(&options, &selected, "c", false), Vec::<String>::new());
    }

    #[test]
    fn unknown_values_are_dropped() {
        let options = options_from_pairs(&[("a", "A")]);
        let selected = vec!["stale".to_string()];
        assert_eq!(toggle_member(&options, &selected, "a", true), vec!["a"]);
    }
}
