use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdEyeOff};
use dioxus_free_icons::Icon;
use ui_types::{char_count, FieldValue, Rules};

use crate::components::form::{described_by, use_field, FieldChrome};

/// Single-line text input bound to the enclosing form.
#[component]
pub fn TextField(
    name: String,
    label: String,
    #[props(default)] description: Option<String>,
    #[props(default)] placeholder: String,
    /// Skip the default required rule.
    #[props(default = false)]
    optional: bool,
    #[props(default)] rules: Rules,
    /// `text`, `email`, `url`, `tel` and friends.
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(default)] default_value: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    let field = use_field(&name, &label, optional, &rules, FieldValue::Text(default_value));
    let id = field.id();
    let text = field.text();
    let error = field.error();
    let counter = char_count(&text, field.rules().max_length_limit());

    rsx! {
        FieldChrome {
            id: id.clone(),
            label,
            description,
            error: error.clone(),
            counter,
            required: field.is_required(),
            input {
                id: "{id}",
                name: "{name}",
                class: "field-input",
                r#type: "{input_type}",
                value: "{text}",
                placeholder: "{placeholder}",
                disabled,
                "aria-invalid": error.is_some(),
                "aria-describedby": described_by(&id, error.is_some()),
                oninput: move |evt| field.set(FieldValue::Text(evt.value())),
                onblur: move |_| field.touch(),
            }
        }
    }
}

/// Multi-line text input; shows a character counter when a max length rule is set.
#[component]
pub fn TextareaField(
    name: String,
    label: String,
    #[props(default)] description: Option<String>,
    #[props(default)] placeholder: String,
    #[props(default = false)] optional: bool,
    #[props(default)] rules: Rules,
    #[props(default = 4)] rows: u32,
    #[props(default)] default_value: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    let field = use_field(&name, &label, optional, &rules, FieldValue::Text(default_value));
    let id = field.id();
    let text = field.text();
    let error = field.error();
    let counter = char_count(&text, field.rules().max_length_limit());

    rsx! {
        FieldChrome {
            id: id.clone(),
            label,
            description,
            error: error.clone(),
            counter,
            required: field.is_required(),
            textarea {
                id: "{id}",
                name: "{name}",
                class: "field-input",
                rows: "{rows}",
                value: "{text}",
                placeholder: "{placeholder}",
                disabled,
                "aria-invalid": error.is_some(),
                "aria-describedby": described_by(&id, error.is_some()),
                oninput: move |evt| field.set(FieldValue::Text(evt.value())),
                onblur: move |_| field.touch(),
            }
        }
    }
}

/// Password input with a show/hide toggle.
#[component]
pub fn PasswordField(
    name: String,
    label: String,
    #[props(default)] description: Option<String>,
    #[props(default)] placeholder: String,
    #[props(default = false)] optional: bool,
    #[props(default)] rules: Rules,
    #[props(default = "current-password".to_string())] autocomplete: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    let field = use_field(&name, &label, optional, &rules, FieldValue::Text(String::new()));
    let mut revealed = use_signal(|| false);
    let id = field.id();
    let text = field.text();
    let error = field.error();

    rsx! {
        FieldChrome {
            id: id.clone(),
            label,
            description,
            error: error.clone(),
            required: field.is_required(),
            div {
                class: "field-control",
                input {
                    id: "{id}",
                    name: "{name}",
                    class: "field-input",
                    r#type: if revealed() { "text" } else { "password" },
                    autocomplete: "{autocomplete}",
                    value: "{text}",
                    placeholder: "{placeholder}",
                    disabled,
                    "aria-invalid": error.is_some(),
                    "aria-describedby": described_by(&id, error.is_some()),
                    oninput: move |evt| field.set(FieldValue::Text(evt.value())),
                    onblur: move |_| field.touch(),
                }
                button {
                    class: "field-adornment",
                    r#type: "button",
                    "aria-label": if revealed() { "Hide password" } else { "Show password" },
                    "aria-pressed": revealed(),
                    disabled,
                    onclick: move |_| revealed.toggle(),
                    if revealed() {
                        Icon::<LdEyeOff> { icon: LdEyeOff, width: 16, height: 16 }
                    } else {
                        Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}
