use dioxus::prelude::*;
use ui_kit::components::*;
use ui_types::{options_from_pairs, CustomRule, FieldValue, FormErrors, FormValues, Rules};

use crate::actions::use_actions;
use crate::components::StorySection;

/// Submitted values as pretty JSON for display.
pub fn values_json(values: &FormValues) -> String {
    serde_json::to_string_pretty(values).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "form values could not be serialized");
        String::from("{}")
    })
}

fn no_spaces() -> CustomRule {
    CustomRule::new("no_spaces", |value| match value {
        FieldValue::Text(text) if text.contains(char::is_whitespace) => {
            Some("Usernames cannot contain spaces".to_string())
        }
        _ => None,
    })
}

#[component]
pub fn Forms() -> Element {
    let log = use_actions();
    let mut submitted = use_signal(|| None::<String>);
    let mut invalid = use_signal(|| 0usize);

    let username_rules = use_hook(|| Rules::new().min_length(3, "At least 3 characters").custom(no_spaces()));
    let email_rules = use_hook(|| Rules::new().email("Enter a valid email address"));
    let website_rules = use_hook(|| Rules::new().url("Enter a full URL, including https://"));
    let bio_rules = use_hook(|| Rules::new().max_length(160, "Keep it under 160 characters"));
    let password_rules = use_hook(|| Rules::new().min_length(8, "Use at least 8 characters"));
    let topic_rules = use_hook(|| Rules::new().max_length(2, "Pick at most two topics"));

    rsx! {
        div { class: "story-page",
            h1 { "Forms" }
            p { class: "story-lead",
                "Fields are required unless marked optional. Errors appear once a field "
                "loses focus or after the first submit."
            }

            StorySection { title: "Account",
                Form {
                    on_submit: move |values: FormValues| {
                        log.record(format!("form submitted with {} fields", values.len()));
                        invalid.set(0);
                        submitted.set(Some(values_json(&values)));
                    },
                    on_invalid: move |errors: FormErrors| {
                        log.record(format!("form rejected: {} invalid", errors.len()));
                        invalid.set(errors.len());
                        submitted.set(None);
                    },
                    TextField { name: "username", label: "Username", rules: username_rules }
                    TextField {
                        name: "email",
                        label: "Email",
                        input_type: "email",
                        placeholder: "you@example.com",
                        rules: email_rules,
                    }
                    TextField {
                        name: "website",
                        label: "Website",
                        input_type: "url",
                        optional: true,
                        rules: website_rules,
                    }
                    PasswordField {
                        name: "password",
                        label: "Password",
                        autocomplete: "new-password",
                        rules: password_rules,
                    }
                    TextareaField {
                        name: "bio",
                        label: "Bio",
                        optional: true,
                        description: "Shown on your public profile.",
                        rules: bio_rules,
                    }
                    NumberField { name: "seats", label: "Seats", min: 1.0, max: 50.0, default_value: 5.0 }
                    RangeField { name: "volume", label: "Notification volume", unit: "%", default_value: 60.0 }
                    SelectField {
                        name: "plan",
                        label: "Plan",
                        options: options_from_pairs(&[("free", "Free"), ("pro", "Pro"), ("team", "Team")]),
                    }
                    RadioGroupField {
                        name: "billing",
                        label: "Billing period",
                        options: options_from_pairs(&[("monthly", "Monthly"), ("yearly", "Yearly")]),
                        default_value: "monthly",
                    }
                    CheckboxGroupField {
                        name: "topics",
                        label: "Newsletter topics",
                        optional: true,
                        options: options_from_pairs(&[("product", "Product news"), ("eng", "Engineering"), ("events", "Events")]),
                        rules: topic_rules,
                    }
                    FileField { name: "avatar", label: "Avatar", optional: true, accept: "image/*" }
                    SwitchField {
                        name: "terms",
                        label: "Accept the terms of service",
                        description: "Required to create an account.",
                    }
                    div { class: "form-actions",
                        Button { submit: true, "Create account" }
                    }
                }
            }

            if invalid() > 0 {
                p { class: "story-error", role: "alert", "{invalid} fields need attention." }
            }
            if let Some(json) = submitted() {
                StorySection { title: "Submitted values",
                    pre { class: "story-json", "{json}" }
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
    fn values_render_as_json_object() {
        let values = FormValues::from([
            ("seats".to_string(), FieldValue::Number(Some(5.0))),
            ("terms".to_string(), FieldValue::Bool(true)),
        ]);
        assert_eq!(values_json(&values), "{\n  \"seats\": 5.0,\n  \"terms\": true\n}");
    }

    #[test]
    fn usernames_reject_whitespace() {
        let rules = Rules::new().custom(no_spaces());
        assert_eq!(
            rules.check(&FieldValue::Text("ada lovelace".into())),
            Some("Usernames cannot contain spaces".to_string())
        );
        assert_eq!(rules.check(&FieldValue::Text("ada".into())), None);
    }
}
