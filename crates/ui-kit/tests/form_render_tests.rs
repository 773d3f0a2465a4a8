//! Static rendering of form fields inside a `Form`.
//!
//! Run with: `cargo test -p ui-kit --test form_render_tests`

mod common;

use common::{count, render};
use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use ui_kit::components::*;
use ui_types::{options_from_pairs, Rules};

#[test]
fn fields_are_required_unless_optional() {
    let html = render(|| {
        rsx! {
            Form {
                on_submit: move |_| {},
                TextField { name: "email", label: "Email", input_type: "email" }
                TextField { name: "nickname", label: "Nickname", optional: true }
            }
        }
    });
    assert_eq!(count(&html, "label-required"), 1, "{html}");
    assert!(html.contains(r#"id="field-email""#), "{html}");
    assert!(html.contains(r#"type="email""#), "{html}");
    assert!(html.contains("novalidate"), "{html}");
}

#[test]
fn errors_stay_hidden_on_first_render() {
    let html = render(|| {
        rsx! {
            Form {
                on_submit: move |_| {},
                TextField { name: "name", label: "Name" }
            }
        }
    });
    assert!(!html.contains("field-error"), "{html}");
    assert!(!html.contains("is required"), "{html}");
}

#[test]
fn description_is_linked_to_the_control() {
    let html = render(|| {
        rsx! {
            Form {
                on_submit: move |_| {},
                TextField { name: "team", label: "Team", description: "Shown on your profile" }
            }
        }
    });
    assert!(html.contains(r#"id="field-team-description""#), "{html}");
    assert!(html.contains(r#"aria-describedby="field-team-description""#), "{html}");
}

#[test]
fn textarea_counts_characters_against_max_length() {
    let html = render(|| {
        rsx! {
            Form {
                on_submit: move |_| {},
                TextareaField {
                    name: "bio",
                    label: "Bio",
                    default_value: "hello",
                    rules: Rules::new().max_length(140, "Too long"),
                }
            }
        }
    });
    assert!(html.contains("5 / 140"), "{html}");
}

#[test]
fn password_starts_hidden() {
    let html = render(|| {
        rsx! {
            Form {
                on_submit: move |_| {},
                PasswordField { name: "password", label: "Password" }
            }
        }
    });
    assert!(html.contains(r#"type="password""#), "{html}");
    assert!(html.contains("Show password"), "{html}");
}

#[test]
fn number_field_shows_default_value() {
    let html = render(|| {
        rsx! {
            Form {
                on_submit: move |_| {},
                NumberField { name: "seats", label: "Seats", min: 1.0, max: 10.0, default_value: 3.0 }
            }
        }
    });
    assert!(html.contains(r#"value="3""#), "{html}");
    assert!(html.contains("Increase"), "{html}");
}

#[test]
fn checkbox_group_renders_a_fieldset() {
    let html = render(|| {
        rsx! {
            Form {
                on_submit: move |_| {},
                CheckboxGroupField {
                    name: "topics",
                    label: "Topics",
                    options: options_from_pairs(&[("rust", "Rust"), ("web", "Web")]),
                }
            }
        }
    });
    assert!(html.contains("<fieldset"), "{html}");
    assert!(html.contains("<legend"), "{html}");
    assert!(html.contains("field-topics-rust"), "{html}");
}
