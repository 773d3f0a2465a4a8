//! Static rendering of presentational components.
//!
//! Run with: `cargo test -p ui-kit --test leaf_render_tests`

mod common;

use common::{count, render};
use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use ui_kit::components::*;

#[test]
fn button_carries_variant_and_size() {
    let html = render(|| {
        rsx! {
            Button { variant: ButtonVariant::Destructive, size: ButtonSize::Sm, "Delete" }
        }
    });
    assert!(html.contains(r#"data-style="destructive""#), "{html}");
    assert!(html.contains(r#"data-size="sm""#), "{html}");
    assert!(html.contains(r#"type="button""#), "{html}");
    assert!(html.contains("Delete"));
    assert!(!html.contains("button-spinner"));
}

#[test]
fn loading_button_shows_spinner_and_submits() {
    let html = render(|| {
        rsx! {
            Button { loading: true, submit: true, "Save" }
        }
    });
    assert!(html.contains("button-spinner"), "{html}");
    assert!(html.contains(r#"type="submit""#), "{html}");
    assert!(html.contains("disabled"), "{html}");
}

#[test]
fn badge_variants_map_to_data_style() {
    let html = render(|| {
        rsx! {
            Badge { variant: BadgeVariant::Success, "Paid" }
            Badge { variant: BadgeVariant::Warning, "Due" }
        }
    });
    assert!(html.contains(r#"data-style="success""#), "{html}");
    assert!(html.contains(r#"data-style="warning""#), "{html}");
    assert_eq!(count(&html, "class=\"badge"), 2);
}

#[test]
fn card_renders_its_sections() {
    let html = render(|| {
        rsx! {
            Card {
                variant: CardVariant::Outline,
                interactive: true,
                CardHeader {
                    CardTitle { "Invoices" }
                    CardDescription { "Last 30 days" }
                }
                CardContent { "12 open" }
                CardFooter { "Updated now" }
            }
        }
    });
    for class in ["card-header", "card-title", "card-description", "card-content", "card-footer"] {
        assert!(html.contains(class), "missing {class} in {html}");
    }
    assert!(html.contains(r#"data-style="outline""#), "{html}");
}

#[test]
fn user_avatar_without_image_shows_initials() {
    let html = render(|| {
        rsx! {
            UserAvatar { name: "Ada Lovelace", size: AvatarSize::Lg }
        }
    });
    assert!(html.contains("avatar-frame"), "{html}");
    assert!(html.contains(r#"data-size="lg""#), "{html}");
    assert!(html.contains("AL"), "{html}");
}

#[test]
fn separator_and_label_render() {
    let html = render(|| {
        rsx! {
            Label { html_for: "email", "Email" }
            Separator {}
        }
    });
    assert!(html.contains(r#"for="email""#), "{html}");
    assert!(html.contains("separator"), "{html}");
}

#[test]
fn closed_overlay_renders_nothing() {
    let html = render(|| {
        rsx! {
            Overlay {
                open: false,
                on_open_change: move |_| {},
                OverlayBody { "hidden" }
            }
        }
    });
    assert!(!html.contains("hidden"), "{html}");
    assert!(!html.contains("overlay-root"), "{html}");
}

#[test]
fn count_badge_caps_and_hides_at_zero() {
    let html = render(|| {
        rsx! {
            CountBadge { count: 250 }
            CountBadge { count: 0 }
        }
    });
    assert!(html.contains("99+"), "{html}");
    assert_eq!(count(&html, "badge-count"), 1);
}

#[test]
fn text_separator_and_required_label() {
    let html = render(|| {
        rsx! {
            TextSeparator { text: "or" }
            Label { html_for: "name", required: true, "Name" }
        }
    });
    assert!(html.contains(r#"role="separator""#), "{html}");
    assert!(html.contains("label-required"), "{html}");
}

#[test]
fn open_overlay_mounts_focusable_root_and_identified_panel() {
    let html = render(|| {
        rsx! {
            Overlay {
                open: true,
                on_open_change: move |_| {},
                aria_label: "Filters",
                OverlayBody { "Pick a status" }
            }
        }
    });
    assert!(html.contains("overlay-root"), "{html}");
    assert!(html.contains(r#"data-state="opening""#), "{html}");
    assert!(html.contains(r#"tabindex="-1""#), "{html}");
    assert!(html.contains(r#"id="sheet-panel-"#), "{html}");
    assert!(html.contains("Pick a status"), "{html}");
}
