use dioxus::prelude::*;
use ui_kit::components::*;

use crate::actions::use_actions;
use crate::components::StorySection;

const VARIANTS: &[(ButtonVariant, &str)] = &[
    (ButtonVariant::Primary, "Primary"),
    (ButtonVariant::Secondary, "Secondary"),
    (ButtonVariant::Destructive, "Destructive"),
    (ButtonVariant::Outline, "Outline"),
    (ButtonVariant::Ghost, "Ghost"),
    (ButtonVariant::Link, "Link"),
];

const BADGES: &[(BadgeVariant, &str)] = &[
    (BadgeVariant::Primary, "Primary"),
    (BadgeVariant::Secondary, "Secondary"),
    (BadgeVariant::Destructive, "Overdue"),
    (BadgeVariant::Success, "Paid"),
    (BadgeVariant::Warning, "Pending"),
    (BadgeVariant::Outline, "Draft"),
];

#[component]
pub fn Leaves() -> Element {
    let log = use_actions();
    let mut notify = use_signal(|| true);
    let mut agreed = use_signal(|| false);

    rsx! {
        div { class: "story-page",
            h1 { "Leaves" }

            StorySection { title: "Button",
                div { class: "story-row",
                    for (variant, name) in VARIANTS.iter().copied() {
                        Button {
                            key: "{name}",
                            variant,
                            onclick: move |_| log.record(format!("button clicked: {name}")),
                            "{name}"
                        }
                    }
                }
                div { class: "story-row",
                    Button { size: ButtonSize::Sm, "Small" }
                    Button { size: ButtonSize::Md, "Medium" }
                    Button { size: ButtonSize::Lg, "Large" }
                    Button { loading: true, "Saving" }
                    Button { disabled: true, "Disabled" }
                }
            }

            StorySection { title: "Badge",
                div { class: "story-row",
                    for (variant, name) in BADGES.iter().copied() {
                        Badge { key: "{name}", variant, "{name}" }
                    }
                }
            }

            StorySection {
                title: "Avatar",
                note: "Broken or missing images fall back to initials, then to a glyph.",
                div { class: "story-row",
                    UserAvatar { name: "Grace Hopper", size: AvatarSize::Sm }
                    UserAvatar { name: "Alan Mathison Turing" }
                    UserAvatar { name: "Ada Lovelace", size: AvatarSize::Lg, src: "/missing.png" }
                    UserAvatar { name: "", size: AvatarSize::Lg }
                }
            }

            StorySection { title: "Card",
                div { class: "story-grid",
                    for variant in [CardVariant::Elevated, CardVariant::Outline, CardVariant::Ghost] {
                        Card { key: "{variant.class()}", variant,
                            CardHeader {
                                CardTitle { "{variant.class()}" }
                                CardDescription { "Quarterly summary" }
                            }
                            CardContent { "12 invoices, 3 overdue." }
                            CardFooter {
                                Button { size: ButtonSize::Sm, variant: ButtonVariant::Outline, "Open" }
                            }
                        }
                    }
                }
            }

            StorySection { title: "Switch, checkbox and label",
                div { class: "story-stack",
                    LabeledSwitch {
                        id: "notify",
                        label: "Email notifications",
                        checked: notify(),
                        on_change: move |on: bool| {
                            notify.set(on);
                            log.record(format!("switch: {on}"));
                        },
                    }
                    Separator {}
                    LabeledCheckbox {
                        id: "terms",
                        label: "I agree to the terms",
                        checked: agreed(),
                        on_change: move |on: bool| {
                            agreed.set(on);
                            log.record(format!("checkbox: {on}"));
                        },
                    }
                    TextSeparator { text: "or" }
                    Label { html_for: "terms", required: true, "Labels forward clicks to their control." }
                }
            }
        }
    }
}
