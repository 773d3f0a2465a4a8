use dioxus::prelude::*;
use ui_kit::components::{
    selected_label, Combobox, Label, SelectContent, SelectOptions, SelectRoot, SelectTrigger, SelectValue,
};
use ui_types::{options_from_pairs, ListOption};

use crate::actions::use_actions;
use crate::components::StorySection;

fn time_zones() -> Vec<ListOption> {
    let mut zones = options_from_pairs(&[
        ("utc", "UTC"),
        ("europe/london", "London"),
        ("europe/berlin", "Berlin"),
        ("asia/tokyo", "Tokyo"),
        ("america/new_york", "New York"),
        ("america/los_angeles", "Los Angeles"),
        ("australia/sydney", "Sydney"),
    ]);
    zones.push(ListOption::new("antarctica/troll", "Troll Station").disabled());
    zones
}

#[component]
pub fn Pickers() -> Element {
    let log = use_actions();
    let mut zone = use_signal(|| None::<String>);
    let sizes = options_from_pairs(&[("sm", "Small"), ("md", "Medium"), ("lg", "Large")]);
    let zones = time_zones();
    let chosen = selected_label(&zones, zone.read().as_deref());

    rsx! {
        div { class: "story-page",
            h1 { "Pickers" }

            StorySection { title: "Select",
                div { class: "story-field",
                    Label { html_for: "size-select", "Size" }
                    SelectRoot::<String> {
                        placeholder: "Pick a size",
                        on_value_change: move |value: Option<String>| {
                            log.record(format!("select: {}", value.unwrap_or_default()));
                        },
                        SelectTrigger { id: "size-select", SelectValue {} }
                        SelectContent {
                            SelectOptions { options: sizes }
                        }
                    }
                }
            }

            StorySection {
                title: "Combobox",
                note: "Type to filter. Arrow keys move the highlight and skip disabled options.",
                div { class: "story-field",
                    Label { html_for: "zone-combobox", "Time zone" }
                    Combobox {
                        id: "zone-combobox",
                        options: zones.clone(),
                        value: zone(),
                        placeholder: "Search time zones…",
                        on_value_change: move |value: String| {
                            log.record(format!("combobox: {value}"));
                            zone.set(Some(value));
                        },
                    }
                    p { class: "story-caption",
                        if chosen.is_empty() {
                            "Nothing selected yet."
                        } else {
                            "Selected: {chosen}"
                        }
                    }
                }
            }
        }
    }
}
