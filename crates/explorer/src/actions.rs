//! Action log shown by the essentials addon.

use dioxus::prelude::*;
use ui_kit::components::{Button, ButtonSize, ButtonVariant, CountBadge};

const MAX_ENTRIES: usize = 50;

/// Insert `entry` at the front, dropping the oldest beyond `cap`.
pub fn push_capped(entries: &mut Vec<String>, entry: String, cap: usize) {
    entries.insert(0, entry);
    entries.truncate(cap);
}

/// Events reported by stories, newest first.
#[derive(Clone, Copy, PartialEq)]
pub struct ActionLog {
    entries: Signal<Vec<String>>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self {
            entries: Signal::new(Vec::new()),
        }
    }

    pub fn record(&self, entry: impl Into<String>) {
        let entry = entry.into();
        tracing::debug!(action = %entry, "story action");
        let mut entries = self.entries;
        push_capped(&mut entries.write(), entry, MAX_ENTRIES);
    }

    pub fn clear(&self) {
        let mut entries = self.entries;
        entries.write().clear();
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.read().clone()
    }
}

pub fn use_actions() -> ActionLog {
    use_context()
}

#[component]
pub fn ActionPanel() -> Element {
    let log = use_actions();
    let entries = log.entries();

    rsx! {
        aside { class: "action-panel", "aria-label": "Actions",
            div { class: "action-panel-header",
                h3 { "Actions" }
                CountBadge { count: entries.len() }
                Button {
                    size: ButtonSize::Sm,
                    variant: ButtonVariant::Ghost,
                    disabled: entries.is_empty(),
                    onclick: move |_| log.clear(),
                    "Clear"
                }
            }
            if entries.is_empty() {
                p { class: "action-panel-empty", "Interact with a story to see its events." }
            } else {
                ol { class: "action-panel-list",
                    for (i, entry) in entries.iter().enumerate() {
                        li { key: "{i}", "{entry}" }
                    }
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
    fn newest_entry_comes_first_and_cap_holds() {
        let mut entries = Vec::new();
        for i in 0..4 {
            push_capped(&mut entries, format!("event {i}"), 3);
        }
        assert_eq!(entries, vec!["event 3", "event 2", "event 1"]);
    }
}
