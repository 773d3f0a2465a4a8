use dioxus::prelude::*;
use ui_types::Side;

use crate::components::button::{Button, ButtonVariant};
use crate::components::overlay::{Overlay, OverlayDescription, OverlayHeader, OverlayTitle};
use crate::hooks::use_open_state;

/// One choice in an [`ActionSheet`].
#[derive(Debug, Clone, PartialEq)]
pub struct SheetAction {
    pub value: String,
    pub label: String,
    pub destructive: bool,
    pub disabled: bool,
}

impl SheetAction {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            destructive: false,
            disabled: false,
        }
    }

    pub fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Bottom sheet listing actions, dismissed by dragging down, the backdrop,
/// the cancel row, or picking an action.
#[component]
pub fn ActionSheet(
    #[props(default)] open: Option<bool>,
    #[props(default)] on_open_change: Option<EventHandler<bool>>,
    #[props(default = false)] default_open: bool,
    /// Label of a button that opens the sheet; omit when opening it yourself.
    #[props(default)]
    trigger_label: Option<String>,
    title: String,
    #[props(default)] description: Option<String>,
    actions: Vec<SheetAction>,
    on_action: EventHandler<String>,
    #[props(default = "Cancel".to_string())] cancel_label: String,
) -> Element {
    let state = use_open_state(open, on_open_change, default_open);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if let Some(label) = trigger_label {
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| state.set(true),
                "{label}"
            }
        }
        Overlay {
            open: state.is_open(),
            on_open_change: move |open| state.set(open),
            side: Side::Bottom,
            aria_label: title.clone(),
            OverlayHeader {
                OverlayTitle { "{title}" }
                if let Some(description) = description {
                    OverlayDescription { "{description}" }
                }
            }
            div {
                class: "action-sheet-list",
                role: "menu",
                for action in actions {
                    button {
                        key: "{action.value}",
                        class: "action-sheet-item",
                        r#type: "button",
                        role: "menuitem",
                        "data-destructive": action.destructive,
                        disabled: action.disabled,
                        onpointerdown: move |evt| evt.stop_propagation(),
                        onclick: {
                            let value = action.value.clone();
                            move |_| {
                                on_action.call(value.clone());
                                state.set(false);
                            }
                        },
                        "{action.label}"
                    }
                }
            }
            button {
                class: "action-sheet-cancel",
                r#type: "button",
                onpointerdown: move |evt| evt.stop_propagation(),
                onclick: move |_| state.set(false),
                "{cancel_label}"
            }
        }
    }
}
