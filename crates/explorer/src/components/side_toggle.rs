use dioxus::prelude::*;
use ui_kit::components::{Button, ButtonSize, ButtonVariant};
use ui_types::{Side, ALL_SIDES};

/// Segmented buttons choosing which edge an overlay slides in from.
#[component]
pub fn SideToggle(side: Signal<Side>) -> Element {
    let current = *side.read();

    rsx! {
        div { class: "side-toggle", role: "group", "aria-label": "Overlay side",
            for candidate in ALL_SIDES.iter().copied() {
                Button {
                    key: "{candidate}",
                    size: ButtonSize::Sm,
                    variant: if candidate == current { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                    onclick: move |_| side.set(candidate),
                    "{candidate}"
                }
            }
        }
    }
}
