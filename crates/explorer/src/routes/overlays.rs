use dioxus::prelude::*;
use ui_kit::components::*;
use ui_types::Side;

use crate::actions::use_actions;
use crate::components::{SideToggle, StorySection};

#[component]
pub fn Overlays() -> Element {
    let log = use_actions();
    let mut side = use_signal(|| Side::Right);
    let mut overlay_open = use_signal(|| false);
    let mut dialog_open = use_signal(|| false);

    let share = vec![
        SheetAction::new("copy", "Copy link"),
        SheetAction::new("email", "Send by email"),
        SheetAction::new("print", "Print").disabled(),
        SheetAction::new("delete", "Delete file").destructive(),
    ];

    rsx! {
        div { class: "story-page",
            h1 { "Overlays" }

            StorySection {
                title: "Overlay",
                note: "Drag the panel toward its edge to dismiss. A short flick closes it too; a small drag snaps back.",
                div { class: "story-row",
                    SideToggle { side }
                    Button {
                        onclick: move |_| overlay_open.set(true),
                        "Open from {side}"
                    }
                }
                Overlay {
                    open: overlay_open(),
                    side: side(),
                    aria_label: "Filters",
                    on_open_change: move |open: bool| {
                        overlay_open.set(open);
                        log.record(format!("overlay open: {open}"));
                    },
                    OverlayHeader {
                        OverlayTitle { "Filters" }
                        OverlayDescription { "Narrow the invoice list." }
                        OverlayClose { on_close: move |_| overlay_open.set(false) }
                    }
                    OverlayBody {
                        p { "Status, customer and date filters would live here." }
                    }
                    OverlayFooter {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| overlay_open.set(false),
                            "Cancel"
                        }
                        Button {
                            onclick: move |_| {
                                log.record("filters applied");
                                overlay_open.set(false);
                            },
                            "Apply"
                        }
                    }
                }
            }

            StorySection {
                title: "Action sheet",
                note: "Uncontrolled: the sheet owns its open state and the trigger button.",
                ActionSheet {
                    trigger_label: "Share",
                    title: "Share report",
                    description: "Q3 revenue.pdf",
                    actions: share,
                    on_action: move |value: String| log.record(format!("action: {value}")),
                }
            }

            StorySection {
                title: "Dialog",
                note: "Centered modal on wide screens, draggable bottom sheet under 640px. Resize the window between openings.",
                div { class: "story-row",
                    Dialog {
                        trigger_label: "Uncontrolled dialog",
                        title: "Rename project",
                        description: "Names are visible to everyone on the team.",
                        p { "Dialog content scrolls when it is taller than the screen." }
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| dialog_open.set(true),
                        "Controlled dialog"
                    }
                }
                Dialog {
                    open: dialog_open(),
                    on_open_change: move |open: bool| {
                        dialog_open.set(open);
                        log.record(format!("dialog open: {open}"));
                    },
                    title: "Discard changes?",
                    description: "Unsaved edits will be lost.",
                    div { class: "story-row",
                        Button {
                            variant: ButtonVariant::Destructive,
                            onclick: move |_| {
                                log.record("changes discarded");
                                dialog_open.set(false);
                            },
                            "Discard"
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| dialog_open.set(false),
                            "Keep editing"
                        }
                    }
                }
            }
        }
    }
}
