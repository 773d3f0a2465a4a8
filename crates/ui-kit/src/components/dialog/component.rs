use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_primitives::dialog as prim;
use ui_types::{DialogPresentation, PresentationLatch, Side, SMALL_SCREEN_BREAKPOINT};

use crate::components::button::{Button, ButtonVariant};
use crate::components::overlay::{Overlay, OverlayBody, OverlayDescription, OverlayHeader, OverlayTitle};
use crate::hooks::{use_open_state, use_viewport};

#[component]
pub fn DialogRoot(mut props: prim::DialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dialog-backdrop", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot { ..props }
    }
}

#[component]
pub fn DialogContent(mut props: prim::DialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("dialog-content".to_string());
    }

    rsx! {
        prim::DialogContent { ..props }
    }
}

#[component]
pub fn DialogTitle(mut props: prim::DialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dialog-title", None, false));

    rsx! {
        prim::DialogTitle { ..props }
    }
}

#[component]
pub fn DialogDescription(mut props: prim::DialogDescriptionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dialog-description", None, false));

    rsx! {
        prim::DialogDescription { ..props }
    }
}

/// A dialog that renders as a centered modal on wide screens and as a
/// draggable bottom sheet below `breakpoint`.
///
/// The rendering is chosen when the dialog opens and kept until it has
/// finished closing, so resizing mid-interaction never swaps it.
#[component]
pub fn Dialog(
    #[props(default)] open: Option<bool>,
    #[props(default)] on_open_change: Option<EventHandler<bool>>,
    #[props(default = false)] default_open: bool,
    #[props(default)] trigger_label: Option<String>,
    title: String,
    #[props(default)] description: Option<String>,
    #[props(default = SMALL_SCREEN_BREAKPOINT)] breakpoint: f64,
    children: Element,
) -> Element {
    let state = use_open_state(open, on_open_change, default_open);
    let viewport = use_viewport();
    // plain cell: latching must not schedule a re-render
    let latch = use_hook(|| Rc::new(Cell::new(PresentationLatch::default())));

    let is_open = state.is_open();
    let presentation = {
        let mut next = latch.get();
        let width = viewport.read().map(|v| v.width);
        let presentation = next.observe(is_open, width, breakpoint);
        latch.set(next);
        presentation
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if let Some(label) = trigger_label {
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| state.set(true),
                "{label}"
            }
        }
        match presentation {
            Some(DialogPresentation::Sheet) => rsx! {
                Overlay {
                    open: is_open,
                    on_open_change: move |open| state.set(open),
                    side: Side::Bottom,
                    aria_label: title.clone(),
                    OverlayHeader {
                        OverlayTitle { "{title}" }
                        if let Some(description) = description.clone() {
                            OverlayDescription { "{description}" }
                        }
                    }
                    OverlayBody { {children} }
                }
            },
            Some(DialogPresentation::Modal) => rsx! {
                DialogRoot {
                    open: is_open,
                    on_open_change: move |open: bool| state.set(open),
                    DialogContent {
                        DialogTitle { "{title}" }
                        if let Some(description) = description.clone() {
                            DialogDescription { "{description}" }
                        }
                        div { class: "dialog-body", {children} }
                    }
                }
            },
            // not measured yet
            None => rsx! {},
        }
    }
}
