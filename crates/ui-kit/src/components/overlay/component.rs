use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;
use ui_types::{Axis, Point, Side};

use crate::hooks::use_sheet;

fn pointer_point(evt: &PointerEvent) -> Point {
    let client = evt.client_coordinates();
    Point::new(client.x, client.y)
}

/// A panel that slides in from `side` over a dimming backdrop and can be
/// dragged back toward its edge to dismiss.
///
/// `on_open_change(false)` fires after the exit animation completes, however
/// the close was started.
#[component]
pub fn Overlay(
    open: bool,
    on_open_change: EventHandler<bool>,
    #[props(default)] side: Side,
    /// Backdrop clicks and Escape close the panel.
    #[props(default = true)]
    dismissible: bool,
    #[props(default)] aria_label: Option<String>,
    children: Element,
) -> Element {
    let dismissed = use_callback(move |_: ()| on_open_change.call(false));
    let sheet = use_sheet(side, open, dismissed);

    if !sheet.is_visible() {
        return rsx! {};
    }

    let opacity = sheet.backdrop_opacity();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "overlay-root",
            "data-state": sheet.phase_name(),
            "data-dragging": sheet.is_dragging(),
            tabindex: "-1",
            // take focus so Escape works before anything inside is clicked
            onmounted: move |evt| async move {
                let _ = evt.set_focus(true).await;
            },
            // captured pointer events bubble here from the panel
            onpointermove: move |evt| sheet.pointer_move(pointer_point(&evt)),
            onpointerup: move |evt| sheet.pointer_up(pointer_point(&evt)),
            onpointercancel: move |evt| sheet.pointer_up(pointer_point(&evt)),
            onkeydown: move |evt| {
                if dismissible && evt.key() == Key::Escape {
                    sheet.close();
                }
            },
            div {
                class: "overlay-backdrop",
                style: "opacity: {opacity:.3};",
                onclick: move |_| {
                    if dismissible {
                        sheet.close();
                    }
                },
            }
            div {
                id: sheet.panel_id(),
                class: "overlay-panel",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": aria_label.unwrap_or_default(),
                "data-side": side.as_str(),
                style: sheet.panel_style(),
                onmounted: move |evt| async move {
                    if let Ok(rect) = evt.get_client_rect().await {
                        let size = match side.axis() {
                            Axis::X => rect.size.width,
                            Axis::Y => rect.size.height,
                        };
                        sheet.measure(size);
                    }
                },
                onpointerdown: move |evt| sheet.pointer_down(pointer_point(&evt), evt.pointer_id()),
                // capture lost without a pointerup, e.g. the browser took the gesture
                onlostpointercapture: move |evt| sheet.pointer_up(pointer_point(&evt)),
                if matches!(side, Side::Bottom | Side::Top) {
                    div { class: "overlay-handle", "aria-hidden": "true" }
                }
                {children}
            }
        }
    }
}

#[component]
pub fn OverlayHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "overlay-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn OverlayTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "overlay-title", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        h2 { ..merged, {children} }
    }
}

#[component]
pub fn OverlayDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "overlay-description", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        p { ..merged, {children} }
    }
}

#[component]
pub fn OverlayBody(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "overlay-body", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn OverlayFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "overlay-footer", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div { ..merged, {children} }
    }
}

/// Close glyph; pointer-down is stopped so pressing it never starts a drag.
#[component]
pub fn OverlayClose(on_close: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "overlay-close",
            r#type: "button",
            "aria-label": "Close",
            onpointerdown: move |evt| evt.stop_propagation(),
            onclick: move |_| on_close.call(()),
            Icon::<LdX> { icon: LdX, width: 16, height: 16 }
        }
    }
}
