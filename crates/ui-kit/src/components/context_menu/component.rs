use dioxus::prelude::*;
use dioxus_primitives::context_menu as prim;

#[component]
pub fn ContextMenu(mut props: prim::ContextMenuProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "menu-root", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("../menu.css") }
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ContextMenu { ..props }
    }
}

/// The area that opens the menu on right click or long press.
#[component]
pub fn ContextMenuTrigger(mut props: prim::ContextMenuTriggerProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "context-menu-area", None, false));

    rsx! {
        prim::ContextMenuTrigger { ..props }
    }
}

#[component]
pub fn ContextMenuContent(mut props: prim::ContextMenuContentProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "menu-content", None, false));

    rsx! {
        prim::ContextMenuContent { ..props }
    }
}

#[component]
pub fn ContextMenuItem(mut props: prim::ContextMenuItemProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "menu-item", None, false));

    rsx! {
        prim::ContextMenuItem { ..props }
    }
}

#[component]
pub fn ContextMenuSeparator(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    rsx! {
        div { class: "menu-separator", role: "separator", ..attributes }
    }
}

#[component]
pub fn ContextMenuLabel(
    #[props(default)] depth: usize,
    /// Heading of a nested submenu rather than a plain group.
    #[props(default = false)]
    submenu: bool,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "menu-label",
            style: "--menu-depth: {depth};",
            "data-submenu": submenu,
            role: "presentation",
            {children}
        }
    }
}
