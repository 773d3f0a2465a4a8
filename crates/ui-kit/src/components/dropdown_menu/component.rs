use dioxus::prelude::*;
use dioxus_primitives::dropdown_menu as prim;

#[component]
pub fn DropdownMenu(mut props: prim::DropdownMenuProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "menu-root", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("../menu.css") }
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DropdownMenu { ..props }
    }
}

#[component]
pub fn DropdownMenuTrigger(mut props: prim::DropdownMenuTriggerProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "dropdown-menu-trigger", None, false));

    rsx! {
        prim::DropdownMenuTrigger { ..props }
    }
}

#[component]
pub fn DropdownMenuContent(mut props: prim::DropdownMenuContentProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "menu-content", None, false));

    rsx! {
        prim::DropdownMenuContent { ..props }
    }
}

#[component]
pub fn DropdownMenuItem<T: Clone + PartialEq + 'static>(
    mut props: prim::DropdownMenuItemProps<T>,
) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "menu-item", None, false));

    rsx! {
        prim::DropdownMenuItem { ..props }
    }
}

#[component]
pub fn DropdownMenuSeparator(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    rsx! {
        div { class: "menu-separator", role: "separator", ..attributes }
    }
}

/// Non-interactive heading above a group of items.
#[component]
pub fn DropdownMenuLabel(
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
