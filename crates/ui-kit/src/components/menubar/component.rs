use dioxus::prelude::*;
use dioxus_primitives::menubar as prim;

#[component]
pub fn Menubar(mut props: prim::MenubarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "menubar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("../menu.css") }
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Menubar { ..props }
    }
}

#[component]
pub fn MenubarMenu(mut props: prim::MenubarMenuProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "menu-root", None, false));

    rsx! {
        prim::MenubarMenu { ..props }
    }
}

#[component]
pub fn MenubarTrigger(mut props: prim::MenubarTriggerProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "menubar-trigger", None, false));

    rsx! {
        prim::MenubarTrigger { ..props }
    }
}

#[component]
pub fn MenubarContent(mut props: prim::MenubarContentProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "menu-content", None, false));

    rsx! {
        prim::MenubarContent { ..props }
    }
}

#[component]
pub fn MenubarItem(mut props: prim::MenubarItemProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "menu-item", None, false));

    rsx! {
        prim::MenubarItem { ..props }
    }
}

#[component]
pub fn MenubarSeparator(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    rsx! {
        div { class: "menu-separator", role: "separator", ..attributes }
    }
}

#[component]
pub fn MenubarLabel(
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
