//! Menus rendered from a [`MenuConfig`] tree.
//!
//! The three primitive families share one row renderer; what differs is how
//! a row becomes a primitive part, captured by [`MenuParts`]. The family is
//! fixed the first time a [`ConfiguredMenu`] renders.

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdChevronDown;
use dioxus_free_icons::Icon;
use ui_types::{flatten, FlatEntry, MenuConfig, MenuEntry, MenuFamily, MenuItem};

use crate::components::context_menu::{
    ContextMenu, ContextMenuContent, ContextMenuItem, ContextMenuLabel, ContextMenuSeparator,
    ContextMenuTrigger,
};
use crate::components::dropdown_menu::{
    DropdownMenu, DropdownMenuContent, DropdownMenuItem, DropdownMenuLabel, DropdownMenuSeparator,
    DropdownMenuTrigger,
};
use crate::components::menubar::{
    Menubar, MenubarContent, MenubarItem, MenubarLabel, MenubarMenu, MenubarSeparator,
    MenubarTrigger,
};

/// How flattened menu rows map onto one primitive family.
pub trait MenuParts: Copy + 'static {
    fn item(self, index: usize, depth: usize, item: MenuItem, on_select: EventHandler<String>) -> Element;
    fn label(self, depth: usize, label: String, submenu: bool) -> Element;
    fn separator(self) -> Element;
}

fn item_text(item: &MenuItem) -> Element {
    rsx! {
        span {
            class: "menu-item-text",
            "data-destructive": item.destructive,
            "data-disabled": item.disabled,
            "{item.label}"
        }
        if let Some(shortcut) = &item.shortcut {
            span { class: "menu-shortcut", "{shortcut}" }
        }
    }
}

/// Disabled items stay focusable for screen readers but never report a selection.
fn guarded(item: &MenuItem, on_select: EventHandler<String>) -> impl FnMut(String) + 'static {
    let disabled = item.disabled;
    move |value: String| {
        if !disabled {
            on_select.call(value);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropdownParts;

impl MenuParts for DropdownParts {
    fn item(self, index: usize, depth: usize, item: MenuItem, on_select: EventHandler<String>) -> Element {
        rsx! {
            DropdownMenuItem::<String> {
                value: item.value.clone(),
                index,
                style: "--menu-depth: {depth};",
                aria_disabled: item.disabled,
                on_select: guarded(&item, on_select),
                {item_text(&item)}
            }
        }
    }

    fn label(self, depth: usize, label: String, submenu: bool) -> Element {
        rsx! { DropdownMenuLabel { depth, submenu, "{label}" } }
    }

    fn separator(self) -> Element {
        rsx! { DropdownMenuSeparator {} }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextParts;

impl MenuParts for ContextParts {
    fn item(self, index: usize, depth: usize, item: MenuItem, on_select: EventHandler<String>) -> Element {
        rsx! {
            ContextMenuItem {
                value: item.value.clone(),
                index,
                style: "--menu-depth: {depth};",
                aria_disabled: item.disabled,
                on_select: guarded(&item, on_select),
                {item_text(&item)}
            }
        }
    }

    fn label(self, depth: usize, label: String, submenu: bool) -> Element {
        rsx! { ContextMenuLabel { depth, submenu, "{label}" } }
    }

    fn separator(self) -> Element {
        rsx! { ContextMenuSeparator {} }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenubarParts;

impl MenuParts for MenubarParts {
    fn item(self, index: usize, depth: usize, item: MenuItem, on_select: EventHandler<String>) -> Element {
        rsx! {
            MenubarItem {
                value: item.value.clone(),
                index,
                style: "--menu-depth: {depth};",
                aria_disabled: item.disabled,
                on_select: guarded(&item, on_select),
                {item_text(&item)}
            }
        }
    }

    fn label(self, depth: usize, label: String, submenu: bool) -> Element {
        rsx! { MenubarLabel { depth, submenu, "{label}" } }
    }

    fn separator(self) -> Element {
        rsx! { MenubarSeparator {} }
    }
}

fn render_row<P: MenuParts>(parts: P, row: FlatEntry, on_select: EventHandler<String>) -> Element {
    match row {
        FlatEntry::Item { index, depth, item } => parts.item(index, depth, item, on_select),
        FlatEntry::GroupLabel { depth, label } => parts.label(depth, label, false),
        FlatEntry::SubmenuLabel { depth, label } => parts.label(depth, label, true),
        FlatEntry::Separator { .. } => parts.separator(),
    }
}

/// Render flattened rows through one family's parts.
pub fn render_rows<P: MenuParts>(parts: P, rows: Vec<FlatEntry>, on_select: EventHandler<String>) -> Element {
    rsx! {
        for (position, row) in rows.into_iter().enumerate() {
            Fragment { key: "{position}", {render_row(parts, row, on_select)} }
        }
    }
}

#[component]
pub fn ConfiguredDropdown(
    trigger: String,
    entries: Vec<MenuEntry>,
    on_select: EventHandler<String>,
    #[props(default = false)] default_open: bool,
) -> Element {
    let rows = flatten(&entries);

    rsx! {
        DropdownMenu {
            default_open,
            DropdownMenuTrigger {
                "{trigger}"
                Icon::<LdChevronDown> { icon: LdChevronDown, width: 14, height: 14 }
            }
            DropdownMenuContent { {render_rows(DropdownParts, rows, on_select)} }
        }
    }
}

#[component]
pub fn ConfiguredContextMenu(
    area_label: String,
    entries: Vec<MenuEntry>,
    on_select: EventHandler<String>,
    #[props(default = false)] default_open: bool,
) -> Element {
    let rows = flatten(&entries);

    rsx! {
        ContextMenu {
            default_open,
            ContextMenuTrigger { "{area_label}" }
            ContextMenuContent { {render_rows(ContextParts, rows, on_select)} }
        }
    }
}

#[component]
pub fn ConfiguredMenubar(menus: Vec<(String, Vec<FlatEntry>)>, on_select: EventHandler<String>) -> Element {
    rsx! {
        Menubar {
            for (index, (title, rows)) in menus.into_iter().enumerate() {
                MenubarMenu {
                    key: "{title}",
                    index,
                    MenubarTrigger { "{title}" }
                    MenubarContent { {render_rows(MenubarParts, rows, on_select)} }
                }
            }
        }
    }
}

/// A menu described by configuration data.
#[component]
pub fn ConfiguredMenu(
    config: MenuConfig,
    on_select: EventHandler<String>,
    /// Text inside the right-click area of context menus.
    #[props(default = "Right click here".to_string())]
    area_label: String,
    /// Start with the menu shown. Menubars ignore it.
    #[props(default = false)]
    default_open: bool,
) -> Element {
    let family = use_hook(|| {
        tracing::debug!(family = %config.family, "configured menu built");
        config.family
    });
    if family != config.family {
        tracing::warn!(
            initial = %family,
            requested = %config.family,
            "menu family changes after construction are ignored"
        );
    }

    match family {
        MenuFamily::Dropdown => rsx! {
            ConfiguredDropdown {
                trigger: config.trigger.clone().unwrap_or_else(|| "Menu".to_string()),
                entries: config.entries.clone(),
                on_select,
                default_open,
            }
        },
        MenuFamily::Context => rsx! {
            ConfiguredContextMenu {
                area_label,
                entries: config.entries.clone(),
                on_select,
                default_open,
            }
        },
        MenuFamily::Menubar => rsx! {
            ConfiguredMenubar { menus: config.menubar_menus(), on_select }
        },
    }
}
