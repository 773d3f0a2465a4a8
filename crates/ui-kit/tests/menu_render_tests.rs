//! Menus rendered from configuration trees, one test per primitive family.
//!
//! Run with: `cargo test -p ui-kit --test menu_render_tests`

mod common;

use common::{count, render};
use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use ui_kit::components::*;
use ui_types::{flatten, FlatEntry, MenuConfig, MenuEntry, MenuFamily, MenuItem};

fn share_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::Item(MenuItem::new("rename", "Rename").shortcut("F2")),
        MenuEntry::Group {
            label: Some("Recent".into()),
            entries: vec![MenuEntry::Item(MenuItem::new("a", "a.txt"))],
        },
        MenuEntry::Separator,
        MenuEntry::Submenu {
            label: "Share".into(),
            entries: vec![
                MenuEntry::Item(MenuItem::new("email", "Email")),
                MenuEntry::Submenu {
                    label: "More".into(),
                    entries: vec![MenuEntry::Item(MenuItem::new("link", "Copy link"))],
                },
            ],
        },
        MenuEntry::Item(MenuItem::new("delete", "Delete").destructive()),
    ]
}

/// Label and separator rows only; items need an open primitive around them.
fn heading_rows() -> Vec<FlatEntry> {
    flatten(&share_menu())
        .into_iter()
        .filter(|row| !matches!(row, FlatEntry::Item { .. }))
        .collect()
}

fn assert_headings(html: &str) {
    assert!(html.contains("Recent"), "{html}");
    assert!(html.contains("Share"), "{html}");
    assert!(html.contains("More"), "{html}");
    assert_eq!(count(html, r#"data-submenu="true""#), 2, "{html}");
    assert!(html.contains("--menu-depth: 1;"), "{html}");
    assert_eq!(count(html, "menu-separator"), 1, "{html}");
}

#[test]
fn dropdown_parts_render_nested_headings() {
    let html = render(|| {
        let noop = EventHandler::new(|_: String| {});
        rsx! { {render_rows(DropdownParts, heading_rows(), noop)} }
    });
    assert_headings(&html);
}

#[test]
fn context_parts_render_nested_headings() {
    let html = render(|| {
        let noop = EventHandler::new(|_: String| {});
        rsx! { {render_rows(ContextParts, heading_rows(), noop)} }
    });
    assert_headings(&html);
}

#[test]
fn menubar_parts_render_nested_headings() {
    let html = render(|| {
        let noop = EventHandler::new(|_: String| {});
        rsx! { {render_rows(MenubarParts, heading_rows(), noop)} }
    });
    assert_headings(&html);
}

#[test]
fn open_dropdown_lists_every_item_with_depth() {
    let html = render(|| {
        let config = MenuConfig {
            family: MenuFamily::Dropdown,
            trigger: Some("Actions".into()),
            entries: share_menu(),
        };
        rsx! {
            ConfiguredMenu { config, on_select: move |_| {}, default_open: true }
        }
    });
    assert!(html.contains("Actions"), "{html}");
    for label in ["Rename", "a.txt", "Email", "Copy link", "Delete"] {
        assert!(html.contains(label), "missing {label}: {html}");
    }
    assert!(html.contains("F2"), "{html}");
    assert!(html.contains("--menu-depth: 2;"), "{html}");
    assert_eq!(count(&html, r#"data-submenu="true""#), 2, "{html}");
    assert_eq!(count(&html, "menu-separator"), 1, "{html}");
}

#[test]
fn open_context_menu_lists_every_item() {
    let html = render(|| {
        let config = MenuConfig {
            family: MenuFamily::Context,
            trigger: None,
            entries: share_menu(),
        };
        rsx! {
            ConfiguredMenu {
                config,
                on_select: move |_| {},
                area_label: "Canvas",
                default_open: true,
            }
        }
    });
    assert!(html.contains("Canvas"), "{html}");
    for label in ["Rename", "Email", "Copy link", "Delete"] {
        assert!(html.contains(label), "missing {label}: {html}");
    }
    assert!(html.contains("--menu-depth: 1;"), "{html}");
}

#[test]
fn menubar_splits_top_level_entries_into_menus() {
    let html = render(|| {
        let config = MenuConfig {
            family: MenuFamily::Menubar,
            trigger: None,
            entries: vec![
                MenuEntry::Submenu {
                    label: "File".into(),
                    entries: vec![MenuEntry::Item(MenuItem::new("open", "Open"))],
                },
                MenuEntry::Group {
                    label: Some("Edit".into()),
                    entries: vec![MenuEntry::Item(MenuItem::new("undo", "Undo"))],
                },
            ],
        };
        rsx! {
            ConfiguredMenu { config, on_select: move |_| {} }
        }
    });
    assert!(html.contains("File"), "{html}");
    assert!(html.contains("Edit"), "{html}");
    assert_eq!(count(&html, "menubar-trigger"), 2, "{html}");
}
