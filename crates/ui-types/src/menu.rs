//! Declarative menu trees shared by the dropdown, context and menubar renderers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UiError;

/// Which primitive family a configured menu renders through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuFamily {
    #[default]
    Dropdown,
    Context,
    Menubar,
}

impl MenuFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuFamily::Dropdown => "dropdown",
            MenuFamily::Context => "context",
            MenuFamily::Menubar => "menubar",
        }
    }
}

impl fmt::Display for MenuFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuFamily {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dropdown" => Ok(MenuFamily::Dropdown),
            "context" => Ok(MenuFamily::Context),
            "menubar" => Ok(MenuFamily::Menubar),
            other => Err(UiError::UnknownMenuFamily(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub shortcut: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    /// Rendered with the destructive color treatment.
    #[serde(default)]
    pub destructive: bool,
}

impl MenuItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            shortcut: None,
            disabled: false,
            destructive: false,
        }
    }

    pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuEntry {
    Item(MenuItem),
    Group {
        #[serde(default)]
        label: Option<String>,
        entries: Vec<MenuEntry>,
    },
    Submenu {
        label: String,
        entries: Vec<MenuEntry>,
    },
    Separator,
}

/// One renderable row of a flattened menu tree.
#[derive(Debug, Clone, PartialEq)]
pub enum FlatEntry {
    /// `index` is the item's position among selectable items, depth-first.
    Item {
        index: usize,
        depth: usize,
        item: MenuItem,
    },
    GroupLabel {
        depth: usize,
        label: String,
    },
    SubmenuLabel {
        depth: usize,
        label: String,
    },
    Separator {
        depth: usize,
    },
}

/// Flatten a menu tree into rows, numbering items in visit order.
///
/// Groups keep their depth; submenu contents are nested one level deeper.
pub fn flatten(entries: &[MenuEntry]) -> Vec<FlatEntry> {
    let mut rows = Vec::new();
    let mut next_index = 0;
    walk(entries, 0, &mut next_index, &mut rows);
    rows
}

fn walk(entries: &[MenuEntry], depth: usize, next_index: &mut usize, rows: &mut Vec<FlatEntry>) {
    for entry in entries {
        match entry {
            MenuEntry::Item(item) => {
                rows.push(FlatEntry::Item {
                    index: *next_index,
                    depth,
                    item: item.clone(),
                });
                *next_index += 1;
            }
            MenuEntry::Group { label, entries } => {
                if let Some(label) = label {
                    rows.push(FlatEntry::GroupLabel {
                        depth,
                        label: label.clone(),
                    });
                }
                walk(entries, depth, next_index, rows);
            }
            MenuEntry::Submenu { label, entries } => {
                rows.push(FlatEntry::SubmenuLabel {
                    depth,
                    label: label.clone(),
                });
                walk(entries, depth + 1, next_index, rows);
            }
            MenuEntry::Separator => rows.push(FlatEntry::Separator { depth }),
        }
    }
}

/// Find an item anywhere in the tree by value.
pub fn find_item<'a>(entries: &'a [MenuEntry], value: &str) -> Option<&'a MenuItem> {
    entries.iter().find_map(|entry| match entry {
        MenuEntry::Item(item) if item.value == value => Some(item),
        MenuEntry::Group { entries, .. } | MenuEntry::Submenu { entries, .. } => {
            find_item(entries, value)
        }
        _ => None,
    })
}

/// A menu loaded from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub family: MenuFamily,
    /// Trigger label for dropdown menus.
    #[serde(default)]
    pub trigger: Option<String>,
    pub entries: Vec<MenuEntry>,
}

impl MenuConfig {
    pub fn from_toml(source: &str) -> Result<Self, UiError> {
        let config: MenuConfig =
            toml::from_str(source).map_err(|e| UiError::MenuConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(source: &str) -> Result<Self, UiError> {
        let config: MenuConfig =
            serde_json::from_str(source).map_err(|e| UiError::MenuConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Menubars need every top-level entry to be a labelled menu.
    pub fn validate(&self) -> Result<(), UiError> {
        if self.family != MenuFamily::Menubar {
            return Ok(());
        }
        for entry in &self.entries {
            match entry {
                MenuEntry::Submenu { .. } | MenuEntry::Group { label: Some(_), .. } => {}
                MenuEntry::Separator => {}
                _ => {
                    return Err(UiError::MenuConfig(
                        "menubar entries must be labelled groups or submenus".to_string(),
                    ))
                }
            }
        }
        Ok(())
    }

    /// Top-level menus of a menubar with their flattened contents.
    pub fn menubar_menus(&self) -> Vec<(String, Vec<FlatEntry>)> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                MenuEntry::Submenu { label, entries } => Some((label.clone(), flatten(entries))),
                MenuEntry::Group {
                    label: Some(label),
                    entries,
                } => Some((label.clone(), flatten(entries))),
                _ => None,
            })
            .collect()
    }
}
