pub mod disclosure;
pub mod forms;
pub mod home;
pub mod leaves;
pub mod menus;
pub mod not_found;
pub mod overlays;
pub mod pickers;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdChevronsUpDown, LdFileText, LdFolder, LdLayers, LdLayoutDashboard, LdMenu, LdPackage,
};
use dioxus_free_icons::Icon;
use ui_kit::components::{
    LabeledSwitch, SelectContent, SelectItem, SelectRoot, SelectTrigger, SelectValue,
};
use ui_kit::theme::{ThemeFamily, ThemeState, ALL_FAMILIES};

use crate::actions::ActionPanel;
use crate::config::{explorer_config, StoryFilter};

use disclosure::Disclosure;
use forms::Forms;
use home::Home;
use leaves::Leaves;
use menus::Menus;
use not_found::NotFound;
use overlays::Overlays;
use pickers::Pickers;

/// Explorer routes: one page per story family.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(ExplorerLayout)]
    #[route("/")]
    Home {},
    #[route("/leaves")]
    Leaves {},
    #[route("/overlays")]
    Overlays {},
    #[route("/menus")]
    Menus {},
    #[route("/disclosure")]
    Disclosure {},
    #[route("/pickers")]
    Pickers {},
    #[route("/forms")]
    Forms {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// One entry of the story catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoryMeta {
    pub key: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

pub const STORIES: &[StoryMeta] = &[
    StoryMeta {
        key: "leaves",
        title: "Leaves",
        summary: "Buttons, badges, avatars, cards and small controls.",
    },
    StoryMeta {
        key: "overlays",
        title: "Overlays",
        summary: "Drag-to-dismiss panels, the action sheet and the responsive dialog.",
    },
    StoryMeta {
        key: "menus",
        title: "Menus",
        summary: "Dropdown, context and menubar menus built from TOML and JSON.",
    },
    StoryMeta {
        key: "disclosure",
        title: "Disclosure",
        summary: "Accordion and collapsible sections.",
    },
    StoryMeta {
        key: "pickers",
        title: "Pickers",
        summary: "Select and searchable combobox.",
    },
    StoryMeta {
        key: "forms",
        title: "Forms",
        summary: "Every field type with validation and JSON output.",
    },
];

impl StoryMeta {
    pub fn route(&self) -> Route {
        match self.key {
            "leaves" => Route::Leaves {},
            "overlays" => Route::Overlays {},
            "menus" => Route::Menus {},
            "disclosure" => Route::Disclosure {},
            "pickers" => Route::Pickers {},
            "forms" => Route::Forms {},
            _ => Route::Home {},
        }
    }

    pub fn find(key: &str) -> Option<&'static StoryMeta> {
        STORIES.iter().find(|story| story.key == key)
    }
}

/// Stories the filter lets through, in catalog order.
pub fn visible_stories(filter: &StoryFilter) -> Vec<&'static StoryMeta> {
    STORIES.iter().filter(|story| filter.allows(story.key)).collect()
}

/// Catalog key of the story behind `route`.
fn story_key(route: &Route) -> Option<&'static str> {
    match route {
        Route::Leaves {} => Some("leaves"),
        Route::Overlays {} => Some("overlays"),
        Route::Menus {} => Some("menus"),
        Route::Disclosure {} => Some("disclosure"),
        Route::Pickers {} => Some("pickers"),
        Route::Forms {} => Some("forms"),
        Route::Home {} | Route::NotFound { .. } => None,
    }
}

fn story_icon(key: &str) -> Element {
    match key {
        "leaves" => rsx! { Icon::<LdPackage> { icon: LdPackage, width: 16, height: 16 } },
        "overlays" => rsx! { Icon::<LdLayers> { icon: LdLayers, width: 16, height: 16 } },
        "menus" => rsx! { Icon::<LdMenu> { icon: LdMenu, width: 16, height: 16 } },
        "disclosure" => rsx! { Icon::<LdFolder> { icon: LdFolder, width: 16, height: 16 } },
        "pickers" => rsx! {
            Icon::<LdChevronsUpDown> { icon: LdChevronsUpDown, width: 16, height: 16 }
        },
        _ => rsx! {
            Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
        },
    }
}

/// Sidebar, header and addon panels around every story.
#[component]
fn ExplorerLayout() -> Element {
    let route: Route = use_route();
    let config = explorer_config();
    let stories = visible_stories(&config.stories);
    let current = story_key(&route);
    let hidden = current.is_some_and(|key| !config.stories.allows(key));

    rsx! {
        div { class: "explorer",
            header { class: "explorer-header",
                Link { to: Route::Home {}, class: "explorer-brand", "ui-kit explorer" }
                if config.addons.theming {
                    ThemeControls {}
                }
            }
            nav { class: "explorer-nav", "aria-label": "Stories",
                Link {
                    to: Route::Home {},
                    class: if matches!(route, Route::Home {}) { "explorer-nav-link active" } else { "explorer-nav-link" },
                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                    "Overview"
                }
                for story in stories {
                    Link {
                        key: "{story.key}",
                        to: story.route(),
                        class: if current == Some(story.key) { "explorer-nav-link active" } else { "explorer-nav-link" },
                        {story_icon(story.key)}
                        "{story.title}"
                    }
                }
            }
            main { class: "explorer-main",
                if hidden {
                    p { class: "explorer-hidden", "This story is hidden by explorer.toml." }
                } else {
                    Outlet::<Route> {}
                }
            }
            if config.addons.essentials {
                ActionPanel {}
            }
        }
    }
}

/// Theme family select plus a dark mode switch for families that have both modes.
#[component]
fn ThemeControls() -> Element {
    let mut theme: ThemeState = use_context();
    let family = ThemeFamily::from_key(&theme.family.read());
    let both_modes = family.has_dark() && family.has_light();

    rsx! {
        div { class: "theme-controls",
            SelectRoot::<String> {
                default_value: Some(family.as_str().to_string()),
                on_value_change: move |value: Option<String>| {
                    if let Some(value) = value {
                        theme.family.set(value);
                        theme.apply();
                    }
                },
                SelectTrigger {
                    SelectValue {}
                }
                SelectContent {
                    for (index, option) in ALL_FAMILIES.iter().enumerate() {
                        SelectItem::<String> {
                            key: "{option.as_str()}",
                            value: option.as_str().to_string(),
                            index,
                            "{option.display_name()}"
                        }
                    }
                }
            }
            if both_modes {
                LabeledSwitch {
                    id: "theme-dark",
                    label: "Dark",
                    checked: *theme.is_dark.read(),
                    on_change: move |dark: bool| {
                        theme.is_dark.set(dark);
                        theme.apply();
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_story_has_its_own_route() {
        for story in STORIES {
            let route = story.route();
            assert_eq!(story_key(&route), Some(story.key), "{}", story.key);
        }
    }

    #[test]
    fn excluded_stories_are_not_listed() {
        let filter = StoryFilter {
            include: Vec::new(),
            exclude: vec!["menus".into()],
        };
        let keys: Vec<&str> = visible_stories(&filter).iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["leaves", "overlays", "disclosure", "pickers", "forms"]);
    }

    #[test]
    fn find_looks_up_by_key() {
        assert_eq!(StoryMeta::find("forms").map(|s| s.title), Some("Forms"));
        assert!(StoryMeta::find("charts").is_none());
    }
}
