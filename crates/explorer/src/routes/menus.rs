use dioxus::prelude::*;
use ui_kit::components::ConfiguredMenu;
use ui_types::{find_item, MenuConfig, UiError};

use crate::actions::{use_actions, ActionLog};
use crate::components::StorySection;

const ROW_ACTIONS: &str = include_str!("../../menus/row_actions.toml");
const CANVAS_CONTEXT: &str = include_str!("../../menus/canvas_context.json");
const APP_MENUBAR: &str = include_str!("../../menus/app_menubar.toml");

/// A bundled menu file with its parse outcome.
struct MenuSample {
    title: &'static str,
    source_name: &'static str,
    config: Result<MenuConfig, UiError>,
}

fn samples() -> Vec<MenuSample> {
    vec![
        MenuSample {
            title: "Dropdown",
            source_name: "row_actions.toml",
            config: MenuConfig::from_toml(ROW_ACTIONS),
        },
        MenuSample {
            title: "Context menu",
            source_name: "canvas_context.json",
            config: MenuConfig::from_json(CANVAS_CONTEXT),
        },
        MenuSample {
            title: "Menubar",
            source_name: "app_menubar.toml",
            config: MenuConfig::from_toml(APP_MENUBAR),
        },
    ]
}

fn sample_body(sample: &MenuSample, log: ActionLog) -> Element {
    match &sample.config {
        Ok(config) => {
            let entries = config.entries.clone();
            rsx! {
                ConfiguredMenu {
                    config: config.clone(),
                    area_label: "Right click the canvas",
                    on_select: move |value: String| {
                        let label = find_item(&entries, &value)
                            .map(|item| item.label.clone())
                            .unwrap_or_else(|| value.clone());
                        log.record(format!("menu select: {label} ({value})"));
                    },
                }
            }
        }
        Err(err) => rsx! {
            p { class: "story-error", role: "alert", "{err}" }
        },
    }
}

#[component]
pub fn Menus() -> Element {
    let log = use_actions();
    let samples = use_hook(|| {
        let samples = samples();
        for sample in &samples {
            if let Err(err) = &sample.config {
                tracing::warn!(file = sample.source_name, error = %err, "bundled menu failed to load");
            }
        }
        std::rc::Rc::new(samples)
    });

    rsx! {
        div { class: "story-page",
            h1 { "Menus" }
            p { class: "story-lead",
                "Each menu below is data: the same entry tree renders through the dropdown, "
                "context or menubar primitives depending on its family."
            }
            for sample in samples.iter() {
                StorySection {
                    key: "{sample.source_name}",
                    title: sample.title,
                    note: format!("Loaded from {}", sample.source_name),
                    {sample_body(sample, log)}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ui_types::MenuFamily;

    #[test]
    fn bundled_menus_parse() {
        let families: Vec<MenuFamily> = samples()
            .into_iter()
            .map(|sample| sample.config.unwrap().family)
            .collect();
        assert_eq!(
            families,
            vec![MenuFamily::Dropdown, MenuFamily::Context, MenuFamily::Menubar]
        );
    }

    #[test]
    fn menubar_sample_has_three_menus() {
        let config = MenuConfig::from_toml(APP_MENUBAR).unwrap();
        let titles: Vec<String> = config.menubar_menus().into_iter().map(|(t, _)| t).collect();
        assert_eq!(titles, vec!["File", "Edit", "View"]);
    }
}
