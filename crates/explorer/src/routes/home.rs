use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;
use ui_kit::components::{Card, CardDescription, CardHeader, CardTitle};
use ui_types::{filter_options, ListOption};

use crate::config::explorer_config;
use crate::routes::{visible_stories, StoryMeta};

/// Story catalog with a title search.
#[component]
pub fn Home() -> Element {
    let mut query = use_signal(String::new);
    let stories = visible_stories(&explorer_config().stories);
    let searchable: Vec<ListOption> = stories
        .iter()
        .map(|story| ListOption::new(story.key, story.title))
        .collect();
    let hits: Vec<&'static StoryMeta> = filter_options(&searchable, &query.read())
        .iter()
        .filter_map(|option| StoryMeta::find(&option.value))
        .collect();

    rsx! {
        div { class: "story-page",
            h1 { "Components" }
            p { class: "story-lead",
                "Every ui-kit component, grouped by family. Drag the overlays, submit the forms "
                "and watch the action log."
            }
            div { class: "home-search",
                Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                input {
                    r#type: "search",
                    placeholder: "Search stories",
                    "aria-label": "Search stories",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
            }
            if hits.is_empty() {
                p { class: "home-empty", "No stories match \"{query}\"." }
            }
            div { class: "home-grid",
                for story in hits {
                    Link { key: "{story.key}", to: story.route(), class: "home-card-link",
                        Card { interactive: true,
                            CardHeader {
                                CardTitle { "{story.title}" }
                                CardDescription { "{story.summary}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
