use dioxus::prelude::*;

/// Titled block inside a story page.
#[component]
pub fn StorySection(title: String, #[props(default)] note: Option<String>, children: Element) -> Element {
    rsx! {
        section { class: "story-section",
            h2 { class: "story-section-title", "{title}" }
            if let Some(note) = note {
                p { class: "story-section-note", "{note}" }
            }
            div { class: "story-canvas", {children} }
        }
    }
}
