use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        div { class: "not-found-page",
            div { class: "not-found-code", "404" }
            p { class: "not-found-message",
                "No story lives at "
                code { "{path}" }
                "."
            }
            Link { to: Route::Home {}, class: "not-found-link", "Back to the overview" }
        }
    }
}
