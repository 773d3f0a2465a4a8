use dioxus::prelude::*;
use ui_kit::theme::{ThemeSeed, ThemeState, TokenStyles};

mod actions;
mod components;
mod config;
mod routes;

use actions::ActionLog;
use routes::Route;

const EXPLORER_CSS: Asset = asset!("/assets/explorer.css");
const THEMES_CSS: Asset = asset!("/assets/themes.css");

fn main() {
    dioxus::logger::init(tracing::Level::INFO).ok();
    config::explorer_config();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ActionLog::new);
    use_context_provider(|| ThemeState {
        family: Signal::new("neutral".to_string()),
        is_dark: Signal::new(true),
    });

    rsx! {
        TokenStyles {}
        document::Link { rel: "stylesheet", href: THEMES_CSS }
        document::Link { rel: "stylesheet", href: EXPLORER_CSS }
        ThemeSeed {}
        Router::<Route> {}
    }
}
