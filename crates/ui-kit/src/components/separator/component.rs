use dioxus::prelude::*;
use dioxus_primitives::separator as prim;

/// Thin rule between content groups. Orientation comes from the primitive props.
#[component]
pub fn Separator(mut props: prim::SeparatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "separator", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Separator { ..props }
    }
}

/// Horizontal rule with centered text, e.g. "or" between two sign-in options.
#[component]
pub fn TextSeparator(text: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "text-separator", role: "separator", "aria-label": "{text}",
            span { "{text}" }
        }
    }
}
