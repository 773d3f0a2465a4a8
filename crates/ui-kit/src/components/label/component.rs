use dioxus::prelude::*;
use dioxus_primitives::label as prim;

/// Form label. `required` appends a decorative asterisk; the control itself
/// still carries the real required state.
#[component]
pub fn Label(
    html_for: String,
    #[props(default = false)] required: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut attrs = attributes;
    attrs.push(Attribute::new("class", "label", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Label {
            html_for,
            attributes: attrs,
            {children}
            if required {
                RequiredMark {}
            }
        }
    }
}

/// Asterisk shown next to required labels and legends.
#[component]
pub fn RequiredMark() -> Element {
    rsx! {
        span { class: "label-required", "aria-hidden": "true", "*" }
    }
}
