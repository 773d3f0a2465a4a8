use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdChevronRight;
use dioxus_free_icons::Icon;
use dioxus_primitives::collapsible as prim;

#[component]
pub fn Collapsible(mut props: prim::CollapsibleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "collapsible", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Collapsible { ..props }
    }
}

#[component]
pub fn CollapsibleTrigger(mut props: prim::CollapsibleTriggerProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "collapsible-trigger", None, false));

    rsx! {
        prim::CollapsibleTrigger { ..props }
    }
}

#[component]
pub fn CollapsibleContent(mut props: prim::CollapsibleContentProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "collapsible-content", None, false));

    rsx! {
        prim::CollapsibleContent { ..props }
    }
}

/// Titled disclosure section with a rotating chevron.
#[component]
pub fn CollapsibleSection(
    title: String,
    #[props(default = false)] default_open: bool,
    children: Element,
) -> Element {
    rsx! {
        Collapsible {
            default_open,
            CollapsibleTrigger {
                span {
                    class: "collapsible-chevron",
                    Icon::<LdChevronRight> { icon: LdChevronRight, width: 16, height: 16 }
                }
                "{title}"
            }
            CollapsibleContent { {children} }
        }
    }
}
