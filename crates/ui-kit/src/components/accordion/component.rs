use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdChevronDown;
use dioxus_free_icons::Icon;
use dioxus_primitives::accordion as prim;

#[component]
pub fn Accordion(mut props: prim::AccordionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "accordion", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Accordion { ..props }
    }
}

#[component]
pub fn AccordionItem(mut props: prim::AccordionItemProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "accordion-item", None, false));

    rsx! {
        prim::AccordionItem { ..props }
    }
}

/// Trigger row; a chevron is appended and rotated by CSS while open.
#[component]
pub fn AccordionTrigger(mut props: prim::AccordionTriggerProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "accordion-trigger", None, false));

    let label = props.children;
    props.children = rsx! {
        span { class: "accordion-trigger-label", {label} }
        span {
            class: "accordion-chevron",
            Icon::<LdChevronDown> { icon: LdChevronDown, width: 16, height: 16 }
        }
    };

    rsx! {
        prim::AccordionTrigger { ..props }
    }
}

/// Collapsing body; height animates through the collapse keyframes.
#[component]
pub fn AccordionContent(mut props: prim::AccordionContentProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "accordion-content", None, false));

    rsx! {
        prim::AccordionContent { ..props }
    }
}

/// One titled section of an [`AccordionList`].
#[derive(Debug, Clone, PartialEq)]
pub struct AccordionSection {
    pub title: String,
    pub body: String,
}

impl AccordionSection {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Accordion rendered from plain data.
#[component]
pub fn AccordionList(
    sections: Vec<AccordionSection>,
    /// Index of the section expanded on first render.
    #[props(default)]
    default_open: Option<usize>,
) -> Element {
    rsx! {
        Accordion {
            for (index, section) in sections.into_iter().enumerate() {
                AccordionItem {
                    key: "{index}",
                    index,
                    default_open: default_open == Some(index),
                    AccordionTrigger { "{section.title}" }
                    AccordionContent {
                        p { class: "accordion-body", "{section.body}" }
                    }
                }
            }
        }
    }
}
