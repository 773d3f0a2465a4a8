use dioxus::prelude::*;
use ui_kit::components::{AccordionList, AccordionSection, CollapsibleSection};

use crate::components::StorySection;

#[component]
pub fn Disclosure() -> Element {
    let faq = vec![
        AccordionSection::new(
            "Can I change plans later?",
            "Yes. Upgrades apply immediately and downgrades at the end of the billing period.",
        ),
        AccordionSection::new(
            "Do you offer refunds?",
            "Annual plans can be refunded within 30 days of purchase.",
        ),
        AccordionSection::new(
            "Where is my data stored?",
            "In the region you pick when the workspace is created.",
        ),
    ];

    rsx! {
        div { class: "story-page",
            h1 { "Disclosure" }

            StorySection { title: "Accordion", note: "The first section starts expanded.",
                AccordionList { sections: faq, default_open: 0 }
            }

            StorySection { title: "Collapsible",
                CollapsibleSection { title: "Advanced settings",
                    p { "Webhook retries, rate limits and audit log retention." }
                }
                CollapsibleSection { title: "Starts open", default_open: true,
                    p { "Collapsible content animates its height using the design token keyframes." }
                }
            }
        }
    }
}
