use dioxus::prelude::*;
use dioxus_primitives::radio_group as prim;
use ui_types::ListOption;

#[component]
pub fn RadioGroup(mut props: prim::RadioGroupProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "radio-group", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::RadioGroup { ..props }
    }
}

#[component]
pub fn RadioGroupItem(mut props: prim::RadioItemProps) -> Element {
    if props.class.is_none() {
        props.class = Some("radio-item".to_string());
    }

    rsx! {
        prim::RadioItem { ..props }
    }
}

/// One labelled radio row per option, in order. Render inside a [`RadioGroup`].
#[component]
pub fn RadioOptions(options: Vec<ListOption>) -> Element {
    rsx! {
        for (index, option) in options.into_iter().enumerate() {
            label {
                key: "{option.value}",
                class: "radio-row",
                "data-disabled": option.disabled,
                RadioGroupItem {
                    value: option.value.clone(),
                    index,
                    disabled: option.disabled,
                }
                span { "{option.label}" }
            }
        }
    }
}
