use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCheck;
use dioxus_free_icons::Icon;
use dioxus_primitives::select as prim;
use ui_types::ListOption;

#[component]
pub fn SelectRoot<T: Clone + PartialEq + 'static>(mut props: prim::SelectProps<T>) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "select", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Select { ..props }
    }
}

#[component]
pub fn SelectTrigger(mut props: prim::SelectTriggerProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "select-trigger", None, false));

    rsx! {
        prim::SelectTrigger { ..props }
    }
}

#[component]
pub fn SelectValue(mut props: prim::SelectValueProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "select-value", None, false));

    rsx! {
        prim::SelectValue { ..props }
    }
}

#[component]
pub fn SelectContent(mut props: prim::SelectListProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "select-content", None, false));

    rsx! {
        prim::SelectList { ..props }
    }
}

#[component]
pub fn SelectItem<T: Clone + PartialEq + 'static>(
    mut props: prim::SelectOptionProps<T>,
) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "select-item", None, false));

    rsx! {
        prim::SelectOption { ..props }
    }
}

#[component]
pub fn SelectItemIndicator(props: prim::SelectItemIndicatorProps) -> Element {
    rsx! {
        prim::SelectItemIndicator { ..props }
    }
}

/// Options rendered as select items, in order, each with a check mark
/// shown while it is the selected value.
#[component]
pub fn SelectOptions(options: Vec<ListOption>) -> Element {
    rsx! {
        for (index, option) in options.into_iter().enumerate() {
            SelectItem::<String> {
                key: "{option.value}",
                value: option.value,
                index,
                disabled: option.disabled,
                span { class: "select-item-label", "{option.label}" }
                SelectItemIndicator {
                    Icon::<LdCheck> { icon: LdCheck, width: 14, height: 14 }
                }
            }
        }
    }
}
