use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

#[component]
pub fn Switch(mut props: prim::SwitchProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Switch { ..props }
    }
}

#[component]
pub fn SwitchThumb(mut props: prim::SwitchThumbProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch-thumb", None, false));

    rsx! {
        prim::SwitchThumb { ..props }
    }
}

/// Controlled switch with its thumb and a clickable text label.
#[component]
pub fn LabeledSwitch(
    id: String,
    label: String,
    checked: bool,
    #[props(default = false)] disabled: bool,
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        label {
            class: "switch-row",
            "data-disabled": disabled,
            r#for: "{id}",
            Switch {
                id: id.clone(),
                checked: Some(checked),
                disabled,
                on_checked_change: move |on: bool| on_change.call(on),
                SwitchThumb {}
            }
            span { "{label}" }
        }
    }
}
