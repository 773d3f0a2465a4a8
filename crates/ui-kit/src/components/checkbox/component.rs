use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCheck;
use dioxus_free_icons::Icon;
use dioxus_primitives::checkbox as prim;

pub use prim::CheckboxState;

#[component]
pub fn Checkbox(mut props: prim::CheckboxProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "checkbox", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Checkbox { ..props }
    }
}

/// Check mark shown while the parent checkbox is checked.
#[component]
pub fn CheckboxIndicator(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let mut attrs = attributes;
    attrs.push(Attribute::new("class", "checkbox-indicator", None, false));

    rsx! {
        prim::CheckboxIndicator {
            attributes: attrs,
            Icon::<LdCheck> { icon: LdCheck, width: 14, height: 14 }
        }
    }
}

/// A checkbox with its indicator and a clickable text label.
#[component]
pub fn LabeledCheckbox(
    id: String,
    label: String,
    checked: bool,
    #[props(default = false)] disabled: bool,
    on_change: EventHandler<bool>,
) -> Element {
    let state = if checked {
        CheckboxState::Checked
    } else {
        CheckboxState::Unchecked
    };

    rsx! {
        label {
            class: "checkbox-row",
            "data-disabled": disabled,
            r#for: "{id}",
            Checkbox {
                id: id.clone(),
                checked: Some(state),
                disabled,
                on_checked_change: move |next: CheckboxState| on_change.call(next == CheckboxState::Checked),
                CheckboxIndicator {}
            }
            span { class: "checkbox-label", "{label}" }
        }
    }
}
