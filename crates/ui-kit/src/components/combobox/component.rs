use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdChevronDown};
use dioxus_free_icons::Icon;
use ui_types::{filter_options, Highlight, ListOption};

/// Label of the option whose value is `value`, or an empty string.
pub fn selected_label(options: &[ListOption], value: Option<&str>) -> String {
    value
        .and_then(|value| options.iter().find(|o| o.value == value))
        .map(|o| o.label.clone())
        .unwrap_or_default()
}

/// Text input with a filtered, keyboard-navigable list of options.
///
/// Typing filters by label; arrow keys move the highlight past disabled
/// options, Enter commits, Escape restores the committed label.
#[component]
pub fn Combobox(
    id: String,
    options: Vec<ListOption>,
    #[props(default)] value: Option<String>,
    on_value_change: EventHandler<String>,
    #[props(default = "Search…".to_string())] placeholder: String,
    #[props(default = "No results".to_string())] empty_text: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] on_blur: Option<EventHandler<()>>,
) -> Element {
    let mut query = use_signal(String::new);
    let mut open = use_signal(|| false);
    let mut highlight = use_signal(Highlight::default);

    let visible = filter_options(&options, &query.read());
    let committed = selected_label(&options, value.as_deref());
    let listbox_id = format!("{id}-listbox");
    let active_id = highlight
        .read()
        .index()
        .map(|i| format!("{listbox_id}-{i}"))
        .unwrap_or_default();

    let input_text = if open() { query() } else { committed.clone() };

    let mut commit = move |option: ListOption| {
        if option.disabled {
            return;
        }
        tracing::debug!(value = %option.value, "combobox selection");
        on_value_change.call(option.value);
        query.set(String::new());
        open.set(false);
        highlight.write().clear();
    };

    let keyboard_options = visible.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "combobox",
            "data-state": if open() { "open" } else { "closed" },
            div {
                class: "combobox-control",
                input {
                    id: "{id}",
                    class: "combobox-input",
                    r#type: "text",
                    role: "combobox",
                    autocomplete: "off",
                    "aria-expanded": open(),
                    "aria-controls": "{listbox_id}",
                    "aria-activedescendant": "{active_id}",
                    placeholder: "{placeholder}",
                    disabled,
                    value: "{input_text}",
                    onfocus: move |_| {
                        open.set(true);
                    },
                    oninput: move |evt| {
                        query.set(evt.value());
                        open.set(true);
                        let hits = filter_options(&options, &evt.value());
                        highlight.write().first(&hits);
                    },
                    onkeydown: move |evt| {
                        match evt.key() {
                            Key::ArrowDown => {
                                evt.prevent_default();
                                open.set(true);
                                highlight.write().next(&keyboard_options);
                            }
                            Key::ArrowUp => {
                                evt.prevent_default();
                                open.set(true);
                                highlight.write().previous(&keyboard_options);
                            }
                            Key::Enter => {
                                evt.prevent_default();
                                let picked = highlight.read().selected(&keyboard_options).cloned();
                                if let Some(option) = picked {
                                    commit(option);
                                }
                            }
                            Key::Escape => {
                                query.set(String::new());
                                open.set(false);
                                highlight.write().clear();
                            }
                            _ => {}
                        }
                    },
                    onblur: move |_| {
                        open.set(false);
                        query.set(String::new());
                        if let Some(handler) = &on_blur {
                            handler.call(());
                        }
                    },
                }
                span {
                    class: "combobox-chevron",
                    "aria-hidden": "true",
                    Icon::<LdChevronDown> { icon: LdChevronDown, width: 16, height: 16 }
                }
            }
            if open() {
                ul {
                    id: "{listbox_id}",
                    class: "combobox-list",
                    role: "listbox",
                    if visible.is_empty() {
                        li { class: "combobox-empty", "{empty_text}" }
                    }
                    for (index, option) in visible.into_iter().enumerate() {
                        li {
                            key: "{option.value}",
                            id: "{listbox_id}-{index}",
                            class: "combobox-option",
                            role: "option",
                            "aria-selected": value.as_deref() == Some(option.value.as_str()),
                            "aria-disabled": option.disabled,
                            "data-highlighted": highlight.read().index() == Some(index),
                            // mousedown runs before the input's blur closes the list
                            onmousedown: {
                                let option = option.clone();
                                move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    commit(option.clone());
                                }
                            },
                            onmouseenter: move |_| {
                                if !option.disabled {
                                    highlight.write().set(index);
                                }
                            },
                            span { "{option.label}" }
                            if value.as_deref() == Some(option.value.as_str()) {
                                Icon::<LdCheck> { icon: LdCheck, width: 14, height: 14 }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn selected_label_resolves_committed_value() {
        let options = vec![ListOption::new("rs", "Rust"), ListOption::new("go", "Go")];
        assert_eq!(selected_label(&options, Some("go")), "Go");
        assert_eq!(selected_label(&options, Some("zig")), "");
        assert_eq!(selected_label(&options, None), "");
    }
}
