use dioxus::prelude::*;
use ui_types::{FieldValue, FormErrors, FormState, FormValues, Rules};

use crate::components::label::{Label, RequiredMark};

/// Form state shared with every field rendered inside a [`Form`].
#[derive(Clone, Copy, PartialEq)]
pub struct FormContext {
    pub state: Signal<FormState>,
}

/// The enclosing form's context.
///
/// # Panics
///
/// Outside a [`Form`]; fields cannot work without one.
pub fn use_form() -> FormContext {
    match try_use_context::<FormContext>() {
        Some(context) => context,
        None => panic!("form fields must be rendered inside a `Form`"),
    }
}

/// Form wrapper that owns the field registry and validates on submit.
///
/// `on_submit` receives the values only when every field passes; otherwise
/// all errors become visible and `on_invalid` is told which fields failed.
#[component]
pub fn Form(
    on_submit: EventHandler<FormValues>,
    #[props(default)] on_invalid: Option<EventHandler<FormErrors>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_signal(FormState::new);
    use_context_provider(|| FormContext { state });

    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            novalidate: true,
            onsubmit: move |evt| {
                evt.prevent_default();
                let outcome = state.write().submit();
                match outcome {
                    Ok(values) => on_submit.call(values),
                    Err(errors) => {
                        if let Some(handler) = &on_invalid {
                            handler.call(errors);
                        }
                    }
                }
            },
            onreset: move |evt| {
                evt.prevent_default();
                state.write().reset();
            },
            ..merged,
            {children}
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct FieldMeta {
    name: String,
    initial: FieldValue,
    rules: Rules,
}

/// One registered field's view of the form state.
#[derive(Clone, Copy, PartialEq)]
pub struct FieldHandle {
    state: Signal<FormState>,
    meta: CopyValue<FieldMeta>,
}

impl FieldHandle {
    pub fn name(&self) -> String {
        self.meta.read().name.clone()
    }

    /// DOM id of the field's control.
    pub fn id(&self) -> String {
        field_id(&self.meta.read().name)
    }

    pub fn value(&self) -> FieldValue {
        let meta = self.meta.read();
        self.state
            .read()
            .value(&meta.name)
            .cloned()
            .unwrap_or_else(|| meta.initial.clone())
    }

    pub fn text(&self) -> String {
        self.value().as_text().unwrap_or_default().to_string()
    }

    pub fn set(&self, value: FieldValue) {
        let name = self.name();
        let mut state = self.state;
        if let Err(err) = state.write().set_value(&name, value) {
            tracing::warn!(field = %name, error = %err, "value for unregistered field dropped");
        }
    }

    /// Mark the field visited, revealing its error.
    pub fn touch(&self) {
        let name = self.name();
        let mut state = self.state;
        if let Err(err) = state.write().touch(&name) {
            tracing::warn!(field = %name, error = %err, "touch on unregistered field");
        }
    }

    pub fn error(&self) -> Option<String> {
        let name = self.name();
        self.state.read().error(&name).map(str::to_string)
    }

    pub fn rules(&self) -> Rules {
        self.meta.read().rules.clone()
    }

    pub fn is_required(&self) -> bool {
        self.meta.read().rules.is_required()
    }
}

pub fn field_id(name: &str) -> String {
    format!("field-{name}")
}

/// Register a field with the enclosing [`Form`].
///
/// The field validates with `rules` plus a `Required` rule named after
/// `label`, unless `optional` is set.
pub fn use_field(name: &str, label: &str, optional: bool, rules: &Rules, initial: FieldValue) -> FieldHandle {
    let form = use_form();
    let effective = Rules::effective(optional, label, rules);
    let next = FieldMeta {
        name: name.to_string(),
        initial,
        rules: effective,
    };

    let mut meta = use_hook(|| CopyValue::new(next.clone()));
    if *meta.peek() != next {
        meta.set(next.clone());
    }

    use_effect(use_reactive((&next,), move |(next,)| {
        let mut state = form.state;
        state.write().register(&next.name, next.rules, next.initial);
    }));

    use_drop(move || {
        // the form may already be gone when the whole tree unmounts
        let Ok(name) = meta.try_peek().map(|meta| meta.name.clone()) else {
            return;
        };
        let mut state = form.state;
        if let Ok(mut state) = state.try_write() {
            state.unregister(&name);
        }
    });

    FieldHandle {
        state: form.state,
        meta,
    }
}

/// Label, description, error and character-count chrome around a control.
///
/// `group` renders a `fieldset` with a `legend` for multi-control fields.
#[component]
pub fn FieldChrome(
    id: String,
    label: String,
    #[props(default)] description: Option<String>,
    #[props(default)] error: Option<String>,
    #[props(default)] counter: Option<String>,
    #[props(default = false)] required: bool,
    #[props(default = false)] group: bool,
    children: Element,
) -> Element {
    let invalid = error.is_some();
    let footer = rsx! {
        if description.is_some() || error.is_some() || counter.is_some() {
            div {
                class: "field-footer",
                div {
                    class: "field-messages",
                    if let Some(error) = error {
                        p { id: "{id}-error", class: "field-error", role: "alert", "{error}" }
                    } else if let Some(description) = description {
                        p { id: "{id}-description", class: "field-description", "{description}" }
                    }
                }
                if let Some(counter) = counter {
                    span { class: "field-counter", "aria-live": "polite", "{counter}" }
                }
            }
        }
    };

    if group {
        rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            fieldset {
                class: "field",
                "data-invalid": invalid,
                legend {
                    class: "field-label",
                    "{label}"
                    if required {
                        RequiredMark {}
                    }
                }
                {children}
                {footer}
            }
        }
    } else {
        rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            div {
                class: "field",
                "data-invalid": invalid,
                Label { html_for: id.clone(), required, "{label}" }
                {children}
                {footer}
            }
        }
    }
}

/// `aria-describedby` for a control inside [`FieldChrome`].
pub fn described_by(id: &str, has_error: bool) -> String {
    if has_error {
        format!("{id}-error")
    } else {
        format!("{id}-description")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_follow_the_field_name() {
        assert_eq!(field_id("email"), "field-email");
        assert_eq!(described_by("field-email", true), "field-email-error");
        assert_eq!(described_by("field-email", false), "field-email-description");
    }
}
