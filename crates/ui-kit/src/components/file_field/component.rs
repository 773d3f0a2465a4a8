use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFile, LdUpload};
use dioxus_free_icons::Icon;
use ui_types::{FieldValue, Rules};

use crate::components::form::{described_by, use_field, FieldChrome};

/// Human readable byte size, e.g. `1.5 MB`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}

/// File picker with a drop zone. The form value holds the chosen file names;
/// reading contents is left to the submit handler's owner.
#[component]
pub fn FileField(
    name: String,
    label: String,
    #[props(default)] description: Option<String>,
    #[props(default = false)] optional: bool,
    #[props(default)] rules: Rules,
    /// Passed through to the input's `accept` attribute.
    #[props(default)]
    accept: String,
    #[props(default = false)] multiple: bool,
    #[props(default = false)] disabled: bool,
) -> Element {
    let field = use_field(&name, &label, optional, &rules, FieldValue::Files(Vec::new()));
    let mut sizes = use_signal(Vec::<(String, u64)>::new);
    let mut dragging = use_signal(|| false);
    let id = field.id();
    let error = field.error();
    // sizes are only known for files picked in this session; the names come from the form
    let listed: Vec<(String, Option<u64>)> = field
        .value()
        .as_list()
        .iter()
        .map(|name| {
            let size = sizes.read().iter().find(|(n, _)| n == name).map(|(_, s)| *s);
            (name.clone(), size)
        })
        .collect();

    let mut pick = move |chosen: Vec<(String, u64)>| {
        let chosen = if multiple { chosen } else { chosen.into_iter().take(1).collect() };
        tracing::debug!(field = %field.name(), count = chosen.len(), "files chosen");
        field.set(FieldValue::Files(chosen.iter().map(|(name, _)| name.clone()).collect()));
        field.touch();
        sizes.set(chosen);
    };

    rsx! {
        FieldChrome {
            id: id.clone(),
            label,
            description,
            error: error.clone(),
            required: field.is_required(),
            label {
                class: "field-dropzone",
                r#for: "{id}",
                "data-dragging": dragging(),
                "data-disabled": disabled,
                ondragover: move |evt| {
                    evt.prevent_default();
                    dragging.set(true);
                },
                ondragleave: move |_| dragging.set(false),
                ondrop: move |evt| {
                    evt.prevent_default();
                    dragging.set(false);
                    if !disabled {
                        pick(evt.files().iter().map(|f| (f.name(), f.size())).collect());
                    }
                },
                Icon::<LdUpload> { icon: LdUpload, width: 20, height: 20 }
                span {
                    if multiple { "Drop files here or browse" } else { "Drop a file here or browse" }
                }
                input {
                    id: "{id}",
                    name: "{name}",
                    r#type: "file",
                    accept: "{accept}",
                    multiple,
                    disabled,
                    "aria-invalid": error.is_some(),
                    "aria-describedby": described_by(&id, error.is_some()),
                    onchange: move |evt: FormEvent| {
                        pick(evt.files().iter().map(|f| (f.name(), f.size())).collect());
                    },
                }
            }
            if !listed.is_empty() {
                ul {
                    class: "field-files",
                    for (file, size) in listed {
                        li {
                            key: "{file}",
                            Icon::<LdFile> { icon: LdFile, width: 14, height: 14 }
                            span { "{file}" }
                            if let Some(size) = size {
                                span { class: "field-file-size", "{format_size(size)}" }
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
    fn sizes_scale_through_units() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }
}
