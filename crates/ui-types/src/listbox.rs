use serde::{Deserialize, Serialize};

/// One choice offered by a select, combobox or option-group field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
}

impl ListOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Build options from `(value, label)` pairs.
pub fn options_from_pairs(pairs: &[(&str, &str)]) -> Vec<ListOption> {
    pairs
        .iter()
        .map(|(value, label)| ListOption::new(*value, *label))
        .collect()
}

/// Options whose label contains `query`, ignoring case. An empty query keeps everything.
pub fn filter_options(options: &[ListOption], query: &str) -> Vec<ListOption> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|option| option.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Keyboard highlight over a list that may contain disabled entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Highlight {
    index: Option<usize>,
}

impl Highlight {
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Point at `index` directly, e.g. on hover.
    pub fn set(&mut self, index: usize) {
        self.index = Some(index);
    }

    pub fn clear(&mut self) {
        self.index = None;
    }

    pub fn first(&mut self, options: &[ListOption]) {
        self.index = options.iter().position(|o| !o.disabled);
    }

    /// Move down, wrapping past the end and skipping disabled options.
    pub fn next(&mut self, options: &[ListOption]) {
        self.step(options, true);
    }

    /// Move up, wrapping past the start and skipping disabled options.
    pub fn previous(&mut self, options: &[ListOption]) {
        self.step(options, false);
    }

    pub fn selected<'a>(&self, options: &'a [ListOption]) -> Option<&'a ListOption> {
        self.index
            .and_then(|i| options.get(i))
            .filter(|o| !o.disabled)
    }

    fn step(&mut self, options: &[ListOption], forward: bool) {
        let len = options.len();
        if len == 0 {
            self.index = None;
            return;
        }
        let start = match (self.index, forward) {
            (None, true) => len - 1,
            (None, false) => 0,
            (Some(i), _) => i.min(len - 1),
        };
        let mut candidate = start;
        for _ in 0..len {
            candidate = if forward {
                (candidate + 1) % len
            } else {
                (candidate + len - 1) % len
            };
            if !options[candidate].disabled {
                self.index = Some(candidate);
                return;
            }
        }
        self.index = None;
    }
}
