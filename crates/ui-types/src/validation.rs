//! Field validation rules and the required-by-default policy.

use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use validator::{ValidateEmail, ValidateUrl};

/// The value a form field holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(Option<f64>),
    Bool(bool),
    List(Vec<String>),
    /// Selected file names.
    Files(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Whether the value counts as "not provided" for a required rule.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Number(number) => number.is_none(),
            FieldValue::Bool(checked) => !checked,
            FieldValue::List(items) | FieldValue::Files(items) => items.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(number) => *number,
            _ => None,
        }
    }

    pub fn as_bool(&self) -> bool {
        matches!(self, FieldValue::Bool(true))
    }

    pub fn as_list(&self) -> &[String] {
        match self {
            FieldValue::List(items) | FieldValue::Files(items) => items,
            _ => &[],
        }
    }

    /// Length used by min/max length rules: characters for text, entries for lists.
    fn length(&self) -> Option<usize> {
        match self {
            FieldValue::Text(text) => Some(text.chars().count()),
            FieldValue::List(items) | FieldValue::Files(items) => Some(items.len()),
            _ => None,
        }
    }
}

/// A caller-supplied check. Returns an error message when the value is rejected.
///
/// Two rules are equal only when they share the same closure, so build one
/// once and clone it rather than recreating it on every render.
#[derive(Clone)]
pub struct CustomRule {
    pub name: String,
    check: Rc<dyn Fn(&FieldValue) -> Option<String>>,
}

impl CustomRule {
    pub fn new(name: impl Into<String>, check: impl Fn(&FieldValue) -> Option<String> + 'static) -> Self {
        Self {
            name: name.into(),
            check: Rc::new(check),
        }
    }
}

impl fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomRule").field("name", &self.name).finish()
    }
}

impl PartialEq for CustomRule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Rc::ptr_eq(&self.check, &other.check)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Required { message: String },
    MinLength { min: usize, message: String },
    MaxLength { max: usize, message: String },
    Min { min: f64, message: String },
    Max { max: f64, message: String },
    Email { message: String },
    Url { message: String },
    Custom(CustomRule),
}

/// Identity used when caller rules override defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    Required,
    MinLength,
    MaxLength,
    Min,
    Max,
    Email,
    Url,
    Custom(String),
}

impl Rule {
    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::Required { .. } => RuleKind::Required,
            Rule::MinLength { .. } => RuleKind::MinLength,
            Rule::MaxLength { .. } => RuleKind::MaxLength,
            Rule::Min { .. } => RuleKind::Min,
            Rule::Max { .. } => RuleKind::Max,
            Rule::Email { .. } => RuleKind::Email,
            Rule::Url { .. } => RuleKind::Url,
            Rule::Custom(custom) => RuleKind::Custom(custom.name.clone()),
        }
    }

    /// Check a non-empty value. `Required` never fails here.
    fn check_present(&self, value: &FieldValue) -> Option<String> {
        let failed = match self {
            Rule::Required { .. } => false,
            Rule::MinLength { min, .. } => value.length().is_some_and(|len| len < *min),
            Rule::MaxLength { max, .. } => value.length().is_some_and(|len| len > *max),
            Rule::Min { min, .. } => value.as_number().is_some_and(|n| n < *min),
            Rule::Max { max, .. } => value.as_number().is_some_and(|n| n > *max),
            Rule::Email { .. } => value
                .as_text()
                .is_some_and(|text| !text.to_string().validate_email()),
            Rule::Url { .. } => value
                .as_text()
                .is_some_and(|text| !text.to_string().validate_url()),
            Rule::Custom(custom) => return (custom.check)(value),
        };
        failed.then(|| self.message().to_string())
    }

    pub fn message(&self) -> &str {
        match self {
            Rule::Required { message }
            | Rule::MinLength { message, .. }
            | Rule::MaxLength { message, .. }
            | Rule::Min { message, .. }
            | Rule::Max { message, .. }
            | Rule::Email { message }
            | Rule::Url { message } => message,
            Rule::Custom(custom) => &custom.name,
        }
    }
}

/// An ordered set of rules attached to one field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rules(Vec<Rule>);

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, rule: Rule) -> Self {
        self.upsert(rule);
        self
    }

    pub fn required(self, message: impl Into<String>) -> Self {
        self.with(Rule::Required {
            message: message.into(),
        })
    }

    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.with(Rule::MinLength {
            min,
            message: message.into(),
        })
    }

    pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
        self.with(Rule::MaxLength {
            max,
            message: message.into(),
        })
    }

    pub fn min(self, min: f64, message: impl Into<String>) -> Self {
        self.with(Rule::Min {
            min,
            message: message.into(),
        })
    }

    pub fn max(self, max: f64, message: impl Into<String>) -> Self {
        self.with(Rule::Max {
            max,
            message: message.into(),
        })
    }

    pub fn email(self, message: impl Into<String>) -> Self {
        self.with(Rule::Email {
            message: message.into(),
        })
    }

    pub fn url(self, message: impl Into<String>) -> Self {
        self.with(Rule::Url {
            message: message.into(),
        })
    }

    pub fn custom(self, rule: CustomRule) -> Self {
        self.with(Rule::Custom(rule))
    }

    /// Replace a rule of the same kind, or append.
    fn upsert(&mut self, rule: Rule) {
        let kind = rule.kind();
        match self.0.iter().position(|existing| existing.kind() == kind) {
            Some(pos) => self.0[pos] = rule,
            None => self.0.push(rule),
        }
    }

    /// Rules a field actually validates with.
    ///
    /// Unless the field is `optional`, a `Required` rule naming `label` is
    /// added first. Caller rules then override defaults of the same kind.
    pub fn effective(optional: bool, label: &str, caller: &Rules) -> Rules {
        let mut rules = Rules::new();
        if !optional {
            rules.upsert(Rule::Required {
                message: required_message(label),
            });
        }
        for rule in &caller.0 {
            rules.upsert(rule.clone());
        }
        rules
    }

    /// `self` with every rule in `overrides` replacing its kind or appended.
    pub fn overridden_by(mut self, overrides: &Rules) -> Rules {
        for rule in &overrides.0 {
            self.upsert(rule.clone());
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_required(&self) -> bool {
        self.0.iter().any(|r| matches!(r, Rule::Required { .. }))
    }

    pub fn max_length_limit(&self) -> Option<usize> {
        self.0.iter().find_map(|r| match r {
            Rule::MaxLength { max, .. } => Some(*max),
            _ => None,
        })
    }

    /// First failing rule's message, if any.
    ///
    /// Empty values only fail `Required`; every other rule applies to
    /// values that were provided.
    pub fn check(&self, value: &FieldValue) -> Option<String> {
        if value.is_empty() {
            return self.0.iter().find_map(|r| match r {
                Rule::Required { message } => Some(message.clone()),
                _ => None,
            });
        }
        self.0.iter().find_map(|rule| rule.check_present(value))
    }
}

fn required_message(label: &str) -> String {
    let label = label.trim();
    if label.is_empty() {
        "This field is required".to_string()
    } else {
        format!("{label} is required")
    }
}

/// Character-count chrome shown under length-limited text fields.
pub fn char_count(text: &str, max: Option<usize>) -> Option<String> {
    max.map(|max| format!("{} / {max}", text.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn non_optional_field_is_required_by_default() {
        let rules = Rules::effective(false, "Email", &Rules::new());
        assert!(rules.is_required());
        assert_eq!(rules.check(&text("")), Some("Email is required".to_string()));
        assert_eq!(rules.check(&text("   ")), Some("Email is required".to_string()));
    }

    #[test]
    fn optional_drops_the_default_required_rule() {
        let rules = Rules::effective(true, "Nickname", &Rules::new());
        assert!(!rules.is_required());
        assert!(rules.is_empty());
        assert_eq!(rules.check(&text("")), None);
    }

    #[test]
    fn caller_rules_override_defaults_of_the_same_kind() {
        let caller = Rules::new().required("Tell us your name").max_length(5, "Too long");
        let rules = Rules::effective(false, "Name", &caller);
        assert_eq!(rules.iter().count(), 2);
        assert_eq!(rules.check(&text("")), Some("Tell us your name".to_string()));
        assert_eq!(rules.check(&text("Bartholomew")), Some("Too long".to_string()));
        assert_eq!(rules.max_length_limit(), Some(5));
    }

    #[test]
    fn optional_field_still_honours_caller_required() {
        let rules = Rules::effective(true, "Terms", &Rules::new().required("Accept the terms"));
        assert!(rules.is_required());
        assert_eq!(
            rules.check(&FieldValue::Bool(false)),
            Some("Accept the terms".to_string())
        );
        assert_eq!(rules.check(&FieldValue::Bool(true)), None);
    }

    #[test]
    fn empty_optional_values_skip_other_rules() {
        let rules = Rules::effective(true, "Site", &Rules::new().url("Not a URL"));
        assert_eq!(rules.check(&text("")), None);
        assert_eq!(rules.check(&text("nope")), Some("Not a URL".to_string()));
        assert_eq!(rules.check(&text("https://example.com")), None);
    }

    #[test]
    fn email_rule_uses_validator() {
        let rules = Rules::new().email("Invalid email");
        assert_eq!(rules.check(&text("someone@example.com")), None);
        assert_eq!(rules.check(&text("someone@")), Some("Invalid email".to_string()));
    }

    #[test]
    fn numeric_bounds() {
        let rules = Rules::new().min(1.0, "At least 1").max(10.0, "At most 10");
        assert_eq!(rules.check(&FieldValue::Number(Some(0.0))), Some("At least 1".to_string()));
        assert_eq!(rules.check(&FieldValue::Number(Some(11.0))), Some("At most 10".to_string()));
        assert_eq!(rules.check(&FieldValue::Number(Some(5.0))), None);
    }

    #[test]
    fn list_length_rules_count_entries() {
        let rules = Rules::new().min_length(2, "Pick two");
        let one = FieldValue::List(vec!["a".into()]);
        let two = FieldValue::List(vec!["a".into(), "b".into()]);
        assert_eq!(rules.check(&one), Some("Pick two".to_string()));
        assert_eq!(rules.check(&two), None);
    }

    #[test]
    fn custom_rules_run_after_builtins() {
        let no_admin = CustomRule::new("no-admin", |value| {
            (value.as_text() == Some("admin")).then(|| "Reserved name".to_string())
        });
        let rules = Rules::effective(false, "User", &Rules::new().custom(no_admin));
        assert_eq!(rules.check(&text("admin")), Some("Reserved name".to_string()));
        assert_eq!(rules.check(&text("alice")), None);
    }

    #[test]
    fn overrides_replace_component_defaults() {
        let defaults = Rules::new().min(0.0, "No negatives").max(10.0, "Too big");
        let rules = defaults.overridden_by(&Rules::new().max(5.0, "Five at most"));
        assert_eq!(rules.check(&FieldValue::Number(Some(7.0))), Some("Five at most".to_string()));
        assert_eq!(rules.check(&FieldValue::Number(Some(-1.0))), Some("No negatives".to_string()));
    }

    #[test]
    fn unlabelled_required_message() {
        let rules = Rules::effective(false, "", &Rules::new());
        assert_eq!(rules.check(&text("")), Some("This field is required".to_string()));
    }

    #[test]
    fn char_count_renders_only_with_limit() {
        assert_eq!(char_count("héllo", Some(20)), Some("5 / 20".to_string()));
        assert_eq!(char_count("hello", None), None);
    }
}
