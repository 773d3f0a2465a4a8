//! Form-state controller: field registry, values, and validation results.

use std::collections::BTreeMap;

use crate::error::UiError;
use crate::validation::{FieldValue, Rules};

pub type FormValues = BTreeMap<String, FieldValue>;
pub type FormErrors = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
struct FieldEntry {
    rules: Rules,
    initial: FieldValue,
    value: FieldValue,
    touched: bool,
    error: Option<String>,
}

/// Values and validation state for every registered field of one form.
///
/// Errors are computed eagerly but only reported for fields the user has
/// left (touched) or after the first submit attempt.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    fields: BTreeMap<String, FieldEntry>,
    submit_count: u32,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field. Re-registering keeps the current value and swaps the rules.
    pub fn register(&mut self, name: &str, rules: Rules, initial: FieldValue) {
        match self.fields.get_mut(name) {
            Some(entry) => entry.rules = rules,
            None => {
                self.fields.insert(
                    name.to_string(),
                    FieldEntry {
                        rules,
                        value: initial.clone(),
                        initial,
                        touched: false,
                        error: None,
                    },
                );
            }
        }
    }

    pub fn unregister(&mut self, name: &str) {
        self.fields.remove(name);
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    fn entry_mut(&mut self, name: &str) -> Result<&mut FieldEntry, UiError> {
        self.fields
            .get_mut(name)
            .ok_or_else(|| UiError::UnknownField(name.to_string()))
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name).map(|entry| &entry.value)
    }

    pub fn rules(&self, name: &str) -> Option<&Rules> {
        self.fields.get(name).map(|entry| &entry.rules)
    }

    /// Store a new value; revalidates once the field's errors are being shown.
    pub fn set_value(&mut self, name: &str, value: FieldValue) -> Result<(), UiError> {
        let submitted = self.submit_count > 0;
        let entry = self.entry_mut(name)?;
        entry.value = value;
        if entry.touched || submitted {
            entry.error = entry.rules.check(&entry.value);
        }
        Ok(())
    }

    /// Mark a field as visited (blur) and validate it.
    pub fn touch(&mut self, name: &str) -> Result<(), UiError> {
        let entry = self.entry_mut(name)?;
        entry.touched = true;
        entry.error = entry.rules.check(&entry.value);
        Ok(())
    }

    pub fn validate_field(&mut self, name: &str) -> Result<bool, UiError> {
        let entry = self.entry_mut(name)?;
        entry.error = entry.rules.check(&entry.value);
        Ok(entry.error.is_none())
    }

    pub fn validate_all(&mut self) -> bool {
        let mut valid = true;
        for entry in self.fields.values_mut() {
            entry.error = entry.rules.check(&entry.value);
            valid &= entry.error.is_none();
        }
        valid
    }

    /// The error to display for `name`, if any.
    pub fn error(&self, name: &str) -> Option<&str> {
        let entry = self.fields.get(name)?;
        if entry.touched || self.submit_count > 0 {
            entry.error.as_deref()
        } else {
            None
        }
    }

    pub fn errors(&self) -> FormErrors {
        self.fields
            .keys()
            .filter_map(|name| self.error(name).map(|e| (name.clone(), e.to_string())))
            .collect()
    }

    pub fn values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|(name, entry)| (name.clone(), entry.value.clone()))
            .collect()
    }

    pub fn is_dirty(&self) -> bool {
        self.fields.values().any(|entry| entry.value != entry.initial)
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Validate everything and hand back either the values or the errors.
    pub fn submit(&mut self) -> Result<FormValues, FormErrors> {
        self.submit_count += 1;
        if self.validate_all() {
            tracing::debug!(fields = self.fields.len(), "form submitted");
            Ok(self.values())
        } else {
            let errors = self.errors();
            tracing::debug!(invalid = errors.len(), "form submission rejected");
            Err(errors)
        }
    }

    /// Restore initial values and forget validation state.
    pub fn reset(&mut self) {
        self.submit_count = 0;
        for entry in self.fields.values_mut() {
            entry.value = entry.initial.clone();
            entry.touched = false;
            entry.error = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    fn signup() -> FormState {
        let mut form = FormState::new();
        form.register(
            "email",
            Rules::effective(false, "Email", &Rules::new().email("Enter a valid email")),
            text(""),
        );
        form.register("bio", Rules::effective(true, "Bio", &Rules::new()), text(""));
        form
    }

    #[test]
    fn errors_hidden_until_touched() {
        let mut form = signup();
        assert_eq!(form.error("email"), None);
        form.touch("email").unwrap();
        assert_eq!(form.error("email"), Some("Email is required"));
        form.set_value("email", text("me@example.com")).unwrap();
        assert_eq!(form.error("email"), None);
    }

    #[test]
    fn submit_reports_every_invalid_field() {
        let mut form = signup();
        let errors = form.submit().unwrap_err();
        assert_eq!(
            errors,
            BTreeMap::from([("email".to_string(), "Email is required".to_string())])
        );
        assert_eq!(form.submit_count(), 1);

        form.set_value("email", text("bad")).unwrap();
        assert_eq!(form.error("email"), Some("Enter a valid email"));
    }

    #[test]
    fn submit_returns_values_when_valid() {
        let mut form = signup();
        form.set_value("email", text("me@example.com")).unwrap();
        let values = form.submit().unwrap();
        assert_eq!(values.get("email"), Some(&text("me@example.com")));
        assert_eq!(values.get("bio"), Some(&text("")));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let mut form = signup();
        assert_eq!(
            form.set_value("phone", text("1")),
            Err(UiError::UnknownField("phone".into()))
        );
        assert!(form.touch("phone").is_err());
    }

    #[test]
    fn reregister_keeps_value() {
        let mut form = signup();
        form.set_value("bio", text("hi")).unwrap();
        form.register("bio", Rules::new().max_length(1, "Short please"), text(""));
        assert_eq!(form.value("bio"), Some(&text("hi")));
        assert!(!form.validate_field("bio").unwrap());
    }

    #[test]
    fn dirty_and_reset() {
        let mut form = signup();
        assert!(!form.is_dirty());
        form.set_value("bio", text("changed")).unwrap();
        assert!(form.is_dirty());
        let _ = form.submit();
        form.reset();
        assert!(!form.is_dirty());
        assert_eq!(form.submit_count(), 0);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn values_serialize_untagged() {
        let mut form = FormState::new();
        form.register("age", Rules::new(), FieldValue::Number(Some(30.0)));
        form.register("tags", Rules::new(), FieldValue::List(vec!["a".into()]));
        let json = serde_json::to_string(&form.values()).unwrap();
        assert_eq!(json, r#"{"age":30.0,"tags":["a"]}"#);
    }
}
