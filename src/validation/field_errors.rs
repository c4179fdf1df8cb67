//! Per-field validation messages.

use crate::models::FormField;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Failing fields mapped to the message shown next to each input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    /// Failing fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_fields_in_form_order() {
        let mut errors = FieldErrors::new();
        errors.insert(FormField::Message, "too short");
        errors.insert(FormField::FirstName, "too short");

        assert_eq!(errors.to_string(), "firstName: too short; message: too short");
    }

    #[test]
    fn test_serializes_as_map() {
        let mut errors = FieldErrors::new();
        errors.insert(FormField::Email, "Please enter a valid email address");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["email"], "Please enter a valid email address");
    }
}
