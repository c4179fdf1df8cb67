//! The per-field validation schema.

use crate::domain::{EmailAddress, InquiryType};
use crate::models::FormField;

/// Predicate applied to a single raw field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// At least `min` UTF-16 code units, the length a browser reports.
    MinLength { min: usize, message: &'static str },
    /// One of the known [`InquiryType`] values.
    InquiryType { message: &'static str },
    /// Email-shaped address.
    Email { message: &'static str },
    /// Free text, no constraint.
    OptionalText,
}

impl FieldRule {
    /// Check a raw value, returning the field's message on failure.
    pub fn check(&self, value: &str) -> Result<(), &'static str> {
        let ok = match *self {
            FieldRule::MinLength { min, .. } => value.encode_utf16().count() >= min,
            FieldRule::InquiryType { .. } => value.parse::<InquiryType>().is_ok(),
            FieldRule::Email { .. } => EmailAddress::is_valid(value),
            FieldRule::OptionalText => true,
        };

        if ok {
            Ok(())
        } else {
            Err(self.message())
        }
    }

    pub fn message(&self) -> &'static str {
        match *self {
            FieldRule::MinLength { message, .. }
            | FieldRule::InquiryType { message }
            | FieldRule::Email { message } => message,
            FieldRule::OptionalText => "",
        }
    }
}

/// The rule attached to a form field.
pub fn rule_for(field: FormField) -> FieldRule {
    match field {
        FormField::InquiryType => FieldRule::InquiryType {
            message: "Please select an inquiry type",
        },
        FormField::FirstName => FieldRule::MinLength {
            min: 2,
            message: "First name must be at least 2 characters",
        },
        FormField::LastName => FieldRule::MinLength {
            min: 2,
            message: "Last name must be at least 2 characters",
        },
        FormField::Email => FieldRule::Email {
            message: "Please enter a valid email address",
        },
        FormField::Phone | FormField::Company => FieldRule::OptionalText,
        FormField::Subject => FieldRule::MinLength {
            min: 5,
            message: "Subject must be at least 5 characters",
        },
        FormField::Message => FieldRule::MinLength {
            min: 10,
            message: "Message must be at least 10 characters",
        },
    }
}
