//! Raw, unvalidated form input.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one input of the contact form.
///
/// Ordered the way the form lays its inputs out, so errors keyed by field
/// come back top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    InquiryType,
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::InquiryType,
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Phone,
        FormField::Company,
        FormField::Subject,
        FormField::Message,
    ];

    /// Field name as used in the form payload.
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::InquiryType => "inquiryType",
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Company => "company",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FormField::Phone | FormField::Company)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current values of the form inputs, exactly as typed.
///
/// Missing keys deserialize as empty strings, like untouched inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactFormFields {
    /// Selected inquiry category (`general`, `support`, `sales`, `partnership`, `feedback`, `other`)
    pub inquiry_type: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Optional
    pub phone: String,
    /// Optional
    pub company: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::InquiryType => &self.inquiry_type,
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Company => &self.company,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::InquiryType => &mut self.inquiry_type,
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Company => &mut self.company,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Reset every input to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}
