//! The validated contact request handed to a send capability.

use crate::analytics::Metadata;
use crate::domain::{EmailAddress, InquiryType};
use serde::Serialize;

/// A contact request that passed validation.
///
/// Only [`crate::validation::validate`] builds one. It is immutable and not
/// `Clone`: the submission attempt that receives it owns it and drops it once
/// the attempt resolves.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    inquiry_type: InquiryType,
    first_name: String,
    last_name: String,
    email: EmailAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    company: Option<String>,
    subject: String,
    message: String,
}

/// Validated parts of a [`ContactRequest`].
pub(crate) struct ContactRequestParts {
    pub inquiry_type: InquiryType,
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactRequest {
    pub(crate) fn from_parts(parts: ContactRequestParts) -> Self {
        Self {
            inquiry_type: parts.inquiry_type,
            first_name: parts.first_name,
            last_name: parts.last_name,
            email: parts.email,
            phone: parts.phone,
            company: parts.company,
            subject: parts.subject,
            message: parts.message,
        }
    }

    pub fn inquiry_type(&self) -> InquiryType {
        self.inquiry_type
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Free-form phone number as entered, e.g. with an extension.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Flat analytics metadata. Carries presence flags, never the personal data itself.
    ///
    /// `has_phone` and `has_company` follow the validated request: a
    /// whitespace-only input was dropped by validation and reports `false`.
    pub fn analytics_metadata(&self) -> Metadata {
        let mut metadata = Metadata::new();
        metadata.insert("inquiry_type", self.inquiry_type.as_str());
        metadata.insert("has_phone", self.phone.is_some());
        metadata.insert("has_company", self.company.is_some());
        metadata
    }
}
