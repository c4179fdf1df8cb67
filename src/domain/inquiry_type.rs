//! Inquiry categories offered by the form's "What can we help you with?" select.

use super::errors::ValidationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a contact request.
///
/// The wire value (`general`, `support`, ...) is what the select submits;
/// [`InquiryType::label`] is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    General,
    Support,
    Sales,
    Partnership,
    Feedback,
    Other,
}

impl InquiryType {
    /// All categories in display order.
    pub const ALL: [InquiryType; 6] = [
        InquiryType::General,
        InquiryType::Support,
        InquiryType::Sales,
        InquiryType::Partnership,
        InquiryType::Feedback,
        InquiryType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::Support => "support",
            InquiryType::Sales => "sales",
            InquiryType::Partnership => "partnership",
            InquiryType::Feedback => "feedback",
            InquiryType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InquiryType::General => "General Inquiry",
            InquiryType::Support => "Technical Support",
            InquiryType::Sales => "Sales & Pricing",
            InquiryType::Partnership => "Partnership",
            InquiryType::Feedback => "Feedback",
            InquiryType::Other => "Other",
        }
    }
}

impl FromStr for InquiryType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InquiryType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownInquiryType(s.to_string()))
    }
}

impl fmt::Display for InquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
