//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided inquiry type is not a known category.
    UnknownInquiryType(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::UnknownInquiryType(value) => write!(f, "Unknown inquiry type: {}", value),
        }
    }
}

impl std::error::Error for ValidationError {}
