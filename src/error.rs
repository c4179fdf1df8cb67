//! Error types for the contact form.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Per-field validation failures live in [`crate::validation::FieldErrors`].

use thiserror::Error;

/// Errors raised by a send capability while delivering a contact request.
///
/// All variants are recoverable: the form moves to `Failed` and the user may
/// submit again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// HTTP transport failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Receiving endpoint answered with an error status code
    #[error("Delivery rejected (status {status}): {message}")]
    Rejected { status: u16, message: String },

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Request could not be encoded for delivery
    #[error("Failed to encode contact request: {0}")]
    Encoding(String),

    /// Generic delivery error with context
    #[error("Submission failed: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with SubmissionError
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
