//! Formlink Contact - the core of the Formlink landing page contact form.
//!
//! Validates the form's fields, runs the submission lifecycle
//! (idle → submitting → succeeded/failed) against an injectable send
//! capability, and reports outcomes to analytics and user notifications.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (email, inquiry type)
//! - **models**: Raw form fields, the validated contact request, contact info panel
//! - **validation**: The per-field validation schema
//! - **controller**: Submission state machine and form view
//! - **sender**: Send capabilities (simulated, webhook)
//! - **analytics** / **notification**: Fire-and-forget collaborators
//! - **metrics**: Submission counters
//! - **config** / **error**: Configuration and error types

pub mod analytics;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod notification;
pub mod sender;
pub mod validation;

pub use analytics::{Analytics, Metadata, MetadataValue, TracingAnalytics};
pub use config::Config;
pub use controller::{
    ControllerConfig, FormSubmissionController, FormView, SubmissionState, SubmitOutcome,
};
pub use domain::{EmailAddress, InquiryType, ValidationError};
pub use error::{ConfigError, SubmissionError};
pub use metrics::{MetricsSummary, SubmissionMetrics};
pub use models::{ContactFormFields, ContactRequest, FormField};
pub use notification::{Notification, NotificationLevel, Notifier, TracingNotifier};
pub use sender::{ContactSender, SimulatedSender, WebhookClient, WebhookSender};
pub use validation::{validate, FieldErrors};

/// JSON Schema describing the raw form payload.
pub fn form_schema() -> schemars::Schema {
    schemars::schema_for!(ContactFormFields)
}
