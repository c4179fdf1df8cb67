//! Analytics collaborator.
//!
//! The form reports submission attempts, successes and failures here. Calls
//! are fire-and-forget: an implementation may fail, and the controller only
//! logs that failure.

mod metadata;
mod tracker;

pub use metadata::{Metadata, MetadataValue};
pub use tracker::{Analytics, TracingAnalytics};

/// Event name reported after a successful delivery.
pub const CONTACT_FORM_SUCCESS_EVENT: &str = "contact_form_success";
