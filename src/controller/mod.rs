//! Form submission controller.
//!
//! Owns one form instance: its raw inputs, inline field errors and
//! [`SubmissionState`]. Validates on submit, delegates delivery to a
//! [`crate::sender::ContactSender`] and reports outcomes to the analytics and
//! notification collaborators.

mod state;
mod submission;
mod view;

pub use state::SubmissionState;
pub use submission::{ControllerConfig, FormSubmissionController, SubmitOutcome};
pub use view::FormView;
