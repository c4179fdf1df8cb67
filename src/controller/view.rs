//! What the form shows for a given state.

use super::SubmissionState;
use serde::Serialize;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMITTING_LABEL: &str = "Sending Message...";
pub const CONFIRMATION_TITLE: &str = "Message Sent!";
pub const CONFIRMATION_BODY: &str = "Thank you for reaching out. We've received your message and will get back to you within 24 hours.";

/// Presentation state derived from [`SubmissionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FormView {
    /// The editable form.
    Form {
        submit_label: &'static str,
        inputs_disabled: bool,
        busy: bool,
    },
    /// The confirmation panel replacing the form after a successful send.
    Confirmation {
        title: &'static str,
        body: &'static str,
    },
}

impl FormView {
    pub fn for_state(state: SubmissionState) -> Self {
        match state {
            SubmissionState::Succeeded => FormView::Confirmation {
                title: CONFIRMATION_TITLE,
                body: CONFIRMATION_BODY,
            },
            SubmissionState::Submitting => FormView::Form {
                submit_label: SUBMITTING_LABEL,
                inputs_disabled: true,
                busy: true,
            },
            SubmissionState::Idle | SubmissionState::Failed => FormView::Form {
                submit_label: SUBMIT_LABEL,
                inputs_disabled: false,
                busy: false,
            },
        }
    }
}
