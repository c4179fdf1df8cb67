//! Submission lifecycle.

use serde::Serialize;
use std::fmt;

/// Where a form instance is in its submission lifecycle.
///
/// Transition functions return `None` when the move is not allowed from the
/// current state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// Idle and Failed accept a new submit.
    pub fn can_submit(self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed)
    }

    /// Inputs are editable whenever a submit would be accepted.
    pub fn accepts_input(self) -> bool {
        self.can_submit()
    }

    /// Idle | Failed → Submitting.
    pub fn begin_submit(self) -> Option<Self> {
        self.can_submit().then_some(SubmissionState::Submitting)
    }

    /// Submitting → Succeeded | Failed.
    pub fn resolve(self, delivered: bool) -> Option<Self> {
        match self {
            SubmissionState::Submitting if delivered => Some(SubmissionState::Succeeded),
            SubmissionState::Submitting => Some(SubmissionState::Failed),
            _ => None,
        }
    }

    /// Succeeded → Idle, once the confirmation has been shown.
    pub fn reset(self) -> Option<Self> {
        match self {
            SubmissionState::Succeeded => Some(SubmissionState::Idle),
            _ => None,
        }
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed => "failed",
        };
        f.write_str(name)
    }
}
