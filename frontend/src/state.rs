//! Submission lifecycle as an explicit state machine.
//!
//! All show/hide decisions for the page regions derive from
//! [`panel_visibility`], so a state transition is the only way the visible
//! panels can change.

use shared::Prediction;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Lifecycle of one detection request. Exactly one variant is active.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionState {
    Idle,
    Loading,
    Success(Prediction),
    Error(String),
}

impl SubmissionState {
    /// Enter `Loading`, discarding any previous terminal state.
    pub fn begin(&mut self) {
        *self = SubmissionState::Loading;
    }

    /// Resolve to a terminal state. Also applies when a response from an
    /// overlapping earlier submission arrives late: the last resolution wins.
    pub fn finish(&mut self, outcome: Result<Prediction, String>) {
        *self = match outcome {
            Ok(prediction) => SubmissionState::Success(prediction),
            Err(message) => SubmissionState::Error(message),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionState::Loading)
    }
}

/// Which page regions are visible for a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelVisibility {
    pub loading: bool,
    pub result: bool,
    pub error: bool,
}

/// Derives region visibility. An intake message borrows the error panel
/// without touching the submission state; the result panel stays hidden
/// while the message is shown.
pub fn panel_visibility(state: &SubmissionState, intake_error: Option<&str>) -> PanelVisibility {
    let has_intake_error = intake_error.is_some();
    PanelVisibility {
        loading: matches!(state, SubmissionState::Loading),
        result: matches!(state, SubmissionState::Success(_)) && !has_intake_error,
        error: matches!(state, SubmissionState::Error(_)) || has_intake_error,
    }
}

/// Local validation failures during file intake. These never reach the
/// submission state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntakeError {
    UnsupportedMediaType,
    EmptySelection,
}

impl IntakeError {
    pub fn message(&self) -> &'static str {
        match self {
            IntakeError::UnsupportedMediaType => "Only JPEG images are allowed",
            IntakeError::EmptySelection => "No file selected.",
        }
    }
}

/// A candidate must declare a JPEG media type to be accepted.
pub fn validate_media_type(media_type: &str) -> Result<(), IntakeError> {
    if media_type.starts_with("image/jpeg") {
        Ok(())
    } else {
        Err(IntakeError::UnsupportedMediaType)
    }
}
