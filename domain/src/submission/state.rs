//! Submission lifecycle state

use crate::submission::value_objects::{SubmissionOutcome, SubmissionStatus};
use serde::Serialize;

/// Status plus whichever payload that status carries.
///
/// Fields are private so `result` can only be set alongside `Succeeded` and
/// `error_message` only alongside `Failed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionState {
    status: SubmissionStatus,
    result: Option<String>,
    error_message: Option<String>,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Enter `Loading`, discarding the previous result or error
    pub fn begin(&mut self) {
        self.status = SubmissionStatus::Loading;
        self.result = None;
        self.error_message = None;
    }

    /// Record a resolution
    pub fn complete(&mut self, outcome: SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Succeeded(result) => {
                self.status = SubmissionStatus::Succeeded;
                self.result = Some(result);
                self.error_message = None;
            }
            SubmissionOutcome::Failed(message) => {
                self.status = SubmissionStatus::Failed;
                self.result = None;
                self.error_message = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle_and_empty() {
        let state = SubmissionState::new();
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert!(state.result().is_none());
        assert!(state.error_message().is_none());
    }

    #[test]
    fn test_success_sets_result_only() {
        let mut state = SubmissionState::new();
        state.begin();
        assert_eq!(state.status(), SubmissionStatus::Loading);
        state.complete(SubmissionOutcome::Succeeded("evasive".into()));
        assert_eq!(state.status(), SubmissionStatus::Succeeded);
        assert_eq!(state.result(), Some("evasive"));
        assert!(state.error_message().is_none());
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut state = SubmissionState::new();
        state.begin();
        state.complete(SubmissionOutcome::Failed("boom".into()));
        assert_eq!(state.error_message(), Some("boom"));

        state.begin();
        assert_eq!(state.status(), SubmissionStatus::Loading);
        assert!(state.error_message().is_none());
        assert!(state.result().is_none());
    }

    #[test]
    fn test_serializes_for_json_output() {
        let mut state = SubmissionState::new();
        state.begin();
        state.complete(SubmissionOutcome::Failed("down".into()));
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"status": "failed", "result": null, "error_message": "down"})
        );
    }
}
