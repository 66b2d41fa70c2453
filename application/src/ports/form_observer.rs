//! Form observer port
//!
//! Defines the interface for re-rendering views when the form changes.

use clarity_domain::{Draft, DraftField, SubmissionId, SubmissionState, SubmitRejection};

/// Callback for form changes
///
/// Implementations live in the presentation layer and can display the form
/// in various ways (console, spinner, plain text, etc.). Every method has a
/// no-op default so observers only implement what they render.
pub trait FormObserver: Send + Sync {
    /// Called after a field edit has been applied
    fn on_field_updated(&self, _field: DraftField, _draft: &Draft) {}

    /// Called after the draft has been reset to empty values
    fn on_draft_cleared(&self, _draft: &Draft) {}

    /// Called when a submission enters `loading`
    fn on_submission_started(&self, _id: SubmissionId, _draft: &Draft) {}

    /// Called when a submit did not start a submission
    fn on_submission_rejected(&self, _rejection: &SubmitRejection) {}

    /// Called after a resolution has been applied to the state
    fn on_submission_resolved(&self, _id: SubmissionId, _state: &SubmissionState) {}
}

/// No-op observer for when nothing needs re-rendering
pub struct NoFormObserver;

impl FormObserver for NoFormObserver {}
