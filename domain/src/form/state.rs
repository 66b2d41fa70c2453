//! Form state: the draft plus the lifecycle of its submissions

use crate::core::error::SubmitRejection;
use crate::draft::entities::Draft;
use crate::draft::field::FieldUpdate;
use crate::form::guard::SubmitGuard;
use crate::submission::state::SubmissionState;
use crate::submission::value_objects::{SubmissionId, SubmissionOutcome, SubmissionStatus};
use std::collections::BTreeSet;

/// A submission that has been started and must be sent exactly once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub id: SubmissionId,
    /// Deep copy of the draft at the moment of submit
    pub draft: Draft,
}

/// Single owner of the draft and submission state.
///
/// Nothing here performs I/O. `submit` hands back a [`PendingSubmission`]
/// for the caller to send, and `resolve` folds the outcome back in.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    draft: Draft,
    submission: SubmissionState,
    guard: SubmitGuard,
    next_id: u64,
    in_flight: BTreeSet<SubmissionId>,
    last_resolved: Option<SubmissionId>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guard(mut self, guard: SubmitGuard) -> Self {
        self.guard = guard;
        self
    }

    pub fn with_draft(mut self, draft: Draft) -> Self {
        self.draft = draft;
        self
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn status(&self) -> SubmissionStatus {
        self.submission.status()
    }

    pub fn guard(&self) -> SubmitGuard {
        self.guard
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_in_flight(&self, id: SubmissionId) -> bool {
        self.in_flight.contains(&id)
    }

    /// Submission whose outcome is currently shown, if any
    pub fn last_resolved(&self) -> Option<SubmissionId> {
        self.last_resolved
    }

    /// Set one field of the draft
    pub fn update_field(&mut self, update: FieldUpdate) {
        self.draft.apply(update);
    }

    /// Replace the draft with an empty one. Submission state is kept.
    pub fn clear_draft(&mut self) {
        self.draft = Draft::default();
    }

    /// Start a submission of the current draft.
    ///
    /// On rejection nothing changes: no id is consumed and the status stays
    /// what it was.
    pub fn submit(&mut self) -> Result<PendingSubmission, SubmitRejection> {
        self.draft.validate()?;

        if !self.guard.allows_overlap() && !self.in_flight.is_empty() {
            return Err(SubmitRejection::InFlight {
                pending: self.in_flight.len(),
            });
        }

        self.next_id += 1;
        let id = SubmissionId::new(self.next_id);
        self.in_flight.insert(id);
        self.submission.begin();

        Ok(PendingSubmission {
            id,
            draft: self.draft.clone(),
        })
    }

    /// Apply the outcome of submission `id`.
    ///
    /// Each in-flight id resolves once; a second resolution or an unknown id
    /// is ignored and `false` is returned. Among overlapping submissions the
    /// last one resolved wins, whatever the send order.
    pub fn resolve(&mut self, id: SubmissionId, outcome: SubmissionOutcome) -> bool {
        if !self.in_flight.remove(&id) {
            return false;
        }
        self.submission.complete(outcome);
        self.last_resolved = Some(id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ValidationError;
    use crate::draft::field::DraftField;
    use crate::draft::task::Task;

    fn filled() -> FormState {
        let mut state = FormState::new();
        state.update_field(FieldUpdate::Question("Did you raise taxes?".into()));
        state.update_field(FieldUpdate::Answer("I believe in prosperity.".into()));
        state
    }

    #[test]
    fn test_initial_state() {
        let state = FormState::new();
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert_eq!(state.draft(), &Draft::default());
        assert_eq!(state.in_flight(), 0);
    }

    #[test]
    fn test_submit_invalid_draft_changes_nothing() {
        let mut state = FormState::new();
        state.update_field(FieldUpdate::Question("q".into()));

        let err = state.submit().unwrap_err();
        assert_eq!(
            err,
            SubmitRejection::Invalid(ValidationError::MissingRequired(vec![DraftField::Answer]))
        );
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert_eq!(state.in_flight(), 0);
    }

    #[test]
    fn test_submit_invalid_after_success_keeps_status() {
        let mut state = filled();
        let pending = state.submit().unwrap();
        state.resolve(pending.id, SubmissionOutcome::Succeeded("clear".into()));

        state.update_field(FieldUpdate::Answer(String::new()));
        assert!(state.submit().is_err());
        assert_eq!(state.status(), SubmissionStatus::Succeeded);
        assert_eq!(state.submission().result(), Some("clear"));
    }

    #[test]
    fn test_submit_snapshots_draft() {
        let mut state = filled();
        state.update_field(FieldUpdate::Task(Task::Evasion));
        let pending = state.submit().unwrap();

        state.update_field(FieldUpdate::Question("edited later".into()));

        assert_eq!(pending.draft.question, "Did you raise taxes?");
        assert_eq!(pending.draft.task, Task::Evasion);
        assert_eq!(state.draft().question, "edited later");
        assert_eq!(state.status(), SubmissionStatus::Loading);
    }

    #[test]
    fn test_resolve_success_and_failure() {
        let mut state = filled();
        let first = state.submit().unwrap();
        assert!(state.resolve(first.id, SubmissionOutcome::Succeeded("evasive".into())));
        assert_eq!(state.status(), SubmissionStatus::Succeeded);
        assert_eq!(state.submission().result(), Some("evasive"));

        let second = state.submit().unwrap();
        assert!(state.submission().result().is_none());
        assert!(state.resolve(second.id, SubmissionOutcome::Failed("down".into())));
        assert_eq!(state.status(), SubmissionStatus::Failed);
        assert_eq!(state.submission().error_message(), Some("down"));
        assert!(state.submission().result().is_none());
    }

    #[test]
    fn test_resolve_only_once() {
        let mut state = filled();
        let pending = state.submit().unwrap();
        assert!(state.resolve(pending.id, SubmissionOutcome::Succeeded("a".into())));
        assert!(!state.resolve(pending.id, SubmissionOutcome::Failed("late".into())));
        assert_eq!(state.submission().result(), Some("a"));
    }

    #[test]
    fn test_guard_rejects_while_loading() {
        let mut state = filled();
        let first = state.submit().unwrap();
        assert_eq!(
            state.submit().unwrap_err(),
            SubmitRejection::InFlight { pending: 1 }
        );
        assert_eq!(state.in_flight(), 1);

        state.resolve(first.id, SubmissionOutcome::Succeeded("ok".into()));
        assert!(state.submit().is_ok());
    }

    #[test]
    fn test_overlap_last_resolved_wins() {
        let mut state = filled().with_guard(SubmitGuard::AllowOverlap);
        let first = state.submit().unwrap();
        let second = state.submit().unwrap();
        assert!(first.id < second.id);
        assert_eq!(state.in_flight(), 2);

        // Second request answers first, first request answers last
        state.resolve(second.id, SubmissionOutcome::Succeeded("second".into()));
        state.resolve(first.id, SubmissionOutcome::Succeeded("first".into()));

        assert_eq!(state.submission().result(), Some("first"));
        assert_eq!(state.last_resolved(), Some(first.id));
        assert_eq!(state.in_flight(), 0);
    }

    #[test]
    fn test_clear_draft_keeps_submission() {
        let mut state = filled();
        let pending = state.submit().unwrap();
        state.resolve(pending.id, SubmissionOutcome::Succeeded("ok".into()));
        state.clear_draft();
        assert_eq!(state.draft(), &Draft::default());
        assert_eq!(state.submission().result(), Some("ok"));
    }
}
