//! Form Controller
//!
//! Owns the [`FormState`] and drives the submit/resolve cycle.
//!
//! Network calls run on spawned tasks; each one reports back with a
//! [`Resolution`] message over an mpsc channel, and only the controller
//! applies it to the state. Dropping the controller drops the receiver, so a
//! response that arrives after teardown is discarded without touching state.

use crate::config::FormConfig;
use crate::ports::classifier_gateway::ClassifierGateway;
use crate::ports::form_observer::{FormObserver, NoFormObserver};
use crate::use_cases::submit_draft::SubmitDraftUseCase;
use clarity_domain::{
    Draft, FieldUpdate, FormState, SubmissionId, SubmissionOutcome, SubmissionState,
    SubmitRejection,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Completion message for one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub id: SubmissionId,
    pub outcome: SubmissionOutcome,
}

/// Form controller managing the draft and its submissions
///
/// This controller lives in the application layer and handles:
/// - Field edits (applied immediately, in order)
/// - Submits (validated, snapshotted, sent on a background task)
/// - Resolutions (received over the channel and applied one at a time)
pub struct FormController<G: ClassifierGateway + 'static> {
    state: FormState,
    client: SubmitDraftUseCase<G>,
    observer: Arc<dyn FormObserver>,
    tx: mpsc::UnboundedSender<Resolution>,
    rx: mpsc::UnboundedReceiver<Resolution>,
}

impl<G: ClassifierGateway + 'static> FormController<G> {
    /// Create a new FormController
    pub fn new(gateway: Arc<G>, config: FormConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: FormState::new().with_guard(config.guard),
            client: SubmitDraftUseCase::new(gateway).with_failure_message(config.failure_message),
            observer: Arc::new(NoFormObserver),
            tx,
            rx,
        }
    }

    /// Set the observer notified on every state change
    pub fn with_observer(mut self, observer: Arc<dyn FormObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Start from a pre-filled draft
    pub fn with_draft(mut self, draft: Draft) -> Self {
        self.state = self.state.with_draft(draft);
        self
    }

    pub fn set_observer(&mut self, observer: Arc<dyn FormObserver>) {
        self.observer = observer;
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn draft(&self) -> &Draft {
        self.state.draft()
    }

    pub fn submission(&self) -> &SubmissionState {
        self.state.submission()
    }

    pub fn endpoint(&self) -> String {
        self.client.gateway().endpoint()
    }

    /// Set one draft field
    pub fn update_field(&mut self, update: FieldUpdate) {
        let field = update.field();
        self.state.update_field(update);
        debug!("Field {} updated", field);
        self.observer.on_field_updated(field, self.state.draft());
    }

    /// Reset the draft to empty values
    pub fn clear_draft(&mut self) {
        self.state.clear_draft();
        debug!("Draft cleared");
        self.observer.on_draft_cleared(self.state.draft());
    }

    /// Submit the current draft.
    ///
    /// An invalid draft (or a submit while loading under the default guard)
    /// is rejected before any request exists. Otherwise a snapshot is sent on
    /// a background task and the id of the new submission is returned; use
    /// [`next_resolution`](Self::next_resolution) or
    /// [`wait_for`](Self::wait_for) to apply its outcome.
    pub fn submit(&mut self) -> Result<SubmissionId, SubmitRejection> {
        self.start().map(|(id, _)| id)
    }

    /// Start a submission. The task's handle yields whether its resolution
    /// was delivered to this controller.
    fn start(&mut self) -> Result<(SubmissionId, JoinHandle<bool>), SubmitRejection> {
        let pending = match self.state.submit() {
            Ok(pending) => pending,
            Err(rejection) => {
                info!("Submit rejected: {}", rejection);
                self.observer.on_submission_rejected(&rejection);
                return Err(rejection);
            }
        };

        let id = pending.id;
        info!("Submission {} started", id);
        self.observer.on_submission_started(id, &pending.draft);

        let client = self.client.clone();
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let outcome = client.execute(&pending.draft).await;
            let delivered = tx.send(Resolution { id, outcome }).is_ok();
            if !delivered {
                debug!("Form closed before submission {} resolved; ignoring", id);
            }
            delivered
        });

        Ok((id, handle))
    }

    /// Apply a resolution. Returns `false` if it was not for an in-flight
    /// submission.
    pub fn apply(&mut self, resolution: Resolution) -> bool {
        let Resolution { id, outcome } = resolution;
        if !self.state.resolve(id, outcome) {
            warn!("Ignoring resolution for unknown submission {}", id);
            return false;
        }
        info!(
            "Submission {} resolved: {}",
            id,
            self.state.submission().status()
        );
        self.observer
            .on_submission_resolved(id, self.state.submission());
        true
    }

    /// Wait for the next resolution and apply it.
    ///
    /// Returns `None` straight away when nothing is in flight.
    pub async fn next_resolution(&mut self) -> Option<SubmissionId> {
        while self.state.in_flight() > 0 {
            let resolution = self.rx.recv().await?;
            let id = resolution.id;
            if self.apply(resolution) {
                return Some(id);
            }
        }
        None
    }

    /// Apply every resolution that has already arrived, without waiting
    pub fn poll_resolutions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(resolution) = self.rx.try_recv() {
            if self.apply(resolution) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait until submission `id` has resolved
    pub async fn wait_for(&mut self, id: SubmissionId) -> &SubmissionState {
        while self.state.is_in_flight(id) {
            if self.next_resolution().await.is_none() {
                break;
            }
        }
        self.state.submission()
    }

    /// Wait until no submission is in flight
    pub async fn settle(&mut self) -> &SubmissionState {
        while self.next_resolution().await.is_some() {}
        self.state.submission()
    }

    /// Submit and wait for this submission's outcome
    pub async fn submit_and_wait(&mut self) -> Result<&SubmissionState, SubmitRejection> {
        let id = self.submit()?;
        Ok(self.wait_for(id).await)
    }
}
