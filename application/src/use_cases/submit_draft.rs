//! Submit Draft use case
//!
//! Sends one draft snapshot to the classifier and normalizes the result.

use crate::config::DEFAULT_FAILURE_MESSAGE;
use crate::ports::classifier_gateway::ClassifierGateway;
use clarity_domain::{Draft, SubmissionOutcome};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for submitting a draft to the classifier
///
/// Exactly one gateway call per `execute`; no retry, no deduplication.
/// Every transport failure becomes the same generic message, and the detail
/// goes to the log.
pub struct SubmitDraftUseCase<G: ClassifierGateway + 'static> {
    gateway: Arc<G>,
    failure_message: String,
}

impl<G: ClassifierGateway + 'static> Clone for SubmitDraftUseCase<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            failure_message: self.failure_message.clone(),
        }
    }
}

impl<G: ClassifierGateway + 'static> SubmitDraftUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = message.into();
        self
    }

    pub fn gateway(&self) -> &Arc<G> {
        &self.gateway
    }

    /// Execute the use case
    pub async fn execute(&self, draft: &Draft) -> SubmissionOutcome {
        info!(
            "Submitting {} draft to {}",
            draft.task,
            self.gateway.endpoint()
        );
        debug!(?draft, "Draft snapshot");

        match self.gateway.classify(draft).await {
            Ok(result) => {
                info!("Classifier responded: {}", result);
                SubmissionOutcome::Succeeded(result)
            }
            Err(e) => {
                warn!("Classification request failed: {}", e);
                SubmissionOutcome::Failed(self.failure_message.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::classifier_gateway::TransportError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ScriptedGateway {
        response: Result<String, TransportError>,
        calls: Mutex<Vec<Draft>>,
    }

    impl ScriptedGateway {
        fn new(response: Result<String, TransportError>) -> Self {
            Self {
                response,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ClassifierGateway for ScriptedGateway {
        async fn classify(&self, draft: &Draft) -> Result<String, TransportError> {
            self.calls.lock().unwrap().push(draft.clone());
            self.response.clone()
        }
    }

    #[tokio::test]
    async fn test_success_passes_label_through() {
        let gateway = Arc::new(ScriptedGateway::new(Ok("evasive".to_string())));
        let use_case = SubmitDraftUseCase::new(gateway.clone());

        let draft = Draft::new("q", "a");
        let outcome = use_case.execute(&draft).await;

        assert_eq!(outcome, SubmissionOutcome::Succeeded("evasive".to_string()));
        assert_eq!(gateway.calls.lock().unwrap().as_slice(), &[draft]);
    }

    #[tokio::test]
    async fn test_failure_becomes_generic_message() {
        let gateway = Arc::new(ScriptedGateway::new(Err(TransportError::new(
            "HTTP 500 Internal Server Error",
        ))));
        let use_case = SubmitDraftUseCase::new(gateway);

        let outcome = use_case.execute(&Draft::new("q", "a")).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Failed(DEFAULT_FAILURE_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn test_custom_failure_message() {
        let gateway = Arc::new(ScriptedGateway::new(Err(TransportError::new("refused"))));
        let use_case = SubmitDraftUseCase::new(gateway).with_failure_message("Backend down");

        let outcome = use_case.execute(&Draft::new("q", "a")).await;

        assert_eq!(outcome, SubmissionOutcome::Failed("Backend down".to_string()));
    }
}
