//! Classifier Gateway port
//!
//! Defines the interface for sending a draft to the classification endpoint.

use async_trait::async_trait;
use clarity_domain::Draft;
use std::sync::Arc;
use thiserror::Error;

/// The request for a classification could not be completed.
///
/// Unreachable host, non-2xx status, unparseable body, missing result field
/// and timeout all end up here. Adapters keep their own detailed error for
/// logging; callers only ever see this message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Gateway to the remote classifier
///
/// This port defines how the application layer reaches the classification
/// service. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ClassifierGateway: Send + Sync {
    /// Send exactly one request for `draft` and return the classifier's
    /// label or explanatory text.
    async fn classify(&self, draft: &Draft) -> Result<String, TransportError>;

    /// Human-readable description of where requests go
    fn endpoint(&self) -> String {
        "classifier".to_string()
    }
}

#[async_trait]
impl<G: ClassifierGateway + ?Sized> ClassifierGateway for Arc<G> {
    async fn classify(&self, draft: &Draft) -> Result<String, TransportError> {
        (**self).classify(draft).await
    }

    fn endpoint(&self) -> String {
        (**self).endpoint()
    }
}
