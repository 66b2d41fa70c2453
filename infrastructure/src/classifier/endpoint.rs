//! Endpoint configuration for the classification service

use crate::classifier::error::{HttpClassifierError, Result};
use clarity_domain::ResponseField;
use reqwest::Url;
use std::time::Duration;

/// Default classification service, reached directly on its own port
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default route of the classification service
pub const DEFAULT_PATH: &str = "/predict/";

/// Where and how to reach the classifier.
///
/// `path` is resolved against `base_url` like a relative link, so both a
/// standalone service (`http://host:8000` + `/predict/`) and a service proxied
/// by the hosting layer (`http://host:3000` + `/api/analyze`) are just
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub base_url: String,
    pub path: String,
    pub response_field: ResponseField,
    /// No timeout unless configured
    pub timeout: Option<Duration>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            path: DEFAULT_PATH.to_string(),
            response_field: ResponseField::default(),
            timeout: None,
        }
    }
}

impl EndpointConfig {
    pub fn new(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_response_field(mut self, field: ResponseField) -> Self {
        self.response_field = field;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve the full request URL
    pub fn url(&self) -> Result<Url> {
        let invalid = |reason: String| HttpClassifierError::InvalidEndpoint {
            url: self.base_url.clone(),
            reason,
        };

        let base = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme `{}`", base.scheme())));
        }
        if self.path.trim().is_empty() {
            return Err(invalid("path is empty".to_string()));
        }

        base.join(self.path.trim()).map_err(|e| invalid(e.to_string()))
    }
}
