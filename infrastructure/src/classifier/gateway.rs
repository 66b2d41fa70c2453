//! HTTP Classifier Gateway implementation

use crate::classifier::endpoint::EndpointConfig;
use crate::classifier::error::{HttpClassifierError, Result};
use async_trait::async_trait;
use clarity_application::{ClassifierGateway, TransportError};
use clarity_domain::{Draft, ResponseField};
use reqwest::Url;
use tracing::{debug, info, warn};

/// Classifier gateway that POSTs drafts as JSON over HTTP
pub struct HttpClassifierGateway {
    client: reqwest::Client,
    url: Url,
    response_field: ResponseField,
}

impl HttpClassifierGateway {
    /// Create a new gateway for the configured endpoint
    pub fn new(config: &EndpointConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(HttpClassifierError::Client)?;

        Self::with_client(client, config)
    }

    /// Create a gateway with an existing client
    pub fn with_client(client: reqwest::Client, config: &EndpointConfig) -> Result<Self> {
        let url = config.url()?;
        info!(
            "HttpClassifierGateway initialized for {} (field `{}`)",
            url, config.response_field
        );

        Ok(Self {
            client,
            url,
            response_field: config.response_field,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Send one request and extract the configured result field
    pub async fn post(&self, draft: &Draft) -> Result<String> {
        let response = self
            .client
            .post(self.url.clone())
            .json(draft)
            .send()
            .await
            .map_err(HttpClassifierError::from_send)?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpClassifierError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(HttpClassifierError::from_body)?;
        debug!("Response body: {}", String::from_utf8_lossy(&body));

        let value: serde_json::Value = serde_json::from_slice(&body)?;
        self.response_field
            .extract(&value)
            .ok_or(HttpClassifierError::MissingField {
                field: self.response_field.as_str(),
            })
    }
}

#[async_trait]
impl ClassifierGateway for HttpClassifierGateway {
    async fn classify(&self, draft: &Draft) -> std::result::Result<String, TransportError> {
        self.post(draft).await.map_err(|e| {
            warn!("POST {} failed: {}", self.url, e);
            TransportError::from(e)
        })
    }

    fn endpoint(&self) -> String {
        self.url.to_string()
    }
}
