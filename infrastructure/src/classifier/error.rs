//! Error types for the HTTP classifier adapter

use clarity_application::TransportError;
use thiserror::Error;

/// Result type alias for classifier HTTP operations
pub type Result<T> = std::result::Result<T, HttpClassifierError>;

/// Errors that can occur when calling the classification endpoint
///
/// These stay inside the adapter and the log. The application layer only
/// receives the flattened [`TransportError`].
#[derive(Error, Debug)]
pub enum HttpClassifierError {
    #[error("Invalid endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP error: {code} {reason}")]
    Status { code: u16, reason: String },

    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("Response is not valid JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Response has no string field `{field}`")]
    MissingField { field: &'static str },
}

impl HttpClassifierError {
    /// Classify an error returned by `RequestBuilder::send`
    pub fn from_send(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            HttpClassifierError::Timeout
        } else {
            HttpClassifierError::Connection(error)
        }
    }

    /// Classify an error returned while reading the body
    pub fn from_body(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            HttpClassifierError::Timeout
        } else {
            HttpClassifierError::Body(error)
        }
    }
}

impl From<HttpClassifierError> for TransportError {
    fn from(error: HttpClassifierError) -> Self {
        TransportError::new(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let error = HttpClassifierError::Status {
            code: 500,
            reason: "Internal Server Error".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP error: 500 Internal Server Error");
    }

    #[test]
    fn test_into_transport_error_keeps_detail() {
        let transport: TransportError = HttpClassifierError::MissingField { field: "label" }.into();
        assert_eq!(transport.message(), "Response has no string field `label`");
    }
}
