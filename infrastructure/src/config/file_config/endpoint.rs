//! Endpoint configuration from TOML (`[endpoint]` section)

use crate::classifier::endpoint::{DEFAULT_BASE_URL, DEFAULT_PATH, EndpointConfig};
use clarity_domain::ResponseField;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw endpoint configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// Scheme, host and port of the classification service (or of the
    /// hosting layer that proxies it)
    pub base_url: String,
    /// Route resolved against `base_url`
    pub path: String,
    /// Response field holding the classification
    pub response_field: ResponseField,
    /// Request timeout in seconds (none by default)
    pub timeout_seconds: Option<u64>,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            path: DEFAULT_PATH.to_string(),
            response_field: ResponseField::default(),
            timeout_seconds: None,
        }
    }
}

impl FileEndpointConfig {
    /// Convert to the adapter's endpoint configuration
    pub fn to_endpoint_config(&self) -> EndpointConfig {
        EndpointConfig {
            base_url: self.base_url.clone(),
            path: self.path.clone(),
            response_field: self.response_field,
            timeout: self.timeout_seconds.map(Duration::from_secs),
        }
    }
}
