//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod endpoint;
mod output;
mod repl;
mod submission;

pub use endpoint::FileEndpointConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use submission::FileSubmissionConfig;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("endpoint.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("endpoint.base_url is not an absolute http(s) URL: {0}")]
    InvalidBaseUrl(String),

    #[error("endpoint.path cannot be empty")]
    EmptyPath,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Classification endpoint settings
    pub endpoint: FileEndpointConfig,
    /// Submit behavior settings
    pub submission: FileSubmissionConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Interactive form settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        // Timeout of 0 seconds doesn't make sense
        if let Some(0) = self.endpoint.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        match Url::parse(&self.endpoint.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => {
                return Err(ConfigValidationError::InvalidBaseUrl(
                    self.endpoint.base_url.clone(),
                ));
            }
        }

        if self.endpoint.path.trim().is_empty() {
            return Err(ConfigValidationError::EmptyPath);
        }

        Ok(())
    }
}
