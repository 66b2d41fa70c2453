//! Infrastructure layer for clarity
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod classifier;
pub mod config;
pub mod draft_file;

// Re-export commonly used types
pub use classifier::{
    endpoint::EndpointConfig,
    error::{HttpClassifierError, Result},
    gateway::HttpClassifierGateway,
};
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileEndpointConfig, FileOutputConfig,
    FileReplConfig, FileSubmissionConfig,
};
pub use draft_file::{DraftFile, DraftFileError};
