//! Application layer for clarity
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_FAILURE_MESSAGE, FormConfig};
pub use ports::{
    classifier_gateway::{ClassifierGateway, TransportError},
    form_observer::{FormObserver, NoFormObserver},
};
pub use use_cases::form_controller::{FormController, Resolution};
pub use use_cases::submit_draft::SubmitDraftUseCase;
