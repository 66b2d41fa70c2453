//! HTTP adapter for the classification service
//!
//! - [`endpoint::EndpointConfig`]: base URL, path, response field, timeout
//! - [`gateway::HttpClassifierGateway`]: the [`ClassifierGateway`](clarity_application::ClassifierGateway) implementation
//! - [`error::HttpClassifierError`]: detailed failure kinds, flattened for callers

pub mod endpoint;
pub mod error;
pub mod gateway;
