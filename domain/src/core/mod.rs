//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ValidationError`]: required-field failure at submit time
//! - [`error::FieldParseError`]: textual input that is not a valid field update
//! - [`error::SubmitRejection`]: why a submit did not start a submission

pub mod error;
