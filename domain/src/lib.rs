//! Domain layer for clarity
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Draft**: the question/answer pair being prepared, plus task, president
//!   and date metadata. Always fully shaped.
//! - **Submission**: one attempt to classify a snapshot of the draft.
//! - **FormState**: owns both, and is the only place the submission status
//!   changes.

pub mod config;
pub mod core;
pub mod draft;
pub mod form;
pub mod submission;

// Re-export commonly used types
pub use config::{OutputFormat, ResponseField};
pub use core::error::{FieldParseError, SubmitRejection, ValidationError};
pub use draft::{
    entities::Draft,
    field::{DATE_FORMAT, DraftField, FieldUpdate},
    task::Task,
};
pub use form::{
    guard::SubmitGuard,
    state::{FormState, PendingSubmission},
};
pub use submission::{
    state::SubmissionState,
    value_objects::{SubmissionId, SubmissionOutcome, SubmissionStatus},
};
