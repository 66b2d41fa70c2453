//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod form_controller;
pub mod submit_draft;
