//! Application-level configuration.
//!
//! This module provides configuration types that control how the form
//! controller behaves, such as the overlapping-submit policy and the message
//! shown when a submission fails.

use clarity_domain::SubmitGuard;

/// Message shown to the user for every transport failure.
pub const DEFAULT_FAILURE_MESSAGE: &str = "There was an error connecting to the backend.";

/// Form controller behavior configuration.
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Policy for a submit issued while another is still in flight.
    pub guard: SubmitGuard,
    /// Generic message stored as `error_message` when a submission fails.
    pub failure_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            guard: SubmitGuard::default(),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl FormConfig {
    /// Creates a FormConfig from the `allow_overlap` setting.
    pub fn from_allow_overlap(allow: bool) -> Self {
        Self {
            guard: SubmitGuard::from_allow_overlap(allow),
            ..Default::default()
        }
    }

    pub fn with_guard(mut self, guard: SubmitGuard) -> Self {
        self.guard = guard;
        self
    }

    pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = message.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.guard, SubmitGuard::RejectWhileLoading);
        assert_eq!(config.failure_message, DEFAULT_FAILURE_MESSAGE);
    }

    #[test]
    fn test_from_allow_overlap() {
        assert_eq!(
            FormConfig::from_allow_overlap(true).guard,
            SubmitGuard::AllowOverlap
        );
    }
}
