//! Domain error types

use crate::draft::field::DraftField;
use thiserror::Error;

/// A required draft field was empty when the user asked to submit.
///
/// This is the only failure that can happen before a request exists, and it
/// never reaches the classifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field(s) empty: {}", join_fields(.0))]
    MissingRequired(Vec<DraftField>),
}

impl ValidationError {
    /// Fields that must be filled in before the draft can be submitted
    pub fn missing_fields(&self) -> &[DraftField] {
        match self {
            ValidationError::MissingRequired(fields) => fields,
        }
    }
}

fn join_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised while turning textual input into a typed field update
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldParseError {
    #[error("Unknown field: {0} (expected question, answer, task, president or date)")]
    UnknownField(String),

    #[error("Unknown task: {0} (expected clarity or evasion)")]
    UnknownTask(String),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

/// Reasons a submit request does not produce a submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("A submission is already in flight ({pending} pending)")]
    InFlight { pending: usize },
}

impl SubmitRejection {
    /// Check if this rejection comes from required-field validation
    pub fn is_validation(&self) -> bool {
        matches!(self, SubmitRejection::Invalid(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_display() {
        let error = ValidationError::MissingRequired(vec![DraftField::Question, DraftField::Answer]);
        assert_eq!(error.to_string(), "required field(s) empty: question, answer");
    }

    #[test]
    fn test_rejection_kind() {
        let invalid: SubmitRejection = ValidationError::MissingRequired(vec![DraftField::Answer]).into();
        assert!(invalid.is_validation());
        assert!(!SubmitRejection::InFlight { pending: 1 }.is_validation());
    }
}
