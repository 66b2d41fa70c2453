//! Submission value objects

use serde::{Deserialize, Serialize};

/// Identifier of one submission within a session.
///
/// Ids increase with send order, which is what lets a late response be
/// matched to the request it answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubmissionId(u64);

impl SubmissionId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle status of the form's submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Loading => "loading",
            SubmissionStatus::Succeeded => "succeeded",
            SubmissionStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalized result of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The classifier's label or explanatory text
    Succeeded(String),
    /// Human-readable failure message
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_names() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
        assert_eq!(SubmissionStatus::Loading.to_string(), "loading");
        assert_eq!(SubmissionStatus::Succeeded.as_str(), "succeeded");
    }

    #[test]
    fn test_ids_order_by_send() {
        assert!(SubmissionId::new(1) < SubmissionId::new(2));
        assert_eq!(SubmissionId::new(3).to_string(), "#3");
    }
}
