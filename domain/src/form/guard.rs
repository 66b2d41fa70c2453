//! Overlapping-submission policy

use serde::{Deserialize, Serialize};

/// What a submit does while an earlier submission is still in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitGuard {
    /// Reject the submit; equivalent to disabling the submit control while
    /// loading (default)
    #[default]
    RejectWhileLoading,
    /// Send every submit; the response that arrives last decides the final
    /// state
    AllowOverlap,
}

impl SubmitGuard {
    pub fn from_allow_overlap(allow: bool) -> Self {
        if allow {
            SubmitGuard::AllowOverlap
        } else {
            SubmitGuard::RejectWhileLoading
        }
    }

    pub fn allows_overlap(&self) -> bool {
        matches!(self, SubmitGuard::AllowOverlap)
    }
}
