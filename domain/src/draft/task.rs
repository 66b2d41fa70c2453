//! Classification task value object

use crate::core::error::FieldParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which judgment the classifier should make about the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Task {
    /// Is the answer a clear reply to the question (default)
    #[default]
    Clarity,
    /// Which evasion technique, if any, the answer uses
    Evasion,
}

impl Task {
    /// Wire name sent to the classification endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            Task::Clarity => "clarity",
            Task::Evasion => "evasion",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Task::Clarity => "Clarity Analysis",
            Task::Evasion => "Evasion Detection",
        }
    }

    pub fn all() -> [Task; 2] {
        [Task::Clarity, Task::Evasion]
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Task {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clarity" => Ok(Task::Clarity),
            "evasion" => Ok(Task::Evasion),
            _ => Err(FieldParseError::UnknownTask(s.to_string())),
        }
    }
}
