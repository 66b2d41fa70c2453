//! Draft field names and typed field updates

use crate::core::error::FieldParseError;
use crate::draft::task::Task;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// ISO calendar date accepted by the `date` field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The five fields of a [`Draft`](crate::Draft)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Question,
    Answer,
    Task,
    President,
    Date,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Question => "question",
            DraftField::Answer => "answer",
            DraftField::Task => "task",
            DraftField::President => "president",
            DraftField::Date => "date",
        }
    }

    /// Whether the field must be non-empty at submit time
    pub fn is_required(&self) -> bool {
        matches!(self, DraftField::Question | DraftField::Answer)
    }

    pub fn all() -> [DraftField; 5] {
        [
            DraftField::Question,
            DraftField::Answer,
            DraftField::Task,
            DraftField::President,
            DraftField::Date,
        ]
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DraftField {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "question" | "q" => Ok(DraftField::Question),
            "answer" | "a" => Ok(DraftField::Answer),
            "task" => Ok(DraftField::Task),
            "president" | "pres" => Ok(DraftField::President),
            "date" => Ok(DraftField::Date),
            _ => Err(FieldParseError::UnknownField(s.to_string())),
        }
    }
}

/// A single-field edit to a draft.
///
/// Text fields take any string. `Task` is already typed, so applying an
/// update can never fail; parsing happens once, at the input boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Question(String),
    Answer(String),
    Task(Task),
    President(String),
    Date(String),
}

impl FieldUpdate {
    /// Field this update targets
    pub fn field(&self) -> DraftField {
        match self {
            FieldUpdate::Question(_) => DraftField::Question,
            FieldUpdate::Answer(_) => DraftField::Answer,
            FieldUpdate::Task(_) => DraftField::Task,
            FieldUpdate::President(_) => DraftField::President,
            FieldUpdate::Date(_) => DraftField::Date,
        }
    }

    /// Parse a textual value for `field`.
    ///
    /// Dates must be empty or `YYYY-MM-DD`; tasks must name a known task.
    pub fn parse(field: DraftField, value: &str) -> Result<Self, FieldParseError> {
        match field {
            DraftField::Question => Ok(FieldUpdate::Question(value.to_string())),
            DraftField::Answer => Ok(FieldUpdate::Answer(value.to_string())),
            DraftField::Task => Ok(FieldUpdate::Task(value.parse()?)),
            DraftField::President => Ok(FieldUpdate::President(value.to_string())),
            DraftField::Date => {
                let value = value.trim();
                if value.is_empty() {
                    return Ok(FieldUpdate::Date(String::new()));
                }
                NaiveDate::parse_from_str(value, DATE_FORMAT)
                    .map_err(|_| FieldParseError::InvalidDate(value.to_string()))?;
                Ok(FieldUpdate::Date(value.to_string()))
            }
        }
    }

    /// Parse a field name and value together
    pub fn parse_named(name: &str, value: &str) -> Result<Self, FieldParseError> {
        Self::parse(name.parse()?, value)
    }
}
