//! Draft entity

use crate::core::error::ValidationError;
use crate::draft::field::{DraftField, FieldUpdate};
use crate::draft::task::Task;
use serde::{Deserialize, Serialize};

/// The in-progress submission (Entity)
///
/// Every field is always present. Optional values are empty strings, which
/// is also how they go over the wire: the serialized form is exactly the five
/// keys below, never omitted and never `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Draft {
    pub question: String,
    pub answer: String,
    pub task: Task,
    pub president: String,
    pub date: String,
}

impl Draft {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            ..Default::default()
        }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.task = task;
        self
    }

    pub fn with_president(mut self, president: impl Into<String>) -> Self {
        self.president = president.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Apply a single-field edit. Other fields are left untouched.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Question(v) => self.question = v,
            FieldUpdate::Answer(v) => self.answer = v,
            FieldUpdate::Task(t) => self.task = t,
            FieldUpdate::President(v) => self.president = v,
            FieldUpdate::Date(v) => self.date = v,
        }
    }

    /// Textual value of a field, as it would be sent
    pub fn value(&self, field: DraftField) -> &str {
        match field {
            DraftField::Question => &self.question,
            DraftField::Answer => &self.answer,
            DraftField::Task => self.task.as_str(),
            DraftField::President => &self.president,
            DraftField::Date => &self.date,
        }
    }

    /// Required fields that are empty
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::all()
            .into_iter()
            .filter(|f| f.is_required() && self.value(*f).is_empty())
            .collect()
    }

    /// Check the required-field contract
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingRequired(missing))
        }
    }
}
