//! Draft input files
//!
//! A draft can be prepared ahead of time as a YAML file:
//!
//! ```yaml
//! question: "Will you raise taxes next year?"
//! answer: "We have always stood for working families."
//! pres: "Barack Obama"          # `president` is accepted too
//! date: "2012-10-03"
//! task: evasion                 # optional
//! ```
//!
//! Only keys present in the file produce updates, so values supplied some
//! other way (e.g. on the command line) survive for the keys it leaves out.

use clarity_domain::{DraftField, FieldParseError, FieldUpdate};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading a draft file
#[derive(Error, Debug)]
pub enum DraftFileError {
    #[error("Failed to read draft file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse draft file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid value in draft file {path}: {source}")]
    Field {
        path: PathBuf,
        #[source]
        source: FieldParseError,
    },
}

/// Raw draft file contents as written on disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DraftFile {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(alias = "president")]
    pub pres: Option<String>,
    pub date: Option<String>,
    pub task: Option<String>,
}

impl DraftFile {
    /// Load and parse a draft file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DraftFileError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DraftFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let file = Self::parse(&content).map_err(|source| DraftFileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded draft file {}", path.display());
        Ok(file)
    }

    /// Parse YAML content. An empty document is an empty draft file.
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Field updates for every key present in the file, in field order
    pub fn updates(&self) -> Result<Vec<FieldUpdate>, FieldParseError> {
        let entries = [
            (DraftField::Question, &self.question),
            (DraftField::Answer, &self.answer),
            (DraftField::Task, &self.task),
            (DraftField::President, &self.pres),
            (DraftField::Date, &self.date),
        ];

        entries
            .into_iter()
            .filter_map(|(field, value)| value.as_deref().map(|v| FieldUpdate::parse(field, v)))
            .collect()
    }

    /// Load a file and turn it into updates in one step
    pub fn load_updates(path: impl AsRef<Path>) -> Result<Vec<FieldUpdate>, DraftFileError> {
        let path = path.as_ref();
        Self::load(path)?
            .updates()
            .map_err(|source| DraftFileError::Field {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clarity_domain::{Draft, Task};
    use std::io::Write;

    #[test]
    fn test_parse_full_file() {
        let file = DraftFile::parse(
            r#"
question: "Did you raise taxes?"
answer: "I believe in prosperity."
pres: "George H. W. Bush"
date: "1990-06-26"
task: evasion
"#,
        )
        .unwrap();

        let mut draft = Draft::default();
        for update in file.updates().unwrap() {
            draft.apply(update);
        }

        assert_eq!(
            draft,
            Draft::new("Did you raise taxes?", "I believe in prosperity.")
                .with_president("George H. W. Bush")
                .with_date("1990-06-26")
                .with_task(Task::Evasion)
        );
    }

    #[test]
    fn test_president_alias() {
        let file = DraftFile::parse("president: Lincoln\n").unwrap();
        assert_eq!(file.pres.as_deref(), Some("Lincoln"));
    }

    #[test]
    fn test_absent_keys_produce_no_updates() {
        let file = DraftFile::parse("question: only this\n").unwrap();
        assert_eq!(
            file.updates().unwrap(),
            vec![FieldUpdate::Question("only this".to_string())]
        );
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(DraftFile::parse("").unwrap(), DraftFile::default());
    }

    #[test]
    fn test_invalid_date_is_reported() {
        let file = DraftFile::parse("date: yesterday\n").unwrap();
        assert_eq!(
            file.updates().unwrap_err(),
            FieldParseError::InvalidDate("yesterday".to_string())
        );
    }

    #[test]
    fn test_load_updates_from_disk() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "question: q\nanswer: a").unwrap();

        let updates = DraftFile::load_updates(tmp.path()).unwrap();

        assert_eq!(updates.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = DraftFile::load("/nonexistent/draft.yaml").unwrap_err();
        assert!(matches!(err, DraftFileError::Io { .. }));
    }
}
