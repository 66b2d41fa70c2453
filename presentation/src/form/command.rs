//! Parsing of interactive form input

use clarity_domain::{DraftField, FieldParseError, FieldUpdate};
use std::str::FromStr;
use thiserror::Error;

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    /// Edit one draft field (`/set <field> <value>` or `<field>: <value>`)
    Set(FieldUpdate),
    /// Print the draft
    Show,
    /// Submit the draft and wait for its result
    Submit,
    /// Print the latest submission state
    Status,
    /// Reset the draft
    Clear,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormCommandError {
    #[error(transparent)]
    Field(#[from] FieldParseError),

    #[error("Usage: /set <field> <value>")]
    MissingField,

    #[error("Unknown command: {0} (type /help for available commands)")]
    UnknownCommand(String),

    #[error("Expected a command or `<field>: <value>`, got: {0}")]
    Unrecognized(String),
}

impl FromStr for FormCommand {
    type Err = FormCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();

        if line.starts_with('/') {
            let (command, rest) = split_word(line);
            return match command {
                "/set" => {
                    let (field, value) = split_word(rest);
                    if field.is_empty() {
                        return Err(FormCommandError::MissingField);
                    }
                    Ok(FormCommand::Set(FieldUpdate::parse_named(field, value)?))
                }
                "/show" | "/draft" => Ok(FormCommand::Show),
                "/submit" | "/s" => Ok(FormCommand::Submit),
                "/status" => Ok(FormCommand::Status),
                "/clear" => Ok(FormCommand::Clear),
                "/help" | "/h" | "/?" => Ok(FormCommand::Help),
                "/quit" | "/exit" | "/q" => Ok(FormCommand::Quit),
                other => Err(FormCommandError::UnknownCommand(other.to_string())),
            };
        }

        match line.split_once(':') {
            Some((name, value)) if !name.trim().contains(char::is_whitespace) => {
                let field: DraftField = name.parse()?;
                Ok(FormCommand::Set(FieldUpdate::parse(field, value.trim())?))
            }
            _ => Err(FormCommandError::Unrecognized(line.to_string())),
        }
    }
}

/// Split off the first whitespace-delimited word
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clarity_domain::Task;

    #[test]
    fn test_set_command() {
        assert_eq!(
            "/set question Did you raise taxes?".parse(),
            Ok(FormCommand::Set(FieldUpdate::Question(
                "Did you raise taxes?".to_string()
            )))
        );
        assert_eq!(
            "/set task EVASION".parse(),
            Ok(FormCommand::Set(FieldUpdate::Task(Task::Evasion)))
        );
    }

    #[test]
    fn test_set_without_value_clears_field() {
        assert_eq!(
            "/set pres".parse(),
            Ok(FormCommand::Set(FieldUpdate::President(String::new())))
        );
        assert_eq!("/set".parse::<FormCommand>(), Err(FormCommandError::MissingField));
    }

    #[test]
    fn test_field_colon_shorthand() {
        assert_eq!(
            "answer: I believe in prosperity: for everyone.".parse(),
            Ok(FormCommand::Set(FieldUpdate::Answer(
                "I believe in prosperity: for everyone.".to_string()
            )))
        );
        assert_eq!(
            "date: 2012-10-03".parse(),
            Ok(FormCommand::Set(FieldUpdate::Date("2012-10-03".to_string())))
        );
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            "date: yesterday".parse::<FormCommand>(),
            Err(FormCommandError::Field(FieldParseError::InvalidDate(
                "yesterday".to_string()
            )))
        );
        assert_eq!(
            "speaker: Obama".parse::<FormCommand>(),
            Err(FormCommandError::Field(FieldParseError::UnknownField(
                "speaker".to_string()
            )))
        );
    }

    #[test]
    fn test_plain_commands() {
        assert_eq!("/submit".parse(), Ok(FormCommand::Submit));
        assert_eq!("  /show ".parse(), Ok(FormCommand::Show));
        assert_eq!("/q".parse(), Ok(FormCommand::Quit));
        assert_eq!(
            "/models".parse::<FormCommand>(),
            Err(FormCommandError::UnknownCommand("/models".to_string()))
        );
        assert!(matches!(
            "what is this".parse::<FormCommand>(),
            Err(FormCommandError::Unrecognized(_))
        ));
    }
}
