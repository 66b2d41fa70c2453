//! CLI command definitions

use clap::Parser;
use clarity_domain::{DraftField, FieldParseError, FieldUpdate, OutputFormat, ResponseField, Task};
use std::path::PathBuf;

/// CLI arguments for clarity
#[derive(Parser, Debug)]
#[command(name = "clarity")]
#[command(author, version, about = "Classify a politician's interview answer as clear or evasive")]
#[command(long_about = r#"
Clarity sends a question/answer pair from a political interview to a
classification service and shows the label it returns.

Two tasks are available:
  clarity   How clear is the answer? (default)
  evasion   Which evasion technique, if any, does the answer use?

Configuration files are loaded from (in priority order):
1. --config <path>                       Explicit config file
2. CLARITY_<SECTION>__<KEY>              Environment variables
3. ./clarity.toml                        Project-level config
4. ~/.config/clarity/config.toml         Global config

Example:
  clarity --question "Did you raise taxes?" --answer "I believe in prosperity." --task evasion
  clarity --input interview.yaml --president "Obama" --date 2012-10-03
  clarity --interactive
"#)]
pub struct Cli {
    /// Interview question
    #[arg(short = 'Q', long, value_name = "TEXT")]
    pub question: Option<String>,

    /// The politician's answer
    #[arg(short = 'A', long, value_name = "TEXT")]
    pub answer: Option<String>,

    /// Classification task: clarity or evasion
    #[arg(short, long, value_name = "TASK")]
    pub task: Option<Task>,

    /// Speaker of the answer
    #[arg(long, alias = "pres", value_name = "NAME")]
    pub president: Option<String>,

    /// Interview date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// YAML file with question, answer, pres and date keys.
    /// Keys present in the file take precedence over the flags above.
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Start the interactive form
    #[arg(short, long)]
    pub interactive: bool,

    /// Base URL of the classification service
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Route on the classification service
    #[arg(long, value_name = "PATH")]
    pub path: Option<String>,

    /// Response field holding the classification: label or result
    #[arg(long, value_name = "FIELD")]
    pub response_field: Option<ResponseField>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Allow a new submit while an earlier one is still loading
    #[arg(long)]
    pub allow_overlap: bool,

    /// Output format: text or json
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Field updates for every draft flag that was given, in field order
    pub fn draft_updates(&self) -> Result<Vec<FieldUpdate>, FieldParseError> {
        let mut updates = Vec::new();
        if let Some(question) = &self.question {
            updates.push(FieldUpdate::Question(question.clone()));
        }
        if let Some(answer) = &self.answer {
            updates.push(FieldUpdate::Answer(answer.clone()));
        }
        if let Some(task) = self.task {
            updates.push(FieldUpdate::Task(task));
        }
        if let Some(president) = &self.president {
            updates.push(FieldUpdate::President(president.clone()));
        }
        if let Some(date) = &self.date {
            updates.push(FieldUpdate::parse(DraftField::Date, date)?);
        }
        Ok(updates)
    }
}
