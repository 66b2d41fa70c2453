//! Console output formatter for submission states and drafts

use clarity_domain::{
    Draft, DraftField, OutputFormat, SubmissionState, SubmissionStatus, SubmitRejection,
};
use colored::Colorize;

/// Formats form state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render a submission state in the requested format
    pub fn render(state: &SubmissionState, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format(state),
            OutputFormat::Json => Self::format_json(state),
        }
    }

    /// Format a submission state as text: a result card, an error line, or
    /// the current status when nothing has resolved yet
    pub fn format(state: &SubmissionState) -> String {
        match state.status() {
            SubmissionStatus::Idle => format!("{}\n", "No submission yet.".dimmed()),
            SubmissionStatus::Loading => format!("{}\n", "Processing...".yellow()),
            SubmissionStatus::Succeeded => {
                let mut output = String::new();
                output.push_str(&Self::header("Analysis Result"));
                output.push('\n');
                output.push_str(&format!(
                    "\n{} {}\n",
                    "Label:".cyan().bold(),
                    state.result().unwrap_or_default().bold()
                ));
                output.push_str(&Self::footer());
                output
            }
            SubmissionStatus::Failed => format!(
                "{} {}\n",
                "Error:".red().bold(),
                state.error_message().unwrap_or_default().red()
            ),
        }
    }

    /// Format as JSON
    pub fn format_json(state: &SubmissionState) -> String {
        serde_json::to_string_pretty(state).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format every draft field, marking required ones
    pub fn format_draft(draft: &Draft) -> String {
        let mut output = format!("{}\n", "Draft".cyan().bold());
        for field in DraftField::all() {
            output.push_str(&format!("  {}\n", Self::format_field(field, draft)));
        }
        output
    }

    /// Format a single draft field as `name: value`
    pub fn format_field(field: DraftField, draft: &Draft) -> String {
        let marker = if field.is_required() { "*" } else { " " };
        let label = format!("{}{:<10}", marker, format!("{}:", field.as_str()));
        let value = draft.value(field);
        if value.is_empty() {
            format!("{} {}", label.bold(), "(empty)".dimmed())
        } else {
            format!("{} {}", label.bold(), value)
        }
    }

    /// Explain why a submit did not go out
    pub fn format_rejection(rejection: &SubmitRejection) -> String {
        match rejection {
            SubmitRejection::Invalid(err) => format!(
                "{} {}",
                "Please fill in:".red().bold(),
                err.missing_fields()
                    .iter()
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
                    .red()
            ),
            SubmitRejection::InFlight { .. } => format!(
                "{} wait for the current submission to finish",
                "Still processing:".yellow().bold()
            ),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(40);
        format!("{}\n{:^40}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(40).cyan())
    }
}
