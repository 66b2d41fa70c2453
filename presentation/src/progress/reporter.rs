//! Progress reporting for form submissions

use crate::output::console::ConsoleFormatter;
use clarity_application::FormObserver;
use clarity_domain::{Draft, DraftField, SubmissionId, SubmissionState};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner while a submission is loading
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn clear(&self) {
        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(pb) = spinner.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl FormObserver for ProgressReporter {
    fn on_field_updated(&self, field: DraftField, draft: &Draft) {
        println!(
            "{} {}",
            "v".green(),
            ConsoleFormatter::format_field(field, draft)
        );
    }

    fn on_draft_cleared(&self, draft: &Draft) {
        println!("{} Draft cleared", "v".green());
        print!("{}", ConsoleFormatter::format_draft(draft));
    }

    fn on_submission_started(&self, _id: SubmissionId, _draft: &Draft) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Processing...");
        pb.enable_steady_tick(Duration::from_millis(100));

        // A spinner left over from an overlapping submit is replaced
        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(previous) = spinner.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_submission_resolved(&self, _id: SubmissionId, _state: &SubmissionState) {
        self.clear();
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl FormObserver for SimpleProgress {
    fn on_field_updated(&self, field: DraftField, draft: &Draft) {
        println!("  {}", ConsoleFormatter::format_field(field, draft));
    }

    fn on_draft_cleared(&self, draft: &Draft) {
        print!("{}", ConsoleFormatter::format_draft(draft));
    }

    fn on_submission_started(&self, id: SubmissionId, draft: &Draft) {
        println!(
            "{} Submitting {} ({})",
            "->".cyan(),
            id,
            draft.task.display_name()
        );
    }

    fn on_submission_resolved(&self, id: SubmissionId, state: &SubmissionState) {
        println!("  {} {}", id, state.status());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clarity_domain::SubmissionOutcome;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        let draft = Draft::new("q", "a");

        reporter.on_submission_started(SubmissionId::new(1), &draft);
        assert!(reporter.spinner.lock().unwrap().is_some());

        // Overlapping submit swaps the spinner
        reporter.on_submission_started(SubmissionId::new(2), &draft);
        assert!(reporter.spinner.lock().unwrap().is_some());

        let mut state = SubmissionState::new();
        state.begin();
        state.complete(SubmissionOutcome::Succeeded("clear".to_string()));
        reporter.on_submission_resolved(SubmissionId::new(2), &state);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
