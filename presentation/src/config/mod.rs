//! Presentation-level configuration
//!
//! Configuration for how the interactive form renders.

use clarity_domain::OutputFormat;
use std::path::PathBuf;

/// Interactive form configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show the spinner while a submission is loading
    pub show_progress: bool,
    /// Path to history file (no history is kept when `None`)
    pub history_path: Option<PathBuf>,
    /// How submission states are printed
    pub format: OutputFormat,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_path: None,
            format: OutputFormat::Text,
        }
    }
}

impl ReplConfig {
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_history_path(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
