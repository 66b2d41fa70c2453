//! Presentation layer for clarity
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive form.

pub mod cli;
pub mod config;
pub mod form;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::ReplConfig;
pub use form::{
    command::{FormCommand, FormCommandError},
    repl::FormRepl,
};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
