//! REPL (Read-Eval-Print Loop) for the interactive form

use crate::config::ReplConfig;
use crate::form::command::FormCommand;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::{ProgressReporter, SimpleProgress};
use clarity_application::{ClassifierGateway, FormController};
use clarity_domain::{DraftField, Task};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::sync::Arc;
use tracing::warn;

const HISTORY_CAPACITY: usize = 500;

/// Interactive form REPL
pub struct FormRepl<G: ClassifierGateway + 'static> {
    controller: FormController<G>,
    config: ReplConfig,
}

impl<G: ClassifierGateway + 'static> FormRepl<G> {
    /// Create a new FormRepl around an existing controller
    pub fn new(mut controller: FormController<G>, config: ReplConfig) -> Self {
        if config.show_progress {
            controller.set_observer(Arc::new(ProgressReporter::new()));
        } else {
            controller.set_observer(Arc::new(SimpleProgress));
        }
        Self { controller, config }
    }

    pub fn controller(&self) -> &FormController<G> {
        &self.controller
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        if let Some(path) = &self.config.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
                Err(e) => warn!("History disabled ({}): {}", path.display(), e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("clarity".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    if self.handle_line(&line).await {
                        break;
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                #[allow(unreachable_patterns)]
                _ => continue,
            }
        }

        Ok(())
    }

    /// Handle one line of input. Returns true if should exit.
    pub async fn handle_line(&mut self, line: &str) -> bool {
        let command = match line.parse::<FormCommand>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                return false;
            }
        };

        match command {
            FormCommand::Set(update) => self.controller.update_field(update),
            FormCommand::Show => println!("{}", ConsoleFormatter::format_draft(self.controller.draft())),
            FormCommand::Submit => self.submit().await,
            FormCommand::Status => println!(
                "{}",
                ConsoleFormatter::render(self.controller.submission(), self.config.format)
            ),
            FormCommand::Clear => self.controller.clear_draft(),
            FormCommand::Help => Self::print_help(),
            FormCommand::Quit => {
                println!("Bye!");
                return true;
            }
        }
        false
    }

    async fn submit(&mut self) {
        println!();
        match self.controller.submit() {
            Ok(id) => {
                let format = self.config.format;
                let state = self.controller.wait_for(id).await;
                println!("{}", ConsoleFormatter::render(state, format));
            }
            Err(rejection) => {
                eprintln!("{}", ConsoleFormatter::format_rejection(&rejection));
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│      Clarity - Political Evasion Form       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Endpoint: {}", self.controller.endpoint());
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /set <field> <value>  - Edit a field (or `<field>: <value>`)");
        println!("  /show                 - Show the draft");
        println!("  /submit, /s           - Submit the draft");
        println!("  /status               - Show the latest result");
        println!("  /clear                - Reset the draft");
        println!("  /help, /h, /?         - Show this help");
        println!("  /quit, /exit, /q      - Exit");
        println!();
        println!(
            "Fields: {} (* = required)",
            DraftField::all()
                .iter()
                .map(|f| if f.is_required() {
                    format!("{}*", f.as_str())
                } else {
                    f.as_str().to_string()
                })
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!(
            "Tasks:  {}",
            Task::all()
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!();
    }
}
