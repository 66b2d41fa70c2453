//! CLI entrypoint for clarity
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use clarity_application::{FormController, FormObserver, NoFormObserver};
use clarity_domain::{Draft, SubmissionStatus};
use clarity_infrastructure::{ConfigLoader, DraftFile, FileConfig, HttpClassifierGateway};
use clarity_presentation::{Cli, ConsoleFormatter, FormRepl, ProgressReporter, ReplConfig};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Held until exit so buffered log lines reach the file
    let _log_guard = init_logging(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    if !config.output.color {
        colored::control::set_override(false);
    }
    let format = cli.output.unwrap_or(config.output.format);

    info!("Starting clarity");

    // === Dependency Injection ===
    let endpoint = config.endpoint.to_endpoint_config();
    let gateway = Arc::new(HttpClassifierGateway::new(&endpoint)?);
    let controller = FormController::new(gateway, config.submission.to_form_config())
        .with_draft(build_draft(&cli)?);

    // Interactive mode
    if cli.interactive {
        let repl_config = ReplConfig::default()
            .with_progress(!cli.quiet && config.repl.show_progress)
            .with_history_path(config.repl.history_path())
            .with_format(format);

        FormRepl::new(controller, repl_config).run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // One-shot mode
    let observer: Arc<dyn FormObserver> = if cli.quiet {
        Arc::new(NoFormObserver)
    } else {
        Arc::new(ProgressReporter::new())
    };
    let mut controller = controller.with_observer(observer);

    match controller.submit_and_wait().await {
        Ok(state) => {
            println!("{}", ConsoleFormatter::render(state, format));
            if state.status() == SubmissionStatus::Failed {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
        Err(rejection) => {
            eprintln!("{}", ConsoleFormatter::format_rejection(&rejection));
            eprintln!("Use --question/--answer, --input <PATH>, or --interactive.");
            Ok(ExitCode::from(2))
        }
    }
}

/// Initialize logging based on verbosity level
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

/// Command line flags win over every configuration source
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(base_url) = &cli.endpoint {
        config.endpoint.base_url = base_url.clone();
    }
    if let Some(path) = &cli.path {
        config.endpoint.path = path.clone();
    }
    if let Some(field) = cli.response_field {
        config.endpoint.response_field = field;
    }
    if let Some(timeout) = cli.timeout {
        config.endpoint.timeout_seconds = Some(timeout);
    }
    if cli.allow_overlap {
        config.submission.allow_overlap = true;
    }
}

/// Draft from the command line, then the input file on top
fn build_draft(cli: &Cli) -> Result<Draft> {
    let mut draft = Draft::default();
    for update in cli.draft_updates()? {
        draft.apply(update);
    }
    if let Some(path) = &cli.input {
        for update in DraftFile::load_updates(path)? {
            draft.apply(update);
        }
    }
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clarity_domain::{ResponseField, Task};
    use std::io::Write;

    #[test]
    fn test_input_file_wins_over_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "question: From the file?\nanswer: Yes.\npres: Obama\n"
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "clarity",
            "--question",
            "From the flag?",
            "--task",
            "evasion",
            "--pres",
            "Bush",
            "--date",
            "2004-09-30",
            "--input",
            file.path().to_str().unwrap(),
        ])
        .unwrap();

        let draft = build_draft(&cli).unwrap();
        assert_eq!(draft.question, "From the file?");
        assert_eq!(draft.answer, "Yes.");
        assert_eq!(draft.president, "Obama");
        // Absent from the file, so the flags fill them in
        assert_eq!(draft.task, Task::Evasion);
        assert_eq!(draft.date, "2004-09-30");
    }

    #[test]
    fn test_missing_input_file_is_an_error() {
        let cli = Cli::try_parse_from(["clarity", "--input", "/nonexistent/draft.yaml"]).unwrap();
        assert!(build_draft(&cli).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "clarity",
            "--endpoint",
            "http://localhost:3000",
            "--path",
            "/api/analyze",
            "--response-field",
            "result",
            "--timeout",
            "5",
            "--allow-overlap",
        ])
        .unwrap();

        let mut config = FileConfig::default();
        apply_overrides(&mut config, &cli);

        assert_eq!(config.endpoint.base_url, "http://localhost:3000");
        assert_eq!(config.endpoint.path, "/api/analyze");
        assert_eq!(config.endpoint.response_field, ResponseField::Result);
        assert_eq!(config.endpoint.timeout_seconds, Some(5));
        assert!(config.submission.allow_overlap);
        assert!(config.validate().is_ok());
    }
}
