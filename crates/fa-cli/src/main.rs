//! fallback-agent — command-line entry point.

mod cli;
mod commands;

use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;
use fa_runner::narrate::{Mode, Narrator};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage_error(e),
    };

    // Logs go to stderr; stdout carries the narration.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.run_config();
    let mut narrator = Narrator::stdout(Mode::for_config(&config));

    if cli.list_rules {
        return match commands::rules::run(&cli, &mut narrator).await {
            Ok(()) => {
                narrator.status(true);
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("rule listing failed: {e:#}");
                narrator.error(&e.to_string());
                narrator.status(false);
                ExitCode::FAILURE
            }
        };
    }

    let result = if cli.diagnose {
        commands::diagnose::run(&cli, &mut narrator).await
    } else {
        commands::run::run(&cli, &mut narrator).await
    };

    match result {
        Ok(record) => {
            tracing::info!(run_id = %record.run_id, label = %record.label, "run completed");
            if cli.json {
                match serde_json::to_string_pretty(&record) {
                    Ok(json) => narrator.emit(&json),
                    Err(e) => tracing::warn!("failed to serialize run record: {e}"),
                }
            }
            narrator.status(true);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("run failed: {e:#}");
            narrator.error(&e.to_string());
            narrator.status(false);
            ExitCode::FAILURE
        }
    }
}

/// `--help` and `--version` print as usual. Any other parse failure still
/// ends with the `FAILED` status line.
fn usage_error(e: clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            ExitCode::SUCCESS
        }
        _ => {
            let _ = e.print();
            let rendered = e.to_string();
            let message = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ");
            let mut narrator = Narrator::stdout(Mode::Quiet);
            narrator.error(message);
            narrator.status(false);
            ExitCode::FAILURE
        }
    }
}
