//! `--diagnose` — write the self-test document.

use crate::cli::Cli;
use anyhow::Result;
use fa_core::run::RunRecord;
use fa_core::task::Task;
use fa_runner::diagnostic;
use fa_runner::input::read_task;
use fa_runner::narrate::Narrator;
use std::io::{IsTerminal, Write};

pub async fn run<W: Write>(cli: &Cli, narrator: &mut Narrator<W>) -> Result<RunRecord> {
    let config = cli.run_config();
    let task = diagnostic::task_or_default(supplied_task(cli))?;
    let record = diagnostic::run(&task, &config, narrator).await?;
    Ok(record)
}

/// A diagnostic run never fails for lack of input, and never waits on an
/// interactive terminal.
fn supplied_task(cli: &Cli) -> Option<Task> {
    let stdin = std::io::stdin();
    if cli.task.is_empty() && stdin.is_terminal() {
        return None;
    }
    read_task(&cli.task, stdin.lock()).ok()
}
