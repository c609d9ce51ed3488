//! Default command — classify the task and write its document.

use crate::cli::Cli;
use anyhow::Result;
use fa_core::run::RunRecord;
use fa_runner::input::read_task;
use fa_runner::narrate::Narrator;
use std::io::Write;

pub async fn run<W: Write>(cli: &Cli, narrator: &mut Narrator<W>) -> Result<RunRecord> {
    let config = cli.run_config();
    narrator.banner(config.profile.name());

    let task = read_task(&cli.task, std::io::stdin().lock())?;
    let record = fa_runner::execute(&task, &config, narrator).await?;
    Ok(record)
}
