//! fa-runner: Driver around the task compiler — reads the task, narrates
//! progress, and writes the synthesized document into the output directory.

pub mod config;
pub mod context;
pub mod diagnostic;
pub mod input;
pub mod narrate;
pub mod sink;

pub use config::RunConfig;

use chrono::Local;
use context::RunContext;
use fa_compiler::CompilerError;
use fa_core::run::{RunRecord, RunStatus};
use fa_core::task::{Task, TaskError};
use narrate::Narrator;
use sink::OutputSink;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error(transparent)]
    Input(#[from] TaskError),
    #[error("Error reading task: {0}")]
    ReadInput(#[source] std::io::Error),
    #[error("Error creating output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Error creating file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Error loading templates from {}: {source}", .path.display())]
    Templates {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("template catalog error: {0}")]
    Catalog(#[from] CompilerError),
}

/// Run one classify → synthesize → write pass for `task`.
pub async fn execute<W: Write>(
    task: &Task,
    config: &RunConfig,
    narrator: &mut Narrator<W>,
) -> Result<RunRecord, RunnerError> {
    let compiler = config.compiler().await?;
    let mut ctx = RunContext::new(config.profile);
    tracing::info!(run_id = %ctx.run_id, profile = %config.profile, "run started");

    narrator.task(task.as_str());

    let sink = OutputSink::new(&config.output_dir);
    let output_dir = sink.ensure_dir().await?;
    narrator.sandbox(&output_dir);

    narrator.analyzing();
    narrator.progress(&config.narration()).await;

    let label = compiler.classify(task);
    narrator.classified(label);

    ctx.advance(RunStatus::Synthesizing);
    let document = compiler.synthesize(label, task, Local::now().naive_local());

    ctx.advance(RunStatus::Writing);
    let path = match sink.write(&document).await {
        Ok(path) => path,
        Err(e) => {
            ctx.fail();
            return Err(e);
        }
    };

    narrator.created(&document.filename);
    narrator.completed();
    Ok(ctx.complete(&document, path))
}
