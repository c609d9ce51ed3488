//! Diagnostic self-test — proves the binary can run, create its output
//! directory and write a file, without classifying anything.

use crate::config::RunConfig;
use crate::context::RunContext;
use crate::narrate::Narrator;
use crate::sink::OutputSink;
use crate::RunnerError;
use chrono::Local;
use fa_compiler::profile::Narration;
use fa_compiler::slot_filler::{Slots, OUTPUT_DIR, WORKING_DIR};
use fa_core::label::Label;
use fa_core::run::{RunRecord, RunStatus};
use fa_core::task::Task;
use std::io::Write;
use std::time::Duration;

pub const DEFAULT_TASK: &str = "test task";

fn narration(config: &RunConfig) -> Narration {
    Narration {
        steps: 3,
        step_delay: config.step_delay.unwrap_or(Duration::from_millis(500)),
        step_verb: "Processing...",
        verbose: true,
    }
}

/// Task for a diagnostic run: the supplied one, or `test task`.
pub fn task_or_default(task: Option<Task>) -> Result<Task, RunnerError> {
    match task {
        Some(task) => Ok(task),
        None => Ok(Task::new(DEFAULT_TASK)?),
    }
}

pub async fn run<W: Write>(
    task: &Task,
    config: &RunConfig,
    narrator: &mut Narrator<W>,
) -> Result<RunRecord, RunnerError> {
    narrator.note("🔍 Fallback Agent Diagnostic Test");
    narrator.note(&"=".repeat(40));
    narrator.task(task.as_str());

    let mut ctx = RunContext::new(config.profile);
    let compiler = config.diagnostic_compiler().await?;

    let sink = OutputSink::new(&config.output_dir);
    let output_dir = sink.ensure_dir().await?;
    narrator.sandbox(&output_dir);

    narrator.note("🧪 Running diagnostic test...");
    narrator.progress(&narration(config)).await;

    let working_dir = std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| ".".into());
    let slots = Slots::for_task(task.as_str(), Local::now().naive_local())
        .with(WORKING_DIR, working_dir)
        .with(OUTPUT_DIR, output_dir.display().to_string());

    ctx.advance(RunStatus::Synthesizing);
    let document = compiler.synthesize_with(Label::Diagnostic, slots);

    ctx.advance(RunStatus::Writing);
    let path = match sink.write(&document).await {
        Ok(path) => path,
        Err(e) => {
            ctx.fail();
            return Err(e);
        }
    };

    narrator.note(&format!("✅ Created file: {}", document.filename));
    narrator.note("🎉 Diagnostic test completed successfully!");
    narrator.note(&format!(
        "Final result: Diagnostic test passed - created {}",
        document.filename
    ));
    Ok(ctx.complete(&document, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrate::Mode;

    #[tokio::test]
    async fn writes_diagnostic_file() {
        let root = tempfile::tempdir().unwrap();
        let config = RunConfig {
            output_dir: root.path().join("sandbox"),
            step_delay: Some(Duration::ZERO),
            ..Default::default()
        };
        let mut narrator = Narrator::new(Vec::new(), Mode::Verbose);
        let task = task_or_default(None).unwrap();

        let record = run(&task, &config, &mut narrator).await.unwrap();
        assert_eq!(record.label, Label::Diagnostic);
        assert_eq!(record.filename, "diagnostic_test.md");
        assert_eq!(record.status, RunStatus::Completed);

        let content = std::fs::read_to_string(&record.path).unwrap();
        assert!(content.contains("- Task: test task"));
        assert!(content.contains("- Sandbox Path: "));
        assert!(!content.contains("{{"));

        let out = String::from_utf8(narrator.into_inner()).unwrap();
        assert!(out.contains("Step 3: Processing..."));
        assert!(out.contains("Diagnostic test passed"));
    }
}
