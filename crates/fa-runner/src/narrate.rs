//! Progress narration — human-readable status lines on stdout.
//!
//! Narration is cosmetic. Write failures are logged and otherwise ignored.

use crate::config::RunConfig;
use fa_compiler::profile::Narration;
use fa_core::label::Label;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Quiet,
    Terse,
    Verbose,
}

impl Mode {
    pub fn for_config(config: &RunConfig) -> Self {
        if config.quiet {
            Mode::Quiet
        } else if config.narration().verbose {
            Mode::Verbose
        } else {
            Mode::Terse
        }
    }
}

pub struct Narrator<W: Write> {
    out: W,
    mode: Mode,
}

impl Narrator<std::io::Stdout> {
    pub fn stdout(mode: Mode) -> Self {
        Self::new(std::io::stdout(), mode)
    }
}

impl<W: Write> Narrator<W> {
    pub fn new(out: W, mode: Mode) -> Self {
        Self { out, mode }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}").and_then(|_| self.out.flush()) {
            tracing::debug!("narration write failed: {e}");
        }
    }

    fn verbose(&mut self, text: &str) {
        if self.mode == Mode::Verbose {
            self.line(text);
        }
    }

    fn unless_quiet(&mut self, text: &str) {
        if self.mode != Mode::Quiet {
            self.line(text);
        }
    }

    pub fn banner(&mut self, profile: &str) {
        self.verbose(&format!("🤖 Fallback Agent Starting (profile: {profile})..."));
    }

    pub fn task(&mut self, task: &str) {
        match self.mode {
            Mode::Verbose => self.line(&format!("📋 Task: {task}")),
            Mode::Terse => self.line(&format!("🤖 Processing task: {task}")),
            Mode::Quiet => {}
        }
    }

    pub fn sandbox(&mut self, dir: &Path) {
        self.verbose(&format!("📁 Sandbox: {}", dir.display()));
    }

    pub fn analyzing(&mut self) {
        self.verbose("🔄 Analyzing task and generating content...");
    }

    /// Print numbered step lines, sleeping `step_delay` after each.
    pub async fn progress(&mut self, narration: &Narration) {
        for i in 1..=narration.steps {
            self.unless_quiet(&format!("Step {i}: {}", narration.step_verb));
            if !narration.step_delay.is_zero() {
                tokio::time::sleep(narration.step_delay).await;
            }
        }
    }

    pub fn classified(&mut self, label: Label) {
        self.verbose(&format!("🏷️  Intent: {label}"));
    }

    pub fn created(&mut self, filename: &str) {
        match self.mode {
            Mode::Verbose => self.line(&format!("📄 Created file: {filename}")),
            Mode::Terse => self.line(&format!("✅ Created: {filename}")),
            Mode::Quiet => {}
        }
    }

    pub fn completed(&mut self) {
        match self.mode {
            Mode::Verbose => {
                self.line("✅ Agent completed successfully!");
                self.line("Generated intelligent content based on task analysis");
            }
            Mode::Terse => self.line("Agent completed successfully!"),
            Mode::Quiet => {}
        }
    }

    /// Free-form line, shown unless quiet.
    pub fn note(&mut self, text: &str) {
        self.unless_quiet(text);
    }

    /// Shown in every mode.
    pub fn emit(&mut self, text: &str) {
        self.line(text);
    }

    /// Errors are shown in every mode.
    pub fn error(&mut self, message: &str) {
        self.line(&format!("❌ {message}"));
    }

    /// Final machine-readable line, shown in every mode.
    pub fn status(&mut self, success: bool) {
        self.line(if success { "SUCCESS" } else { "FAILED" });
    }
}
