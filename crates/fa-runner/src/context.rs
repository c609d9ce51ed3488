//! Run Context — state of the single classify → synthesize → write pass.

use chrono::{DateTime, Local};
use fa_compiler::profile::Profile;
use fa_core::document::Document;
use fa_core::label::Label;
use fa_core::run::{RunRecord, RunStatus};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Debug)]
pub struct RunContext {
    pub run_id: Uuid,
    pub profile: Profile,
    pub started_at: DateTime<Local>,
    status: RunStatus,
}

impl RunContext {
    pub fn new(profile: Profile) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            profile,
            started_at: Local::now(),
            status: RunStatus::Classifying,
        }
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Move to the next state. Terminal states are never left.
    pub fn advance(&mut self, next: RunStatus) {
        if self.status.is_terminal() {
            tracing::warn!(run_id = %self.run_id, from = ?self.status, to = ?next, "run already finished");
            return;
        }
        tracing::debug!(run_id = %self.run_id, from = ?self.status, to = ?next, "run state");
        self.status = next;
    }

    pub fn fail(&mut self) {
        self.advance(RunStatus::Failed);
    }

    /// Mark the run completed and build its record.
    pub fn complete(mut self, document: &Document, path: PathBuf) -> RunRecord {
        self.advance(RunStatus::Completed);
        self.record(document.label, &document.filename, path, document.byte_len() as u64)
    }

    fn record(&self, label: Label, filename: &str, path: PathBuf, bytes: u64) -> RunRecord {
        RunRecord {
            run_id: self.run_id,
            profile: self.profile.name().to_string(),
            label,
            filename: filename.to_string(),
            path,
            bytes,
            started_at: self.started_at,
            completed_at: Some(Local::now()),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_through_states() {
        let mut ctx = RunContext::new(Profile::Standard);
        assert_eq!(ctx.status(), RunStatus::Classifying);
        ctx.advance(RunStatus::Synthesizing);
        ctx.advance(RunStatus::Writing);
        assert_eq!(ctx.status(), RunStatus::Writing);

        let doc = Document {
            label: Label::Recipe,
            filename: "banoffee.md".into(),
            content: "abc".into(),
        };
        let record = ctx.complete(&doc, PathBuf::from("sandbox/banoffee.md"));
        assert_eq!(record.status, RunStatus::Completed);
        assert_eq!(record.bytes, 3);
        assert_eq!(record.profile, "standard");
        assert!(record.completed_at.is_some());
    }

    #[test]
    fn failed_is_sticky() {
        let mut ctx = RunContext::new(Profile::Minimal);
        ctx.fail();
        ctx.advance(RunStatus::Writing);
        assert_eq!(ctx.status(), RunStatus::Failed);
    }
}
