//! Run types — the record of one classify → synthesize → write pass.

use crate::label::Label;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Run status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Classifying,
    Synthesizing,
    Writing,
    Completed,
    Failed,
}

impl RunStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunStatus::Completed | RunStatus::Failed)
    }
}

// ---------------------------------------------------------------------------
// RunRecord — one per process invocation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// Unique run identifier.
    pub run_id: Uuid,

    /// Profile whose rule table was used.
    pub profile: String,

    /// Label chosen by classification.
    pub label: Label,

    /// File name inside the output directory.
    pub filename: String,

    /// Full path of the written document.
    pub path: PathBuf,

    /// Bytes written.
    pub bytes: u64,

    pub started_at: DateTime<Local>,

    /// When the write finished (None if the run failed before that).
    pub completed_at: Option<DateTime<Local>>,

    pub status: RunStatus,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
