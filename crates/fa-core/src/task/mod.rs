//! Task — the free-text instruction handed to the pipeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("No task provided")]
    Empty,
}

/// A validated, non-blank task string.
///
/// The original text is kept exactly as supplied; only matching works on a
/// lowercased copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Task(String);

impl Task {
    /// Validate raw input. Blank and whitespace-only text is rejected.
    pub fn new(raw: impl Into<String>) -> Result<Self, TaskError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(TaskError::Empty);
        }
        Ok(Self(raw))
    }

    /// Build a task from command-line words, joined with single spaces.
    pub fn from_words<I, S>(words: I) -> Result<Self, TaskError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = words
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        Self::new(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form used by rule predicates.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Task {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Task {
    type Error = TaskError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Task> for String {
    fn from(task: Task) -> Self {
        task.0
    }
}
