//! Document — the synthesized artifact handed to the output sink.

use crate::label::Label;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Label the document was rendered for.
    pub label: Label,

    /// Target file name, fixed per label.
    pub filename: String,

    /// Fully substituted text body.
    pub content: String,
}

impl Document {
    /// Size of the body in bytes once written as UTF-8.
    pub fn byte_len(&self) -> usize {
        self.content.len()
    }
}
