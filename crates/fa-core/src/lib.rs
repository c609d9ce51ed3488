//! fa-core: Shared types for the fallback agent
//!
//! This crate has zero internal crate dependencies and defines the
//! canonical types used across all other fa-* crates.

pub mod document;
pub mod label;
pub mod run;
pub mod task;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::document::Document;
    pub use crate::label::Label;
    pub use crate::run::{RunRecord, RunStatus};
    pub use crate::task::{Task, TaskError};
}
