//! Slot Filler — substitute `{{name}}` insertion points in a template body.

use chrono::NaiveDateTime;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

pub const DATE: &str = "date";
pub const DATETIME: &str = "datetime";
pub const TASK: &str = "task";
pub const WORKING_DIR: &str = "working_dir";
pub const OUTPUT_DIR: &str = "output_dir";

/// Slots every synthesized document can use.
pub const STANDARD_SLOTS: &[&str] = &[DATE, DATETIME, TASK];

/// Extra slots the driver supplies for the diagnostic document.
pub const DIAGNOSTIC_SLOTS: &[&str] = &[WORKING_DIR, OUTPUT_DIR];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slots {
    pub values: BTreeMap<String, String>,
}

impl Slots {
    /// The standard slots: date, full timestamp and the verbatim task.
    pub fn for_task(task: &str, now: NaiveDateTime) -> Self {
        let mut slots = Slots::default();
        slots.insert(DATE, now.format("%Y-%m-%d").to_string());
        slots.insert(DATETIME, now.format("%Y-%m-%d %H:%M:%S").to_string());
        slots.insert(TASK, task);
        slots
    }

    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder pattern is valid")
    })
}

/// Names of all insertion points in a template body, in order of first use.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in placeholder_re().captures_iter(template) {
        let name = caps[1].to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// Fill every insertion point in one pass. Inserted values are not
/// rescanned; placeholders with no slot value stay as written.
pub fn fill(template: &str, slots: &Slots) -> String {
    placeholder_re()
        .replace_all(template, |caps: &Captures| match slots.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => {
                tracing::warn!(slot = &caps[1], "template placeholder has no value");
                caps[0].to_string()
            }
        })
        .into_owned()
}
