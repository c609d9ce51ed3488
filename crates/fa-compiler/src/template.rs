//! Template Registry — label → (filename, body) table of built-in documents.
//!
//! Bodies live as Markdown files under `templates/` and are compiled in.
//! A registry can have individual bodies replaced at runtime.

use fa_core::label::Label;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateEntry {
    pub label: Label,
    pub filename: Cow<'static, str>,
    pub body: Cow<'static, str>,
}

/// Built-in templates: (label, filename, body).
const BUILTIN: &[(Label, &str, &str)] = &[
    (
        Label::TechNews,
        "tech_news_briefing.md",
        include_str!("../templates/tech_news_briefing.md"),
    ),
    (
        Label::AiDevelopments,
        "ai_developments_report.md",
        include_str!("../templates/ai_developments_report.md"),
    ),
    (
        Label::PythonGuide,
        "python_guide.md",
        include_str!("../templates/python_guide.md"),
    ),
    (
        Label::Recipe,
        "banoffee.md",
        include_str!("../templates/banoffee.md"),
    ),
    (
        Label::Generic,
        "task_analysis.md",
        include_str!("../templates/task_analysis.md"),
    ),
    (
        Label::Diagnostic,
        "diagnostic_test.md",
        include_str!("../templates/diagnostic_test.md"),
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRegistry {
    entries: BTreeMap<Label, TemplateEntry>,
    /// Entry returned for labels with no template of their own.
    fallback: TemplateEntry,
}

impl TemplateRegistry {
    /// Registry holding every built-in template.
    pub fn builtin() -> Self {
        let mut entries = BTreeMap::new();
        for (label, filename, body) in BUILTIN {
            entries.insert(
                *label,
                TemplateEntry {
                    label: *label,
                    filename: Cow::Borrowed(*filename),
                    body: Cow::Borrowed(*body),
                },
            );
        }
        let fallback = entries
            .get(&Label::Generic)
            .cloned()
            .unwrap_or_else(generic_entry);
        Self { entries, fallback }
    }

    /// Registry restricted to the given labels. The generic template is
    /// always kept as the fallback.
    pub fn only(labels: &[Label]) -> Self {
        let mut registry = Self::builtin();
        registry
            .entries
            .retain(|label, _| *label == Label::Generic || labels.contains(label));
        registry
    }

    pub fn get(&self, label: Label) -> Option<&TemplateEntry> {
        self.entries.get(&label)
    }

    /// Template for `label`, or the generic template when none is registered.
    pub fn resolve(&self, label: Label) -> &TemplateEntry {
        match self.entries.get(&label) {
            Some(entry) => entry,
            None => {
                tracing::warn!(%label, "no template registered, using generic");
                &self.fallback
            }
        }
    }

    /// Replace the body of a registered template. Returns false if the label
    /// has no template.
    pub fn override_body(&mut self, label: Label, body: impl Into<String>) -> bool {
        let body: String = body.into();
        let Some(entry) = self.entries.get_mut(&label) else {
            return false;
        };
        entry.body = Cow::Owned(body);
        if label == Label::Generic {
            self.fallback = entry.clone();
        }
        true
    }

    pub fn entries(&self) -> impl Iterator<Item = &TemplateEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn generic_entry() -> TemplateEntry {
    TemplateEntry {
        label: Label::Generic,
        filename: Cow::Borrowed("task_analysis.md"),
        body: Cow::Borrowed(include_str!("../templates/task_analysis.md")),
    }
}
