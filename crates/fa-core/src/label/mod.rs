//! Label — the intent tag that selects a document template.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum Label {
    TechNews,
    AiDevelopments,
    PythonGuide,
    Recipe,
    /// Catch-all for tasks no rule matched.
    Generic,
    /// Self-test output. Never produced by classification.
    Diagnostic,
}

impl Label {
    pub const ALL: [Label; 6] = [
        Label::TechNews,
        Label::AiDevelopments,
        Label::PythonGuide,
        Label::Recipe,
        Label::Generic,
        Label::Diagnostic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::TechNews => "tech-news",
            Label::AiDevelopments => "ai-developments",
            Label::PythonGuide => "python-guide",
            Label::Recipe => "recipe",
            Label::Generic => "generic",
            Label::Diagnostic => "diagnostic",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serde_name() {
        for label in Label::ALL {
            let json = serde_json::to_string(&label).unwrap();
            assert_eq!(json, format!("\"{label}\""));
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = Label::ALL.iter().map(Label::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Label::ALL.len());
    }
}
