//! Task Classifier — ordered rule table mapping keyword predicates to labels.

use fa_core::label::Label;
use fa_core::task::Task;
use serde::{Deserialize, Serialize};

/// Boolean combination of substring tests over the lowercased task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    Contains(String),
    All(Vec<Predicate>),
    Any(Vec<Predicate>),
}

impl Predicate {
    /// Evaluate against text that is already lowercased.
    pub fn matches(&self, lower: &str) -> bool {
        match self {
            Predicate::Contains(needle) => lower.contains(needle.as_str()),
            Predicate::All(parts) => parts.iter().all(|p| p.matches(lower)),
            Predicate::Any(parts) => parts.iter().any(|p| p.matches(lower)),
        }
    }

    fn is_leaf(&self) -> bool {
        matches!(self, Predicate::Contains(_))
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (parts, joiner) = match self {
            Predicate::Contains(needle) => return write!(f, "{needle:?}"),
            Predicate::All(parts) => (parts, " AND "),
            Predicate::Any(parts) => (parts, " OR "),
        };
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                f.write_str(joiner)?;
            }
            if part.is_leaf() {
                write!(f, "{part}")?;
            } else {
                write!(f, "({part})")?;
            }
        }
        Ok(())
    }
}

/// Substring test. Needles are lowercased so they compare against the normalized task.
pub fn contains(needle: &str) -> Predicate {
    Predicate::Contains(needle.to_lowercase())
}

pub fn all<I: IntoIterator<Item = Predicate>>(parts: I) -> Predicate {
    Predicate::All(parts.into_iter().collect())
}

pub fn any<I: IntoIterator<Item = Predicate>>(parts: I) -> Predicate {
    Predicate::Any(parts.into_iter().collect())
}

fn contains_any(keywords: &[&str]) -> Predicate {
    any(keywords.iter().map(|kw| contains(kw)))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rule {
    pub label: Label,
    pub predicate: Predicate,
}

impl Rule {
    pub fn new(label: Label, predicate: Predicate) -> Self {
        Self { label, predicate }
    }

    /// The built-in keyword rule for a topic label. `Generic` and
    /// `Diagnostic` have none.
    pub fn builtin(label: Label) -> Option<Rule> {
        let predicate = match label {
            Label::TechNews => all([contains("technology"), contains("news")]),
            Label::AiDevelopments => {
                all([contains("ai"), contains_any(&["development", "news"])])
            }
            Label::PythonGuide => contains("python"),
            Label::Recipe => contains_any(&["banoffee", "recipe"]),
            Label::Generic | Label::Diagnostic => return None,
        };
        Some(Rule::new(label, predicate))
    }
}

/// Ordered rule table. The first satisfied rule wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Built-in rules for the given labels, in the given order.
    pub fn builtin(labels: &[Label]) -> Self {
        Self::new(labels.iter().copied().filter_map(Rule::builtin).collect())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Labels this table can produce, including the `Generic` fallback.
    pub fn labels(&self) -> Vec<Label> {
        let mut labels: Vec<Label> = self.rules.iter().map(|r| r.label).collect();
        labels.push(Label::Generic);
        labels.dedup();
        labels
    }

    /// Position and rule of the first match, if any.
    pub fn matching(&self, task: &str) -> Option<(usize, &Rule)> {
        let lower = task.to_lowercase();
        let found = self
            .rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.predicate.matches(&lower));
        match found {
            Some((index, rule)) => {
                tracing::debug!(index, label = %rule.label, "classification rule matched");
            }
            None => tracing::debug!(rules = self.rules.len(), "no rule matched"),
        }
        found
    }

    /// Label of the first matching rule, or `Generic`.
    pub fn classify(&self, task: &Task) -> Label {
        self.classify_str(task.as_str())
    }

    pub fn classify_str(&self, task: &str) -> Label {
        self.matching(task)
            .map(|(_, rule)| rule.label)
            .unwrap_or(Label::Generic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> RuleSet {
        RuleSet::builtin(&[
            Label::TechNews,
            Label::AiDevelopments,
            Label::PythonGuide,
            Label::Recipe,
        ])
    }

    #[test]
    fn classify_tech_news() {
        assert_eq!(
            standard().classify_str("Give me a technology news briefing"),
            Label::TechNews
        );
    }

    #[test]
    fn classify_recipe() {
        assert_eq!(standard().classify_str("banoffee pie recipe please"), Label::Recipe);
        assert_eq!(standard().classify_str("a RECIPE for soup"), Label::Recipe);
    }

    #[test]
    fn classify_unknown_is_generic() {
        let rules = standard();
        assert_eq!(rules.classify_str("tell me about quantum gravity"), Label::Generic);
        assert_eq!(rules.classify_str("xyzzy-no-match-keywords"), Label::Generic);
    }

    #[test]
    fn ai_needs_development_or_news() {
        let rules = standard();
        assert_eq!(rules.classify_str("latest AI developments"), Label::AiDevelopments);
        assert_eq!(rules.classify_str("AI news today"), Label::AiDevelopments);
        assert_eq!(rules.classify_str("an ai haiku"), Label::Generic);
    }

    #[test]
    fn earlier_rule_wins() {
        let rules = standard();
        // Satisfies tech-news, ai-developments and python-guide.
        let task = "technology news about AI and Python";
        assert_eq!(rules.classify_str(task), Label::TechNews);
        assert_eq!(rules.matching(task).map(|(i, _)| i), Some(0));

        // Same rules, reversed order: the other way round.
        let mut reversed = rules.rules().to_vec();
        reversed.reverse();
        let reversed = RuleSet::new(reversed);
        assert_eq!(reversed.classify_str(task), Label::PythonGuide);
    }

    #[test]
    fn classification_is_repeatable() {
        let rules = standard();
        let task = "python recipe with ai news";
        let first = rules.classify_str(task);
        for _ in 0..10 {
            assert_eq!(rules.classify_str(task), first);
        }
    }

    #[test]
    fn empty_table_always_generic() {
        let rules = RuleSet::default();
        assert!(rules.is_empty());
        assert_eq!(rules.classify_str("technology news"), Label::Generic);
        assert_eq!(rules.labels(), vec![Label::Generic]);
    }

    #[test]
    fn predicate_display() {
        let ai = Rule::builtin(Label::AiDevelopments).unwrap();
        assert_eq!(
            ai.predicate.to_string(),
            r#""ai" AND ("development" OR "news")"#
        );
    }

    #[test]
    fn rule_table_from_json() {
        let json = r#"[{"label":"recipe","predicate":{"contains":"scone"}}]"#;
        let rules: Vec<Rule> = serde_json::from_str(json).unwrap();
        let set = RuleSet::new(rules);
        assert_eq!(set.classify_str("Cheese scones"), Label::Recipe);
    }
}
