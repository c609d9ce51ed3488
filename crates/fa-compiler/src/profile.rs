//! Profiles — named rule tables plus narration settings.
//!
//! Each profile registers a subset of the built-in rules in a fixed order.
//! Every profile shares the same template registry and the same `Generic`
//! fallback.

use crate::classifier::RuleSet;
use fa_core::label::Label;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    #[default]
    Standard,
    Briefing,
    Recipes,
    Minimal,
}

/// How the driver narrates progress for a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    pub steps: u32,
    pub step_delay: Duration,
    /// Per-step status text, e.g. "Processing...".
    pub step_verb: &'static str,
    pub verbose: bool,
}

impl Profile {
    pub const ALL: [Profile; 4] = [
        Profile::Standard,
        Profile::Briefing,
        Profile::Recipes,
        Profile::Minimal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Profile::Standard => "standard",
            Profile::Briefing => "briefing",
            Profile::Recipes => "recipes",
            Profile::Minimal => "minimal",
        }
    }

    /// Labels registered by this profile, in precedence order.
    pub fn labels(&self) -> &'static [Label] {
        match self {
            Profile::Standard => &[
                Label::TechNews,
                Label::AiDevelopments,
                Label::PythonGuide,
                Label::Recipe,
            ],
            Profile::Briefing => &[Label::TechNews, Label::AiDevelopments, Label::PythonGuide],
            Profile::Recipes => &[Label::Recipe, Label::PythonGuide],
            Profile::Minimal => &[Label::Recipe],
        }
    }

    pub fn rules(&self) -> RuleSet {
        RuleSet::builtin(self.labels())
    }

    pub fn narration(&self) -> Narration {
        match self {
            Profile::Standard | Profile::Briefing => Narration {
                steps: 4,
                step_delay: Duration::from_millis(600),
                step_verb: "Processing...",
                verbose: true,
            },
            Profile::Recipes => Narration {
                steps: 3,
                step_delay: Duration::from_millis(800),
                step_verb: "Working...",
                verbose: true,
            },
            Profile::Minimal => Narration {
                steps: 3,
                step_delay: Duration::from_millis(1000),
                step_verb: "Working...",
                verbose: false,
            },
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Profile::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Profile::ALL.iter().map(|p| p.name()).collect();
                format!("unknown profile '{s}' (expected one of: {})", known.join(", "))
            })
    }
}
