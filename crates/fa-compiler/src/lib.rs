//! fa-compiler: Task → Document compiler
//!
//! Pipeline: Classifier → TemplateRegistry → SlotFiller.
//! Tasks no rule matches are rendered with the generic template.

pub mod checker;
pub mod classifier;
pub mod profile;
pub mod slot_filler;
pub mod template;

use chrono::NaiveDateTime;
use classifier::RuleSet;
use fa_core::document::Document;
use fa_core::label::Label;
use fa_core::task::Task;
use profile::Profile;
use slot_filler::Slots;
use template::TemplateRegistry;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompilerError {
    #[error("no template registered for label '{0}'")]
    MissingTemplate(Label),
    #[error("template {filename} uses unknown slot '{{{{{slot}}}}}'")]
    UnknownSlot { filename: String, slot: String },
}

/// A rule table and template registry bound together. Read-only once built,
/// so one instance can serve any number of tasks.
#[derive(Debug, Clone)]
pub struct Compiler {
    rules: RuleSet,
    templates: TemplateRegistry,
}

impl Compiler {
    pub fn new(rules: RuleSet, templates: TemplateRegistry) -> Self {
        Self { rules, templates }
    }

    /// Rules and templates registered by a profile.
    pub fn for_profile(profile: Profile) -> Self {
        Self::new(profile.rules(), TemplateRegistry::only(profile.labels()))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    pub fn templates_mut(&mut self) -> &mut TemplateRegistry {
        &mut self.templates
    }

    /// Validate the rule/template pairing.
    pub fn check(&self) -> Result<(), CompilerError> {
        checker::check(&self.rules, &self.templates)
    }

    pub fn classify(&self, task: &Task) -> Label {
        self.rules.classify(task)
    }

    /// Render the template for `label` with the standard slots.
    pub fn synthesize(&self, label: Label, task: &Task, now: NaiveDateTime) -> Document {
        self.synthesize_with(label, Slots::for_task(task.as_str(), now))
    }

    /// Render the template for `label` with caller-supplied slots.
    pub fn synthesize_with(&self, label: Label, slots: Slots) -> Document {
        let entry = self.templates.resolve(label);
        Document {
            label: entry.label,
            filename: entry.filename.to_string(),
            content: slot_filler::fill(&entry.body, &slots),
        }
    }

    /// Classify then synthesize.
    pub fn compile(&self, task: &Task, now: NaiveDateTime) -> Document {
        let label = self.classify(task);
        tracing::info!(%label, "task classified");
        self.synthesize(label, task, now)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::for_profile(Profile::default())
    }
}

/// Classify a task with the standard rule table.
pub fn classify(task: &Task) -> Label {
    Profile::Standard.rules().classify(task)
}

/// Render a label's built-in template.
pub fn synthesize(label: Label, task: &Task, now: NaiveDateTime) -> Document {
    Compiler::new(RuleSet::default(), TemplateRegistry::builtin()).synthesize(label, task, now)
}

/// Compile a task into a document with the standard profile.
pub fn compile(task: &Task, now: NaiveDateTime) -> Document {
    Compiler::default().compile(task, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 14)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn task(text: &str) -> Task {
        Task::new(text).unwrap()
    }

    #[test]
    fn tech_news_scenario() {
        let doc = compile(&task("Give me a technology news briefing"), at(9, 0, 0));
        assert_eq!(doc.label, Label::TechNews);
        assert_eq!(doc.filename, "tech_news_briefing.md");
        assert!(doc.content.starts_with("# Technology News Briefing - 2025-06-14\n"));
        for section in [
            "AI Development Updates",
            "Software Development Trends",
            "Hardware Innovations",
            "Cybersecurity Focus",
            "Emerging Technologies",
        ] {
            assert!(doc.content.contains(section), "missing section {section}");
        }
        assert!(!doc.content.contains("{{"));
    }

    #[test]
    fn recipe_scenario() {
        let doc = compile(&task("banoffee pie recipe please"), at(9, 0, 0));
        assert_eq!(doc.label, Label::Recipe);
        assert_eq!(doc.filename, "banoffee.md");
        assert!(doc.content.contains("## Ingredients"));
        assert!(doc.content.contains("digestive biscuits"));
        assert!(doc.content.contains("condensed milk"));
    }

    #[test]
    fn generic_scenario_embeds_task() {
        let doc = compile(&task("tell me about quantum gravity"), at(9, 0, 0));
        assert_eq!(doc.label, Label::Generic);
        assert_eq!(doc.filename, "task_analysis.md");
        assert!(doc
            .content
            .contains("**Original Request**: tell me about quantum gravity"));
        assert!(doc.content.contains("**Generated**: 2025-06-14\n"));
    }

    #[test]
    fn generic_keeps_unicode_and_case() {
        let text = "Résumé für Zoë 🚀 {{date}}";
        let doc = synthesize(Label::Generic, &task(text), at(1, 2, 3));
        assert!(doc.content.contains(text));
    }

    #[test]
    fn synthesis_is_deterministic() {
        let t = task("latest AI developments");
        let first = synthesize(Label::AiDevelopments, &t, at(10, 30, 0));
        let second = synthesize(Label::AiDevelopments, &t, at(10, 30, 0));
        assert_eq!(first, second);
    }

    #[test]
    fn filename_depends_only_on_label() {
        let a = synthesize(Label::PythonGuide, &task("python basics"), at(1, 0, 0));
        let b = synthesize(Label::PythonGuide, &task("advanced PYTHON"), at(23, 59, 59));
        assert_eq!(a.filename, b.filename);
        assert_eq!(a.filename, "python_guide.md");
    }

    #[test]
    fn topic_templates_ignore_task_body() {
        let a = synthesize(Label::Recipe, &task("banoffee"), at(1, 0, 0));
        let b = synthesize(Label::Recipe, &task("any recipe at all"), at(1, 0, 0));
        assert_eq!(a.content, b.content);
    }

    #[test]
    fn unregistered_label_falls_back_to_generic() {
        let compiler = Compiler::for_profile(Profile::Minimal);
        let doc = compiler.synthesize(Label::TechNews, &task("technology news"), at(8, 0, 0));
        assert_eq!(doc.label, Label::Generic);
        assert_eq!(doc.filename, "task_analysis.md");
        assert!(doc.content.contains("technology news"));
    }

    #[test]
    fn profile_compiler_checks_clean() {
        for profile in Profile::ALL {
            Compiler::for_profile(profile).check().unwrap();
        }
    }

    #[test]
    fn synthesize_with_extra_slots() {
        let compiler = Compiler::new(RuleSet::default(), TemplateRegistry::builtin());
        let slots = Slots::for_task("test task", at(12, 0, 0))
            .with(slot_filler::WORKING_DIR, "/work")
            .with(slot_filler::OUTPUT_DIR, "/work/sandbox");
        let doc = compiler.synthesize_with(Label::Diagnostic, slots);
        assert_eq!(doc.filename, "diagnostic_test.md");
        assert!(doc.content.contains("- Task: test task"));
        assert!(doc.content.contains("- Working Directory: /work\n"));
        assert!(doc.content.contains("- Sandbox Path: /work/sandbox\n"));
        assert!(doc.content.contains("- Timestamp: 2025-06-14 12:00:00"));
    }
}
