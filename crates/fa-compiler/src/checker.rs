//! Catalog Checker — verify rules and templates fit together before a run.

use crate::classifier::RuleSet;
use crate::slot_filler::{placeholders, DIAGNOSTIC_SLOTS, STANDARD_SLOTS};
use crate::template::{TemplateEntry, TemplateRegistry};
use crate::CompilerError;
use fa_core::label::Label;

/// Validate that every label the rules can produce has its own template and
/// that every template only uses slots the synthesizer provides.
pub fn check(rules: &RuleSet, templates: &TemplateRegistry) -> Result<(), CompilerError> {
    for label in rules.labels() {
        if templates.get(label).is_none() {
            return Err(CompilerError::MissingTemplate(label));
        }
    }

    for entry in templates.entries() {
        check_entry(entry)?;
    }

    Ok(())
}

/// Check one template's insertion points against the slots available to its label.
pub fn check_entry(entry: &TemplateEntry) -> Result<(), CompilerError> {
    for name in placeholders(&entry.body) {
        if !slot_available(entry.label, &name) {
            return Err(CompilerError::UnknownSlot {
                filename: entry.filename.to_string(),
                slot: name,
            });
        }
    }
    Ok(())
}

fn slot_available(label: Label, name: &str) -> bool {
    STANDARD_SLOTS.contains(&name)
        || (label == Label::Diagnostic && DIAGNOSTIC_SLOTS.contains(&name))
}
