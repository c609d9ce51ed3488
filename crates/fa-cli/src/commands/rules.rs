//! `--list-rules` — show the active profile's rule precedence.

use crate::cli::Cli;
use anyhow::Result;
use fa_core::label::Label;
use fa_runner::narrate::Narrator;
use serde_json::json;
use std::io::Write;

pub async fn run<W: Write>(cli: &Cli, narrator: &mut Narrator<W>) -> Result<()> {
    let compiler = cli.run_config().compiler().await?;
    let templates = compiler.templates();
    let fallback = templates.resolve(Label::Generic);

    if cli.json {
        let rules: Vec<_> = compiler
            .rules()
            .rules()
            .iter()
            .enumerate()
            .map(|(i, rule)| {
                json!({
                    "index": i + 1,
                    "label": rule.label,
                    "predicate": rule.predicate,
                    "filename": templates.resolve(rule.label).filename,
                })
            })
            .collect();
        let table = json!({
            "profile": cli.profile.name(),
            "rules": rules,
            "fallback": { "label": Label::Generic, "filename": fallback.filename },
        });
        narrator.emit(&serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    narrator.emit(&format!("Profile: {}", cli.profile));
    for (i, rule) in compiler.rules().rules().iter().enumerate() {
        narrator.emit(&format!(
            "  {:>2}. {:<16} {:<40} -> {}",
            i + 1,
            rule.label.as_str(),
            rule.predicate.to_string(),
            templates.resolve(rule.label).filename
        ));
    }
    narrator.emit(&format!(
        "   *. {:<16} {:<40} -> {}",
        Label::Generic.as_str(),
        "(no rule matched)",
        fallback.filename
    ));
    Ok(())
}
