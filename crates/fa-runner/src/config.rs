//! Run configuration — output location, profile, pacing and template overrides.

use crate::RunnerError;
use fa_compiler::classifier::RuleSet;
use fa_compiler::profile::{Narration, Profile};
use fa_compiler::template::TemplateRegistry;
use fa_compiler::Compiler;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_OUTPUT_DIR: &str = "sandbox";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Directory documents are written into. Relative paths resolve against
    /// the process working directory.
    pub output_dir: PathBuf,

    pub profile: Profile,

    /// Overrides the profile's per-step delay.
    #[serde(default)]
    pub step_delay: Option<Duration>,

    /// Directory holding replacement template bodies, named by filename.
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,

    /// Suppress narration; only errors and the final status line are printed.
    #[serde(default)]
    pub quiet: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            profile: Profile::default(),
            step_delay: None,
            templates_dir: None,
            quiet: false,
        }
    }
}

impl RunConfig {
    /// Narration for the active profile with the delay override applied.
    pub fn narration(&self) -> Narration {
        let mut narration = self.profile.narration();
        if let Some(delay) = self.step_delay {
            narration.step_delay = delay;
        }
        narration
    }

    /// Compiler for the active profile, with overrides applied and checked.
    pub async fn compiler(&self) -> Result<Compiler, RunnerError> {
        self.prepare(Compiler::for_profile(self.profile)).await
    }

    /// Compiler holding every built-in template and no rules.
    pub async fn diagnostic_compiler(&self) -> Result<Compiler, RunnerError> {
        self.prepare(Compiler::new(RuleSet::default(), TemplateRegistry::builtin()))
            .await
    }

    async fn prepare(&self, mut compiler: Compiler) -> Result<Compiler, RunnerError> {
        if let Some(dir) = &self.templates_dir {
            let applied = load_overrides(compiler.templates_mut(), dir).await?;
            tracing::info!(dir = %dir.display(), applied, "template overrides loaded");
        }
        compiler.check()?;
        Ok(compiler)
    }
}

/// Replace registered template bodies with `dir/<filename>` where such a
/// file exists. Returns how many bodies were replaced.
pub async fn load_overrides(
    registry: &mut TemplateRegistry,
    dir: &Path,
) -> Result<usize, RunnerError> {
    let meta = tokio::fs::metadata(dir)
        .await
        .map_err(|source| RunnerError::Templates {
            path: dir.to_path_buf(),
            source,
        })?;
    if !meta.is_dir() {
        return Err(RunnerError::Templates {
            path: dir.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a directory"),
        });
    }

    let targets: Vec<_> = registry
        .entries()
        .map(|e| (e.label, dir.join(e.filename.as_ref())))
        .collect();

    let mut applied = 0;
    for (label, path) in targets {
        match tokio::fs::read_to_string(&path).await {
            Ok(body) => {
                tracing::debug!(%label, path = %path.display(), "overriding template body");
                registry.override_body(label, body);
                applied += 1;
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => return Err(RunnerError::Templates { path, source }),
        }
    }
    Ok(applied)
}
