//! Command-line arguments.

use clap::Parser;
use fa_compiler::profile::Profile;
use fa_runner::config::DEFAULT_OUTPUT_DIR;
use fa_runner::RunConfig;
use std::path::PathBuf;
use std::time::Duration;

/// Turn a free-text task into a Markdown document in the output directory.
#[derive(Debug, Parser)]
#[command(name = "fallback-agent", version, about)]
pub struct Cli {
    /// Task text. Read from standard input when omitted.
    #[arg(value_name = "TASK")]
    pub task: Vec<String>,

    /// Directory the document is written into
    #[arg(long, env = "FALLBACK_AGENT_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Rule profile: standard, briefing, recipes or minimal
    #[arg(long, env = "FALLBACK_AGENT_PROFILE", default_value = "standard", value_parser = parse_profile)]
    pub profile: Profile,

    /// Delay after each progress step, overriding the profile's
    #[arg(long, env = "FALLBACK_AGENT_STEP_DELAY_MS")]
    pub step_delay_ms: Option<u64>,

    /// Directory of replacement template bodies, named by output filename
    #[arg(long, env = "FALLBACK_AGENT_TEMPLATES_DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Only print errors and the final SUCCESS/FAILED line
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the run record (or rule table) as JSON
    #[arg(long)]
    pub json: bool,

    /// Run the diagnostic self-test instead of classifying the task
    #[arg(long, conflicts_with = "list_rules")]
    pub diagnose: bool,

    /// Print the profile's rule table and exit
    #[arg(long)]
    pub list_rules: bool,
}

fn parse_profile(s: &str) -> Result<Profile, String> {
    s.parse()
}

impl Cli {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            output_dir: self.output_dir.clone(),
            profile: self.profile,
            step_delay: self.step_delay_ms.map(Duration::from_millis),
            templates_dir: self.templates_dir.clone(),
            quiet: self.quiet,
        }
    }
}
