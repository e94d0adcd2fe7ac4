//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for session results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Only the final report
    Report,
    /// Per-phase breakdown with models, timings and fallback markers
    Full,
    /// JSON output
    Json,
}

impl From<OutputFormat> for ideaforge_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Report => ideaforge_domain::OutputFormat::Report,
            OutputFormat::Full => ideaforge_domain::OutputFormat::Full,
            OutputFormat::Json => ideaforge_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for ideaforge
#[derive(Parser, Debug)]
#[command(name = "ideaforge")]
#[command(
    author,
    version,
    about = "Multi-phase ideation with creative, logical and reasoning agents"
)]
#[command(long_about = r#"
ideaforge develops a request into a structured ideation report by running
three personas (creative, logical, reasoning) through four time-boxed phases:

1. Foundation:  each persona contributes once, in a fixed order
2. Expansion:   personas take random turns until the phase budget runs out
3. Refinement:  each persona critiques and improves, in a fixed order
4. Synthesis:   the reasoning persona writes the final report

A failed or timed-out call never stops the session; it is replaced with a
local fallback and the session continues.

Configuration files are loaded from (in priority order):
1. IDEAFORGE_* environment variables (e.g. IDEAFORGE_PHASES__EXPANSION_BUDGET_SECS=30)
2. --config <path>          Explicit config file
3. ./ideaforge.toml         Project-level config
4. ~/.config/ideaforge/config.toml   Global config

Example:
  ideaforge "sustainable urban transport"
  ideaforge -o full --expansion-budget-secs 30 "onboarding for a developer tool"
  ideaforge --context chat.json -o json "follow-up ideas"
"#)]
pub struct Cli {
    /// The request to develop (not required with --show-config)
    pub prompt: Option<String>,

    /// Output format [default: report, or [output].format from config]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Seed persona and model selection for a reproducible schedule
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// JSON file with prior conversation turns: [{"role": "user", "content": "..."}]
    #[arg(long, value_name = "PATH")]
    pub context: Option<PathBuf>,

    /// Override the expansion phase budget
    #[arg(long, value_name = "SECS")]
    pub expansion_budget_secs: Option<u64>,

    /// Override the session budget used for the early exit (0 disables it)
    #[arg(long, value_name = "SECS")]
    pub session_budget_secs: Option<u64>,

    /// Mirror diagnostic logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Append a JSONL transcript of every agent call
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Disable the response cache
    #[arg(long)]
    pub no_cache: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
