use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::logging::DEFAULT_LOG_LEVEL;
use crate::output::OutputFormat;
use crate::ranking::PolicyKind;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "langstat")]
#[command(author, version, about = "Lines of code written per language, from git history")]
#[command(long_about = "Aggregate `git log --format=\"\" --numstat` output into per-language \
    line counts.\n\n\
    Example:\n  \
    git log --format=\"\" --numstat | langstat --output-pie pie.svg\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Malformed history input\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Extra `extension:Label` overrides, e.g. `lock:skip tpl:HTML`
    pub overrides: Vec<String>,

    /// Read numstat history from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Language taxonomy file (linguist languages.yml, or .json/.toml)
    #[arg(short, long)]
    pub taxonomy: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Log level (error, warn, info, debug, trace); `RUST_LOG` takes precedence
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log: String,

    /// Only log errors and hide the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// How rows are grouped into "Other"
    #[arg(long, value_enum)]
    pub policy: Option<PolicyKind>,

    /// Rows kept by the top-n policy
    #[arg(long)]
    pub top: Option<usize>,

    /// Minimum share of the total kept by the threshold policy (0.0-1.0)
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Write the full log-scaled bar chart (SVG) here
    #[arg(long, value_name = "FILE")]
    pub output_bar: Option<PathBuf>,

    /// Write the pie chart (SVG) here
    #[arg(long, value_name = "FILE")]
    pub output_pie: Option<PathBuf>,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
