use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::cli::{Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{LangstatError, Result};
use crate::output::{ColorMode, OutputFormat};
use crate::ranking::BucketPolicy;

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from the filesystem.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or is invalid.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Effective settings after command-line flags are layered over the config.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ReportSettings {
    pub taxonomy: Option<PathBuf>,
    pub overrides: Vec<String>,
    pub ignore: Vec<String>,
    pub policy: BucketPolicy,
    pub format: OutputFormat,
    pub bar_svg: Option<PathBuf>,
    pub pie_svg: Option<PathBuf>,
}

impl ReportSettings {
    /// Merge `cli` into `config`. Config overrides come first so that
    /// command-line overrides win on conflicts.
    ///
    /// # Errors
    /// Returns `Config` if the merged ranking values are out of range.
    pub fn resolve(mut config: Config, cli: &Cli) -> Result<Self> {
        if let Some(policy) = cli.policy {
            config.ranking.policy = policy;
        }
        if let Some(top) = cli.top {
            config.ranking.top = top;
        }
        if let Some(threshold) = cli.threshold {
            config.ranking.threshold = threshold;
        }
        config.ranking.validate()?;

        let mut overrides = config.overrides;
        overrides.extend(cli.overrides.iter().cloned());

        Ok(Self {
            taxonomy: cli.taxonomy.clone().or(config.taxonomy),
            overrides,
            ignore: config.ignore,
            policy: config.ranking.bucket_policy(),
            format: cli.format.unwrap_or(config.output.format),
            bar_svg: cli.output_bar.clone().or(config.output.bar_svg),
            pie_svg: cli.output_pie.clone().or(config.output.pie_svg),
        })
    }
}

/// Open the numstat stream: a file when given, stdin otherwise.
///
/// # Errors
/// Returns `FileAccess` if the input file cannot be opened.
pub(crate) fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| LangstatError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(std::io::stdin().lock())),
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
