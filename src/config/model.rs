use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{LangstatError, Result};
use crate::output::OutputFormat;
use crate::ranking::{BucketPolicy, DEFAULT_THRESHOLD, DEFAULT_TOP_N, PolicyKind};

/// Root configuration, read from `.langstat.toml` or the user config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the language taxonomy (linguist `languages.yml` or equivalent).
    #[serde(default)]
    pub taxonomy: Option<PathBuf>,

    /// `extension:Label` overrides, applied before command-line overrides.
    #[serde(default)]
    pub overrides: Vec<String>,

    /// Labels dropped from the totals in addition to the built-in list.
    #[serde(default)]
    pub ignore: Vec<String>,

    #[serde(default)]
    pub ranking: RankingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Check value ranges and override syntax.
    ///
    /// # Errors
    /// Returns `Config` describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        self.ranking.validate()?;
        if let Some(bad) = self.overrides.iter().find(|o| !o.contains(':')) {
            return Err(LangstatError::Config(format!(
                "override '{bad}' must have the form 'extension:Label'"
            )));
        }
        Ok(())
    }
}

/// `[ranking]`: how rows are bucketed into "Other".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RankingConfig {
    #[serde(default)]
    pub policy: PolicyKind,

    /// Rows kept individually by the `top-n` policy.
    #[serde(default = "default_top")]
    pub top: usize,

    /// Minimum share of the total kept by the `threshold` policy, in (0, 1).
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::default(),
            top: default_top(),
            threshold: default_threshold(),
        }
    }
}

impl RankingConfig {
    /// Check that `top` and `threshold` are usable.
    ///
    /// # Errors
    /// Returns `Config` if `top` is zero or `threshold` is outside (0, 1).
    pub fn validate(&self) -> Result<()> {
        if self.top == 0 {
            return Err(LangstatError::Config(
                "ranking.top must be at least 1".to_string(),
            ));
        }
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(LangstatError::Config(format!(
                "ranking.threshold must be between 0 and 1 (exclusive), got {}",
                self.threshold
            )));
        }
        Ok(())
    }

    #[must_use]
    pub const fn bucket_policy(&self) -> BucketPolicy {
        BucketPolicy::from_kind(self.policy, self.top, self.threshold)
    }
}

/// `[output]`: report format and chart destinations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Write the full log-scaled bar chart here.
    #[serde(default)]
    pub bar_svg: Option<PathBuf>,

    /// Write the pie chart here.
    #[serde(default)]
    pub pie_svg: Option<PathBuf>,
}

const fn default_top() -> usize {
    DEFAULT_TOP_N
}

const fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
