//! Configuration management for authentiscan.
//!
//! Settings layer in the usual order: built-in defaults, then environment
//! variables, then command-line arguments. The analysis formulas are
//! fixed; configuration only extends the classifier catalogs, adjusts the
//! baseline credibility for non-URL inputs, and sets output preferences.

#![allow(dead_code)]

use crate::analyzer::DEFAULT_BASELINE_SCORE;
use crate::errors::{AuthentiscanError, Result};

/// Main configuration structure for authentiscan.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Credibility scoring settings
    pub scoring: ScoringConfig,

    /// Output and rendering preferences
    pub output: OutputConfig,
}

/// Credibility scoring configuration
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Credibility assumed for inputs that carry no URL (images, videos)
    pub baseline_score: u8,

    /// Additional hosts treated as trusted, on top of the built-in catalog
    pub extra_trusted: Vec<String>,

    /// Additional host tokens treated as suspicious
    pub extra_suspicious: Vec<String>,
}

/// Output and rendering configuration
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Disable ANSI styling even on a terminal
    pub no_color: bool,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            baseline_score: DEFAULT_BASELINE_SCORE,
            extra_trusted: Vec::new(),
            extra_suspicious: Vec::new(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(score) = std::env::var("AUTHENTISCAN_BASELINE_SCORE") {
            if let Ok(value) = score.parse::<u8>() {
                config.scoring.baseline_score = value;
            }
        }

        if let Ok(list) = std::env::var("AUTHENTISCAN_EXTRA_TRUSTED") {
            config.scoring.extra_trusted = parse_list(&list);
        }

        if let Ok(list) = std::env::var("AUTHENTISCAN_EXTRA_SUSPICIOUS") {
            config.scoring.extra_suspicious = parse_list(&list);
        }

        if let Ok(flag) = std::env::var("AUTHENTISCAN_NO_COLOR") {
            config.output.no_color = flag.eq_ignore_ascii_case("true")
                || flag.eq_ignore_ascii_case("1")
                || flag.eq_ignore_ascii_case("yes");
        }

        config
    }

    /// Merge with CLI arguments, giving CLI precedence
    pub fn merge_with_cli(&mut self, cli: &crate::cli::Cli) {
        if cli.no_color {
            self.output.no_color = true;
        }
        if cli.pretty {
            self.output.pretty = true;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.scoring.baseline_score > 100 {
            return Err(AuthentiscanError::configuration(format!(
                "baseline score must be at most 100, got {}",
                self.scoring.baseline_score
            )));
        }

        for entry in self
            .scoring
            .extra_trusted
            .iter()
            .chain(&self.scoring.extra_suspicious)
        {
            if entry.chars().any(char::is_whitespace) {
                return Err(AuthentiscanError::configuration(format!(
                    "catalog entry '{entry}' must not contain whitespace"
                )));
            }
        }

        Ok(())
    }
}

/// Split a comma-separated list, trimming entries and dropping empties.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
