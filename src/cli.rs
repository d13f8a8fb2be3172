use clap::{Parser, ValueEnum};

use crate::analysis::ContentKind;

/// Command-line interface definition.
/// Provides command-line options for running a content authenticity check.
///
/// Verbosity levels:
/// 0 - silent (only final output)
/// 1 - errors (default)
/// 2 - warnings + errors
/// 5 - trace/debug
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Run a simulated authenticity analysis on an image, article URL, or video URL"
)]
pub struct Cli {
    /// Content to analyze: a file name, URL, or raw text depending on --kind.
    #[arg(required_unless_present = "generate_schema")]
    pub data: Option<String>,

    /// Content category of the input.
    #[arg(long, value_enum, default_value_t = ContentKind::News)]
    pub kind: ContentKind,

    /// Submission timestamp override (RFC 3339); defaults to now.
    #[arg(long, value_name = "TIMESTAMP")]
    pub timestamp: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Verbosity level (0,1,2,5)
    #[arg(long, default_value_t = 1)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print the JSON schema for structured output and exit
    #[arg(long)]
    pub generate_schema: bool,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled human-readable report
    Text,
    /// Structured JSON report
    Json,
    /// Structured YAML report
    Yaml,
    /// Single line "data:verdict,confidence"
    Batch,
    /// Comma-separated values
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Batch => "batch",
            OutputFormat::Csv => "csv",
        };
        f.write_str(s)
    }
}

impl Cli {
    /// Parse CLI arguments from process args.
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Convenience: are we in very verbose/debug mode?
    pub fn is_trace(&self) -> bool {
        self.verbose >= 5
    }

    /// Should we show sub-metrics and internal values in plain output?
    pub fn show_internal(&self) -> bool {
        self.is_trace()
    }

    /// Are warning-level messages enabled?
    pub fn warn_enabled(&self) -> bool {
        self.verbose >= 2
    }

    /// Are error-level messages enabled?
    pub fn error_enabled(&self) -> bool {
        self.verbose >= 1
    }

    /// Structured formats bypass styled/plain rendering entirely.
    pub fn is_structured_output(&self) -> bool {
        matches!(self.output, OutputFormat::Json | OutputFormat::Yaml)
    }
}
