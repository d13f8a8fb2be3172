//! Output formatting for analysis results.
//!
//! This module provides the plain output formats: human-readable text,
//! single-line batch output, and CSV. The structured JSON/YAML report
//! lives in `structured_output`; the colored terminal report lives in
//! `styled_output`.

#![allow(dead_code)]

use std::io;

use crate::analysis::{AnalysisInput, AnalysisResult};

/// Output format options for the plain formatters.
#[derive(Debug, Clone)]
pub enum OutputFormat {
    /// Human-readable text format
    Text {
        /// Show the four sub-metrics
        show_metrics: bool,
        /// Show the cited source list
        show_sources: bool,
    },

    /// Batch format: data:verdict,confidence
    Batch,

    /// CSV format
    Csv {
        /// Include header row
        include_header: bool,
    },
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text {
            show_metrics: false,
            show_sources: false,
        }
    }
}

/// Output formatter trait, dyn-compatible.
pub trait OutputFormatter {
    /// Render the result to a string
    fn format_result(&self, input: &AnalysisInput, result: &AnalysisResult)
        -> io::Result<String>;

    /// Get the MIME type for this format
    fn mime_type(&self) -> &'static str;

    /// Get the file extension for this format
    fn file_extension(&self) -> &'static str;
}

/// Text output formatter
pub struct TextFormatter {
    show_metrics: bool,
    show_sources: bool,
}

impl TextFormatter {
    pub fn new(show_metrics: bool, show_sources: bool) -> Self {
        Self {
            show_metrics,
            show_sources,
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_result(
        &self,
        input: &AnalysisInput,
        result: &AnalysisResult,
    ) -> io::Result<String> {
        let mut output = String::new();

        output.push_str(&format!(
            "{} ({}): {} ({}% confidence)\n",
            input.data, input.kind, result.verdict, result.confidence
        ));

        if self.show_metrics {
            let m = &result.analysis;
            output.push_str(&format!(
                "  textual consistency: {}\n  source credibility: {}\n  metadata verification: {}\n  cross-reference check: {}\n",
                m.textual_consistency,
                m.source_credibility,
                m.metadata_verification,
                m.cross_reference_check
            ));
        }

        if self.show_sources {
            output.push_str("Sources consulted:\n");
            for source in &result.sources {
                output.push_str(&format!(
                    "  {} ({}, credibility {})\n",
                    source.name, source.status, source.credibility
                ));
            }
        }

        if let Some(ref description) = result.description {
            output.push_str(&format!(
                "Article: {} — {} [{}], published {}\n",
                description.publisher,
                description.headline,
                description.category,
                description.publish_date
            ));
        }

        output.push_str("Risk factors:\n");
        for risk in &result.risk_factors {
            output.push_str(&format!("  - {}\n", risk));
        }

        output.push_str("Recommendations:\n");
        for recommendation in &result.recommendations {
            output.push_str(&format!("  - {}\n", recommendation));
        }

        output.push_str(&format!(
            "Receipt: {} (block {})\n",
            result.blockchain.hash, result.blockchain.block
        ));

        Ok(output)
    }

    fn mime_type(&self) -> &'static str {
        "text/plain"
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }
}

/// Batch output formatter
pub struct BatchFormatter;

impl OutputFormatter for BatchFormatter {
    fn format_result(
        &self,
        input: &AnalysisInput,
        result: &AnalysisResult,
    ) -> io::Result<String> {
        Ok(format!(
            "{}:{},{}\n",
            input.data, result.verdict, result.confidence
        ))
    }

    fn mime_type(&self) -> &'static str {
        "text/plain"
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }
}

/// CSV output formatter
pub struct CsvFormatter {
    include_header: bool,
}

impl CsvFormatter {
    pub fn new(include_header: bool) -> Self {
        Self { include_header }
    }
}

impl OutputFormatter for CsvFormatter {
    fn format_result(
        &self,
        input: &AnalysisInput,
        result: &AnalysisResult,
    ) -> io::Result<String> {
        let mut output = String::new();

        if self.include_header {
            output.push_str(
                "data,kind,verdict,confidence,textual_consistency,source_credibility,metadata_verification,cross_reference_check,block\n",
            );
        }

        let m = &result.analysis;
        output.push_str(&format!(
            "{},{},{},{},{},{},{},{},{}\n",
            input.data,
            input.kind,
            result.verdict,
            result.confidence,
            m.textual_consistency,
            m.source_credibility,
            m.metadata_verification,
            m.cross_reference_check,
            result.blockchain.block
        ));

        Ok(output)
    }

    fn mime_type(&self) -> &'static str {
        "text/csv"
    }

    fn file_extension(&self) -> &'static str {
        "csv"
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(format: &OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text {
            show_metrics,
            show_sources,
        } => Box::new(TextFormatter::new(*show_metrics, *show_sources)),
        OutputFormat::Batch => Box::new(BatchFormatter),
        OutputFormat::Csv { include_header } => Box::new(CsvFormatter::new(*include_header)),
    }
}
