//! Styled terminal output for analysis results using anstyle.
//!
//! Renders the verdict, confidence, sub-metrics, cited sources, article
//! description, risk factors, recommendations, and the blockchain receipt
//! as a colored report. Colors are disabled automatically outside a
//! terminal or when NO_COLOR is set.

use anstyle::{AnsiColor, Color, Style};
use std::fmt::Write;
use std::io::{self, Write as IoWrite};

use crate::analysis::{AnalysisInput, AnalysisResult, Verdict};

/// Style definitions for different UI elements
pub struct Styles {
    pub header: Style,
    pub subheader: Style,
    pub authentic: Style,
    pub fake: Style,
    pub warning: Style,
    pub info: Style,
    pub muted: Style,
    pub bold: Style,
    pub url: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            header: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Blue))),
            subheader: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
            authentic: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
            fake: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
            warning: Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Yellow))),
            info: Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))),
            muted: Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))),
            bold: Style::new().bold(),
            url: Style::new()
                .fg_color(Some(Color::Ansi(AnsiColor::Blue)))
                .underline(),
        }
    }
}

/// Styled output formatter for analysis results
pub struct StyledFormatter {
    styles: Styles,
    use_colors: bool,
}

impl Default for StyledFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl StyledFormatter {
    /// Create a new styled formatter
    pub fn new() -> Self {
        Self {
            styles: Styles::default(),
            use_colors: Self::should_use_colors(),
        }
    }

    /// Create a formatter without colors (for non-interactive use)
    pub fn without_colors() -> Self {
        Self {
            styles: Styles::default(),
            use_colors: false,
        }
    }

    /// Determine if colors should be used based on environment
    fn should_use_colors() -> bool {
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }

    /// Apply style to text if colors are enabled
    fn styled(&self, text: &str, style: &Style) -> String {
        if self.use_colors {
            format!("{}{}{}", style.render(), text, style.render_reset())
        } else {
            text.to_string()
        }
    }

    /// Render a 10-segment bar for a 0-100 score.
    fn score_bar(value: u8) -> String {
        let filled = usize::from(value.min(100)) / 10;
        format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
    }

    /// Format the full analysis report
    pub fn format_report(
        &self,
        input: &AnalysisInput,
        result: &AnalysisResult,
    ) -> Result<String, std::fmt::Error> {
        let mut out = String::new();

        writeln!(
            out,
            "{}",
            self.styled("── Authenticity Analysis ──", &self.styles.header)
        )?;
        writeln!(
            out,
            "{} {} ({})",
            self.styled("Input:", &self.styles.bold),
            input.data,
            input.kind
        )?;
        writeln!(out)?;

        let (verdict_style, verdict_label) = match result.verdict {
            Verdict::Authentic => (&self.styles.authentic, "AUTHENTIC"),
            Verdict::Fake => (&self.styles.fake, "LIKELY FAKE"),
        };
        writeln!(
            out,
            "{} {} {}",
            self.styled("Verdict:", &self.styles.bold),
            self.styled(verdict_label, verdict_style),
            self.styled(
                &format!("({}% confidence)", result.confidence),
                &self.styles.muted
            )
        )?;
        writeln!(out)?;

        writeln!(out, "{}", self.styled("Metrics", &self.styles.subheader))?;
        let m = &result.analysis;
        for (label, value) in [
            ("Textual consistency", m.textual_consistency),
            ("Source credibility", m.source_credibility),
            ("Metadata verification", m.metadata_verification),
            ("Cross-reference check", m.cross_reference_check),
        ] {
            writeln!(
                out,
                "  {:<22} {} {:>3}",
                label,
                self.styled(&Self::score_bar(value), &self.styles.info),
                value
            )?;
        }
        writeln!(out)?;

        if let Some(ref description) = result.description {
            writeln!(out, "{}", self.styled("Article", &self.styles.subheader))?;
            writeln!(
                out,
                "  {} — {}",
                self.styled(&description.publisher, &self.styles.bold),
                description.headline
            )?;
            writeln!(
                out,
                "  {}",
                self.styled(
                    &format!("{} · {}", description.category, description.publish_date),
                    &self.styles.muted
                )
            )?;
            writeln!(out, "  {}", description.summary)?;
            for point in &description.key_points {
                writeln!(out, "    • {}", point)?;
            }
            writeln!(out)?;
        }

        writeln!(
            out,
            "{}",
            self.styled("Sources consulted", &self.styles.subheader)
        )?;
        for source in &result.sources {
            let url = source.url.as_deref().unwrap_or("");
            writeln!(
                out,
                "  {} ({}, credibility {})  {}",
                self.styled(&source.name, &self.styles.bold),
                source.status,
                source.credibility,
                self.styled(url, &self.styles.url)
            )?;
        }
        writeln!(out)?;

        writeln!(
            out,
            "{}",
            self.styled("Risk factors", &self.styles.subheader)
        )?;
        for risk in &result.risk_factors {
            writeln!(out, "  {} {}", self.styled("!", &self.styles.warning), risk)?;
        }
        writeln!(out)?;

        writeln!(
            out,
            "{}",
            self.styled("Recommendations", &self.styles.subheader)
        )?;
        for recommendation in &result.recommendations {
            writeln!(out, "  - {}", recommendation)?;
        }
        writeln!(out)?;

        writeln!(
            out,
            "{} {} {}",
            self.styled("Receipt:", &self.styles.bold),
            result.blockchain.hash,
            self.styled(
                &format!(
                    "(block {}, {})",
                    result.blockchain.block, result.blockchain.timestamp
                ),
                &self.styles.muted
            )
        )?;

        Ok(out)
    }

    /// Format and print the report to stdout
    pub fn print_report(&self, input: &AnalysisInput, result: &AnalysisResult) -> io::Result<()> {
        let report = self
            .format_report(input, result)
            .map_err(io::Error::other)?;
        io::stdout().write_all(report.as_bytes())
    }
}
