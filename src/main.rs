mod analysis;
mod analyzer;
mod cli;
mod clock;
mod config;
mod domain;
mod errors;
mod fingerprint;
mod narrative;
mod output;
mod structured_output;
mod styled_output;

use chrono::{DateTime, SecondsFormat, Utc};

use analysis::{AnalysisInput, ContentKind};
use analyzer::{Analyzer, PIPELINE_STAGES};
use cli::{Cli, OutputFormat};
use clock::{Clock, SystemClock};
use config::Config;
use errors::AuthentiscanError;
use output::OutputFormat as PlainFormat;
use structured_output::AnalysisReport;
use styled_output::StyledFormatter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::from_args();

    // Handle schema generation early exit
    if cli.generate_schema {
        match AnalysisReport::generate_json_schema() {
            Ok(schema) => {
                println!("{}", schema);
                return Ok(());
            }
            Err(e) => {
                eprintln!("Error generating JSON schema: {}", e);
                return Ok(());
            }
        }
    }

    // Load configuration
    let mut config = Config::from_env();
    config.merge_with_cli(&cli);

    if let Err(e) = config.validate() {
        if cli.error_enabled() {
            eprintln!("Configuration error: {}", e);
        }
        return Ok(());
    }

    let data = cli
        .data
        .clone()
        .ok_or_else(|| AuthentiscanError::internal("clap enforces DATA without --generate-schema"))?;

    // Submission timestamp: explicit override or now.
    let timestamp = match cli.timestamp {
        Some(ref raw) => DateTime::parse_from_rfc3339(raw)
            .map_err(|e| AuthentiscanError::invalid_timestamp(raw.clone(), e.to_string()))?
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Secs, true),
        None => SystemClock.now().to_rfc3339_opts(SecondsFormat::Secs, true),
    };

    let input = AnalysisInput::new(cli.kind, data, timestamp);

    if cli.warn_enabled()
        && input.kind == ContentKind::News
        && domain::extract_host(&input.data) == domain::UNKNOWN_HOST
    {
        eprintln!(
            "Warning: '{}' is not a parsable URL; scoring in the default credibility band",
            input.data
        );
    }

    if cli.is_trace() {
        eprintln!("Analyzing {} input: {}", input.kind, input.data);
        for (stage, detail) in PIPELINE_STAGES {
            eprintln!("[stage] {stage}: {detail}");
        }
    }

    let analyzer = Analyzer::from_config(&config);
    let result = analyzer.analyze(&input);

    // Structured output formats bypass styled/plain rendering
    if cli.is_structured_output() {
        let report = AnalysisReport::new(&input, result, &SystemClock);
        let formatted = match cli.output {
            OutputFormat::Json => report.to_json(config.output.pretty)?,
            OutputFormat::Yaml => report.to_yaml()?,
            _ => unreachable!(),
        };
        println!("{}", formatted);
        return Ok(());
    }

    match cli.output {
        OutputFormat::Text => {
            let formatter = if config.output.no_color {
                StyledFormatter::without_colors()
            } else {
                StyledFormatter::new()
            };
            if let Err(e) = formatter.print_report(&input, &result) {
                eprintln!("Error formatting styled output: {}", e);
                // Fall back to plain text output
                let plain = output::create_formatter(&PlainFormat::Text {
                    show_metrics: cli.show_internal(),
                    show_sources: cli.show_internal(),
                });
                let text = plain.format_result(&input, &result).map_err(|e| {
                    AuthentiscanError::serialization("text", e)
                })?;
                print!("{}", text);
            }
        }
        OutputFormat::Batch => {
            let formatter = output::create_formatter(&PlainFormat::Batch);
            let text = formatter
                .format_result(&input, &result)
                .map_err(|e| AuthentiscanError::serialization("batch", e))?;
            print!("{}", text);
        }
        OutputFormat::Csv => {
            let formatter = output::create_formatter(&PlainFormat::Csv {
                include_header: true,
            });
            let text = formatter
                .format_result(&input, &result)
                .map_err(|e| AuthentiscanError::serialization("csv", e))?;
            print!("{}", text);
        }
        OutputFormat::Json | OutputFormat::Yaml => unreachable!(),
    }

    Ok(())
}
