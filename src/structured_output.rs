//! Structured output module for JSON and YAML serialization.
//!
//! Wraps the core `AnalysisResult` in a report envelope carrying tool
//! metadata and the analyzed input, so machine consumers get a stable,
//! versioned, schema-described document.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisInput, AnalysisResult, ContentKind};
use crate::clock::Clock;
use crate::errors::Result;

/// Root structure for all authentiscan output in structured formats
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct AnalysisReport {
    /// Tool version and metadata
    pub metadata: ReportMetadata,

    /// Input information that was analyzed
    pub input: InputInfo,

    /// The full analysis result
    pub result: AnalysisResult,
}

/// Tool metadata and versioning information
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct ReportMetadata {
    /// Tool name
    pub tool_name: String,

    /// Tool version
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: chrono::DateTime<chrono::Utc>,

    /// Schema version for this output format
    pub schema_version: String,
}

/// Information about what was analyzed
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct InputInfo {
    /// Content category
    pub kind: ContentKind,

    /// The submitted file name, URL, or text
    pub data: String,

    /// Submission timestamp supplied by the caller
    pub submitted_at: String,
}

impl AnalysisReport {
    /// Assemble a report around one analysis result.
    pub fn new(input: &AnalysisInput, result: AnalysisResult, clock: &dyn Clock) -> Self {
        Self {
            metadata: ReportMetadata {
                tool_name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                generated_at: clock.now(),
                schema_version: "1.0.0".to_string(),
            },
            input: InputInfo {
                kind: input.kind,
                data: input.data.clone(),
                submitted_at: input.timestamp.clone(),
            },
            result,
        }
    }

    /// Generate JSON schema for this output format
    pub fn generate_json_schema() -> Result<String> {
        let schema = schemars::schema_for!(AnalysisReport);
        Ok(serde_json::to_string_pretty(&schema)?)
    }

    /// Serialize to JSON
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        if pretty {
            Ok(serde_json::to_string_pretty(self)?)
        } else {
            Ok(serde_json::to_string(self)?)
        }
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
