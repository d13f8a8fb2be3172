//! Shared analysis data structures consumed by the analyzer and the output
//! formatters.
//!
//! All types here are request-scoped value objects: constructed once,
//! never mutated, owned by the caller. They serialize with serde for the
//! structured output formats and carry JSON Schema derivations for
//! `--generate-schema`.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The four content categories the engine accepts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// An uploaded image, identified by file name.
    Image,
    /// A news article URL.
    News,
    /// A direct video URL.
    Video,
    /// A video-platform URL.
    Youtube,
}

impl ContentKind {
    /// Lowercase tag mixed into the content fingerprint.
    pub fn tag(&self) -> &'static str {
        match self {
            ContentKind::Image => "image",
            ContentKind::News => "news",
            ContentKind::Video => "video",
            ContentKind::Youtube => "youtube",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// What the caller submits for analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct AnalysisInput {
    /// Content category.
    pub kind: ContentKind,

    /// File name, URL, or raw text depending on `kind`.
    pub data: String,

    /// Submission time as an RFC 3339 / ISO-8601 string.
    pub timestamp: String,
}

impl AnalysisInput {
    pub fn new(kind: ContentKind, data: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            kind,
            data: data.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Binary authenticity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Authentic,
    Fake,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Verdict::Authentic => "authentic",
            Verdict::Fake => "fake",
        };
        f.write_str(s)
    }
}

/// A fact-checking or news entity cited in support of the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct SourceReference {
    /// Organization name.
    pub name: String,

    /// Fixed credibility score (0-100).
    pub credibility: u8,

    /// Verification status label.
    pub status: String,

    /// Home page, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Fabricated tamper-evidence receipt. A labeling convention, not a
/// ledger: plain value object with no consensus semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct BlockchainRecord {
    /// "0x"-prefixed, 40 hex digits derived from the content fingerprint.
    pub hash: String,

    /// Recording time, RFC 3339.
    pub timestamp: String,

    /// Synthetic block height in [500000, 999999].
    pub block: u32,
}

/// The four sub-scores backing the verdict, each in [0,100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct AnalysisMetrics {
    pub textual_consistency: u8,
    pub source_credibility: u8,
    pub metadata_verification: u8,
    pub cross_reference_check: u8,
}

/// Synthetic article description attached to news inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct NewsDescription {
    pub headline: String,
    pub summary: String,
    pub publisher: String,

    /// Calendar date (YYYY-MM-DD) within the last 30 days.
    pub publish_date: String,

    pub category: String,
    pub key_points: Vec<String>,
}

/// Full result of one analysis. Created fresh per request; the engine
/// holds no state between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct AnalysisResult {
    pub verdict: Verdict,

    /// Overall confidence in [65,95].
    pub confidence: u8,

    /// Prefix of the fixed reference-source catalog (3, 4, or 5 entries).
    pub sources: Vec<SourceReference>,

    pub blockchain: BlockchainRecord,

    pub analysis: AnalysisMetrics,

    /// Present if and only if the input kind was news.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<NewsDescription>,

    pub risk_factors: Vec<String>,

    pub recommendations: Vec<String>,
}
