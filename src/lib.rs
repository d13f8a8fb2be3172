//! Authentiscan Library
//!
//! A Rust library for simulated content-authenticity analysis. Given an
//! image file name, article URL, or video URL, it deterministically
//! derives an authenticity verdict with confidence score, supporting
//! metrics, a cited source list, and a fabricated blockchain receipt.
//! This library provides functionality to:
//!
//! - Fingerprint arbitrary input text into a stable integer
//! - Classify a URL's host credibility via trusted/suspicious catalogs
//! - Generate a plausible article description for news URLs
//! - Synthesize the full verdict record from fingerprint and domain score
//!
//! There is no network access, no real model, and no persistence: every
//! value in a result is derived from the input alone, so repeated calls
//! with the same input are identical (timestamps aside).
//!
//! # Example
//!
//! ```rust
//! use authentiscan::analysis::{AnalysisInput, ContentKind};
//! use authentiscan::analyzer::Analyzer;
//!
//! let analyzer = Analyzer::new();
//! let input = AnalysisInput::new(
//!     ContentKind::News,
//!     "https://reuters.com/world/story123",
//!     "2024-01-01T00:00:00Z",
//! );
//! let result = analyzer.analyze(&input);
//!
//! assert!(result.confidence >= 65 && result.confidence <= 95);
//! assert!(result.description.is_some());
//! ```

// Re-export all modules for library use
pub mod analysis;
pub mod analyzer;
pub mod cli;
pub mod clock;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fingerprint;
pub mod narrative;
pub mod output;
pub mod structured_output;
pub mod styled_output;

// Re-export commonly used types and functions for convenience
pub use analysis::{AnalysisInput, AnalysisResult, ContentKind, Verdict};
pub use analyzer::Analyzer;
pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::{extract_host, DomainClassifier};
pub use errors::{AuthentiscanError, Result};
pub use fingerprint::fingerprint;
pub use structured_output::AnalysisReport;
pub use styled_output::StyledFormatter;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
