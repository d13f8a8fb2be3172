//! Unified error handling for authentiscan.
//!
//! The analysis core itself is total: any well-formed input produces a
//! result, and unparsable URLs are absorbed by the domain classifier's
//! sentinel host. The variants here cover the shell around the core —
//! configuration loading, timestamp overrides, and output serialization —
//! modeled as a `thiserror` enum with:
//!   * Typed variants for the failure domains that exist
//!   * A categorization layer (`ErrorCategory`) for structured reporting
//!   * Helper constructors

use thiserror::Error;

/// High-level classification for structured reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Format,
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorCategory::Input => "input",
            ErrorCategory::Format => "format",
            ErrorCategory::Internal => "internal",
        };
        f.write_str(s)
    }
}

/// Primary application error type.
#[derive(Error, Debug)]
pub enum AuthentiscanError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Failed to serialize {format} output: {source}")]
    Serialization {
        format: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AuthentiscanError {
    /// Categorize the error for structured output.
    pub fn category(&self) -> ErrorCategory {
        use AuthentiscanError::*;
        match self {
            Configuration { .. } | InvalidTimestamp { .. } => ErrorCategory::Input,
            Serialization { .. } => ErrorCategory::Format,
            Internal { .. } => ErrorCategory::Internal,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn invalid_timestamp(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn serialization(
        format: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Serialization {
            format: format.into(),
            source: source.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Public result alias.
pub type Result<T> = std::result::Result<T, AuthentiscanError>;

impl From<serde_json::Error> for AuthentiscanError {
    fn from(e: serde_json::Error) -> Self {
        AuthentiscanError::serialization("json", e)
    }
}

impl From<serde_yaml::Error> for AuthentiscanError {
    fn from(e: serde_yaml::Error) -> Self {
        AuthentiscanError::serialization("yaml", e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_mapping() {
        assert_eq!(
            AuthentiscanError::configuration("bad").category(),
            ErrorCategory::Input
        );
        assert_eq!(
            AuthentiscanError::invalid_timestamp("x", "not RFC 3339").category(),
            ErrorCategory::Input
        );
        assert_eq!(
            AuthentiscanError::internal("boom").category(),
            ErrorCategory::Internal
        );
    }

    #[test]
    fn display_snippets() {
        let e = AuthentiscanError::invalid_timestamp("tomorrow", "not RFC 3339");
        let s = e.to_string();
        assert!(s.contains("tomorrow"));
        assert!(s.contains("not RFC 3339"));
        let i = AuthentiscanError::internal("boom");
        assert!(i.to_string().contains("Internal error"));
    }
}
