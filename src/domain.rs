//! URL host extraction and credibility scoring.
//!
//! This module classifies a URL's host against two fixed pattern catalogs:
//! - trusted news organizations, which score in the high band [85,99]
//! - suspicious tokens (free-TLD suffixes and loaded words), which score
//!   in the low band [15,39]
//! Everything else lands in the default band [50,79]. Within a band the
//! exact value is jittered by the URL's fingerprint so that repeated
//! lookups of the same URL are identical.

use crate::fingerprint::fingerprint;

/// Sentinel host returned when the input is not a parsable URL.
pub const UNKNOWN_HOST: &str = "unknown";

/// Hosts treated as established, credible publishers.
const TRUSTED_SOURCES: &[&str] = &[
    "reuters.com",
    "bbc.com",
    "ap.org",
    "npr.org",
    "pbs.org",
    "cnn.com",
    "nytimes.com",
    "washingtonpost.com",
    "theguardian.com",
    "wsj.com",
    "bloomberg.com",
    "abcnews.go.com",
    "cbsnews.com",
];

/// Host substrings correlated with low-credibility publishing.
/// Free-TLD suffixes plus words that tend to appear in misinformation
/// domains.
const SUSPICIOUS_TOKENS: &[&str] = &[
    ".tk",
    ".ml",
    ".ga",
    ".cf",
    "fake",
    "hoax",
    "conspiracy",
    "truth",
    "real",
    "news",
];

/// Extract the lowercase hostname from a URL, stripping a leading "www.".
///
/// Fails soft: anything that is not a scheme-qualified URL (missing or
/// malformed scheme, empty authority) returns [`UNKNOWN_HOST`] rather than
/// an error, which routes the input through the default credibility band.
pub fn extract_host(url: &str) -> String {
    let trimmed = url.trim();
    let rest = match trimmed.split_once("://") {
        Some((scheme, rest)) if is_valid_scheme(scheme) => rest,
        _ => return UNKNOWN_HOST.to_string(),
    };

    // Authority ends at the first path, query, or fragment delimiter.
    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    // Drop userinfo and port.
    let host = authority.rsplit('@').next().unwrap_or(authority);
    let host = host.split(':').next().unwrap_or(host);

    if host.is_empty() {
        return UNKNOWN_HOST.to_string();
    }

    let host = host.to_lowercase();
    host.strip_prefix("www.").unwrap_or(&host).to_string()
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Scores URL credibility from host pattern membership plus
/// fingerprint-derived jitter.
///
/// The built-in catalogs can be extended (never replaced) through
/// configuration; extensions obey the same band rules.
#[derive(Debug, Clone)]
pub struct DomainClassifier {
    trusted: Vec<String>,
    suspicious: Vec<String>,
}

impl Default for DomainClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainClassifier {
    /// Classifier over the built-in catalogs only.
    pub fn new() -> Self {
        Self {
            trusted: TRUSTED_SOURCES.iter().map(|s| s.to_string()).collect(),
            suspicious: SUSPICIOUS_TOKENS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Classifier with additional trusted hosts and suspicious tokens
    /// appended to the built-in catalogs. Entries are matched lowercase.
    pub fn with_extras(extra_trusted: &[String], extra_suspicious: &[String]) -> Self {
        let mut classifier = Self::new();
        classifier
            .trusted
            .extend(extra_trusted.iter().map(|s| s.to_lowercase()));
        classifier
            .suspicious
            .extend(extra_suspicious.iter().map(|s| s.to_lowercase()));
        classifier
    }

    /// Score a URL's credibility in [0,100].
    ///
    /// The trusted check runs before the suspicious check, so a host
    /// matching both catalogs scores in the trusted band.
    pub fn score_url(&self, url: &str) -> u8 {
        let host = extract_host(url);
        let jitter = fingerprint(url);

        if self.trusted.iter().any(|s| host.contains(s.as_str())) {
            return (85 + jitter % 15) as u8; // 85-99
        }

        if self.suspicious.iter().any(|t| host.contains(t.as_str())) {
            return (15 + jitter % 25) as u8; // 15-39
        }

        (50 + jitter % 30) as u8 // 50-79
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_basic_host() {
        assert_eq!(extract_host("https://reuters.com/world"), "reuters.com");
        assert_eq!(extract_host("http://example.com"), "example.com");
    }

    #[test]
    fn strips_leading_www_and_lowercases() {
        assert_eq!(extract_host("https://WWW.Example.COM/path"), "example.com");
        assert_eq!(extract_host("https://www.bbc.com"), "bbc.com");
    }

    #[test]
    fn drops_port_userinfo_query_and_fragment() {
        assert_eq!(extract_host("http://example.com:8080/x"), "example.com");
        assert_eq!(extract_host("https://user:pw@example.com/x"), "example.com");
        assert_eq!(extract_host("https://example.com?q=1"), "example.com");
        assert_eq!(extract_host("https://example.com#top"), "example.com");
    }

    #[test]
    fn unparsable_input_yields_sentinel() {
        assert_eq!(extract_host("not a url"), UNKNOWN_HOST);
        assert_eq!(extract_host("reuters.com/world"), UNKNOWN_HOST);
        assert_eq!(extract_host("://missing-scheme.com"), UNKNOWN_HOST);
        assert_eq!(extract_host("1bad://scheme.com"), UNKNOWN_HOST);
        assert_eq!(extract_host("https:///no-host"), UNKNOWN_HOST);
        assert_eq!(extract_host(""), UNKNOWN_HOST);
    }

    #[test]
    fn trusted_hosts_score_high_band() {
        let classifier = DomainClassifier::new();
        for url in [
            "https://reuters.com/world/story123",
            "https://www.bbc.com/news/article",
            "https://apnews.example.ap.org/item",
        ] {
            let score = classifier.score_url(url);
            assert!((85..=99).contains(&score), "{url} scored {score}");
        }
    }

    #[test]
    fn suspicious_hosts_score_low_band() {
        let classifier = DomainClassifier::new();
        for url in [
            "https://dailyhoax.com/shocking",
            "https://realtruth.tk/article",
            "https://conspiracy-watch.ml/post",
        ] {
            let score = classifier.score_url(url);
            assert!((15..=39).contains(&score), "{url} scored {score}");
        }
    }

    #[test]
    fn other_hosts_score_default_band() {
        let classifier = DomainClassifier::new();
        for url in [
            "https://example.com/article",
            "https://myblog.org/post/1",
            "not a url at all",
        ] {
            let score = classifier.score_url(url);
            assert!((50..=79).contains(&score), "{url} scored {score}");
        }
    }

    #[test]
    fn trusted_wins_over_suspicious() {
        // "abcnews.go.com" contains the suspicious token "news" but is on
        // the trusted list; the trusted band must win.
        let classifier = DomainClassifier::new();
        let score = classifier.score_url("https://abcnews.go.com/politics/story");
        assert!((85..=99).contains(&score), "scored {score}");
    }

    #[test]
    fn scoring_is_deterministic() {
        let classifier = DomainClassifier::new();
        let url = "https://example.com/article";
        assert_eq!(classifier.score_url(url), classifier.score_url(url));
    }

    #[test]
    fn extras_extend_catalogs() {
        let classifier =
            DomainClassifier::with_extras(&["Trustworthy.example".to_string()], &[]);
        let score = classifier.score_url("https://trustworthy.example/report");
        assert!((85..=99).contains(&score), "scored {score}");

        let classifier = DomainClassifier::with_extras(&[], &["clickbait".to_string()]);
        let score = classifier.score_url("https://clickbait-central.com/wow");
        assert!((15..=39).contains(&score), "scored {score}");
    }
}
