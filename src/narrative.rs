//! Synthetic article descriptions for news inputs.
//!
//! Repeated calls on the same URL must produce the same description, so
//! every varying field is chosen by indexing a fixed catalog with the
//! URL's fingerprint. The publish date is the one field that also depends
//! on the current time; it comes in through the [`Clock`] seam.

use chrono::Duration;

use crate::analysis::NewsDescription;
use crate::clock::Clock;
use crate::domain::extract_host;
use crate::fingerprint::fingerprint;

const HEADLINES: &[&str] = &[
    "Breaking: Major Development in Ongoing Investigation",
    "Expert Analysis Reveals New Insights on Current Events",
    "Comprehensive Report on Recent Developments",
    "In-Depth Coverage of Latest News Story",
    "Exclusive: New Information Emerges in Developing Story",
];

const SUMMARIES: &[&str] = &[
    "This article provides comprehensive coverage of recent developments, featuring expert analysis and multiple source verification.",
    "A detailed report examining the latest events with thorough fact-checking and cross-referencing from reliable sources.",
    "Breaking news coverage with extensive research and verification from multiple independent sources.",
    "In-depth analysis of current events with comprehensive source verification and expert commentary.",
    "Detailed reporting on recent developments with thorough fact-checking and multiple source confirmation.",
];

const CATEGORIES: &[&str] = &[
    "Politics",
    "Technology",
    "Health",
    "Business",
    "Sports",
    "Entertainment",
    "Science",
];

/// Display names for hosts with a well-known masthead.
const PUBLISHERS: &[(&str, &str)] = &[
    ("reuters.com", "Reuters"),
    ("bbc.com", "BBC News"),
    ("cnn.com", "CNN"),
    ("nytimes.com", "The New York Times"),
    ("washingtonpost.com", "The Washington Post"),
    ("theguardian.com", "The Guardian"),
];

/// Fixed verification talking points; deliberately not fingerprint-varied.
const KEY_POINTS: &[&str] = &[
    "Content verified through multiple independent sources",
    "Cross-referenced with fact-checking organizations",
    "Metadata analysis confirms authenticity markers",
    "Source credibility assessment completed",
];

/// Derive a plausible article description from a URL.
///
/// All fields except `publish_date` are pure functions of the URL. The
/// publish date is "now minus (fingerprint % 30) days" truncated to
/// calendar-date granularity.
pub fn describe(url: &str, clock: &dyn Clock) -> NewsDescription {
    let host = extract_host(url);
    let hash = fingerprint(url) as usize;

    let publisher = PUBLISHERS
        .iter()
        .find(|(known, _)| *known == host)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| capitalize(&host));

    let publish_date = (clock.now() - Duration::days((hash % 30) as i64))
        .format("%Y-%m-%d")
        .to_string();

    NewsDescription {
        headline: HEADLINES[hash % HEADLINES.len()].to_string(),
        summary: SUMMARIES[hash % SUMMARIES.len()].to_string(),
        publisher,
        publish_date,
        category: CATEGORIES[hash % CATEGORIES.len()].to_string(),
        key_points: KEY_POINTS.iter().map(|p| p.to_string()).collect(),
    }
}

/// Uppercase the first character, e.g. "unknown" -> "Unknown".
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
