//! Helper functions for date handling, log-friendly strings and output paths.
//!
//! - Permissive publish-date parsing used for sorting
//! - Long-form date formatting used on preview cards
//! - String truncation for logging
//! - Output path preparation

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{debug, instrument};

/// Rendered in place of a date that could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// Parse a publish date into a UTC timestamp.
///
/// Accepts RFC 3339, RFC 2822, ISO-8601 date-times without an offset
/// (taken as UTC), plain dates (midnight UTC) and a few common written
/// forms such as `January 5, 2024` or `1/5/2024`.
///
/// # Returns
///
/// `None` when no known format matches.
pub fn parse_publish_date(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format a publish date the long way: `January 5, 2024`.
///
/// Falls back to [`INVALID_DATE`] when the input does not parse.
pub fn format_publish_date(raw: &str) -> String {
    match parse_publish_date(raw) {
        Some(dt) => dt.format("%B %-d, %Y").to_string(),
        None => {
            debug!(date = raw, "Unparseable publish date");
            INVALID_DATE.to_string()
        }
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` characters with an ellipsis and a count of
/// the dropped bytes appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

/// Create the parent directory of an output file if it is missing.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub async fn ensure_parent_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    Ok(())
}
