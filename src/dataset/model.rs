//! Domain model for review records and lenient CSV coercion.
//!
//! The CSV layer deserialises every field as an optional string and coerces
//! rating, timestamp, and vote values afterwards. Unparseable values become
//! `None` rather than failing the whole load, mirroring how a lenient
//! tabular import treats dirty cells.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One user-submitted review record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    /// Platform the review was published on (e.g. "Desktop").
    pub platform: Option<String>,
    /// Review type (e.g. "review").
    pub review_type: Option<String>,
    /// Star rating, 1–5. `None` when the source value was missing,
    /// unparseable, or out of range.
    pub rating: Option<u8>,
    /// Publication timestamp in UTC.
    pub published_at: Option<DateTime<Utc>>,
    /// Calendar date derived from [`Review::published_at`].
    pub published_date: Option<NaiveDate>,
    /// Review title.
    pub title: Option<String>,
    /// Review body text.
    pub body: Option<String>,
    /// Helpful-vote count.
    pub helpful_votes: Option<u64>,
}

/// Raw CSV record as it appears on disk.
///
/// Extra columns in the source file are ignored by the CSV reader; missing
/// columns deserialise as `None`.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct CsvReview {
    #[serde(default)]
    pub(super) published_date: Option<String>,
    #[serde(default)]
    pub(super) published_platform: Option<String>,
    #[serde(default, rename = "type")]
    pub(super) review_type: Option<String>,
    #[serde(default)]
    pub(super) rating: Option<String>,
    #[serde(default)]
    pub(super) title: Option<String>,
    #[serde(default)]
    pub(super) text: Option<String>,
    #[serde(default)]
    pub(super) helpful_votes: Option<String>,
}

impl From<CsvReview> for Review {
    fn from(record: CsvReview) -> Self {
        let published_at = record.published_date.as_deref().and_then(coerce_timestamp);
        Self {
            platform: record.published_platform.and_then(non_empty),
            review_type: record.review_type.and_then(non_empty),
            rating: record.rating.as_deref().and_then(coerce_rating),
            published_at,
            published_date: published_at.map(|ts| ts.date_naive()),
            title: record.title,
            body: record.text,
            helpful_votes: record.helpful_votes.as_deref().and_then(coerce_votes),
        }
    }
}

/// Returns the string if it contains non-whitespace content.
fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Coerces a rating cell to an integer in 1–5.
///
/// Accepts integer and float spellings ("4", "4.0"); anything unparseable,
/// fractional, or out of range coerces to `None`.
pub(super) fn coerce_rating(value: &str) -> Option<u8> {
    let trimmed = value.trim();
    let parsed: f64 = trimmed.parse().ok()?;
    if !parsed.is_finite() || parsed.fract() != 0.0 {
        return None;
    }
    if !(1.0..=5.0).contains(&parsed) {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is a whole number within 1.0..=5.0 by the checks above"
    )]
    Some(parsed as u8)
}

/// Coerces a timestamp cell to a UTC instant.
///
/// Tries RFC 3339 first, then `YYYY-MM-DD HH:MM:SS`, then a bare
/// `YYYY-MM-DD` (taken as midnight). Naive values are assumed UTC.
pub(super) fn coerce_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&parsed));
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&parsed.and_hms_opt(0, 0, 0)?));
    }
    None
}

/// Coerces a helpful-votes cell to a count.
pub(super) fn coerce_votes(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}
