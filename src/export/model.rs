//! Report document model and export format selection.
//!
//! A [`Report`] captures one run of the dashboard pipeline — filters,
//! summary, histogram, trend, keywords, and recent rows — in a
//! serialisable form shared by the Markdown and JSON writers.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::Serialize;

use crate::analytics::{
    MonthlyCount, RatingCount, SentimentBucket, Summary, TermCount, bucket_rows, build_corpus,
    monthly_volume, rating_histogram, recent_reviews, term_frequencies,
};
use crate::analytics::{RECENT_LIMIT, ReviewQuery};
use crate::dataset::Review;
use crate::error::PulseError;

/// Number of keyword terms included per sentiment bucket.
const REPORT_TERM_LIMIT: usize = 15;

/// Character cap for the recent-table text excerpt.
const EXCERPT_CHAR_LIMIT: usize = 80;

/// First line of the text, capped to the excerpt width with an ellipsis.
///
/// Pipes are replaced so the cell cannot break the Markdown table.
fn excerpt(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("").trim().replace('|', "/");
    if first_line.chars().count() <= EXCERPT_CHAR_LIMIT {
        return first_line;
    }
    let mut capped: String = first_line
        .chars()
        .take(EXCERPT_CHAR_LIMIT.saturating_sub(3))
        .collect();
    capped.push_str("...");
    capped
}

/// One review row prepared for the report's recent-reviews table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReportRow {
    /// Publication date (`YYYY-MM-DD`), empty when unknown.
    pub published: String,
    /// Platform, empty when unknown.
    pub platform: String,
    /// Review type, empty when unknown.
    pub review_type: String,
    /// Rating as a string, empty when unrated.
    pub rating: String,
    /// Review title, empty when absent.
    pub title: String,
    /// Review body, empty when absent.
    pub body: String,
    /// First line of the body, capped for table cells; empty when absent.
    pub excerpt: String,
    /// Helpful votes as a string, empty when unknown.
    pub helpful_votes: String,
}

impl From<&Review> for ReportRow {
    fn from(review: &Review) -> Self {
        Self {
            published: review
                .published_date
                .map_or_else(String::new, |date| date.to_string()),
            platform: review.platform.clone().unwrap_or_default(),
            review_type: review.review_type.clone().unwrap_or_default(),
            rating: review
                .rating
                .map_or_else(String::new, |rating| rating.to_string()),
            title: review.title.clone().unwrap_or_default(),
            body: review.body.clone().unwrap_or_default(),
            excerpt: review.body.as_deref().map_or_else(String::new, excerpt),
            helpful_votes: review
                .helpful_votes
                .map_or_else(String::new, |votes| votes.to_string()),
        }
    }
}

/// A complete dashboard run rendered as a document.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Report {
    /// Report generation timestamp (RFC 3339).
    pub generated_at: String,
    /// Human-readable description of the active filters.
    pub filters: String,
    /// Whether the filter combination matched no rows.
    pub empty: bool,
    /// Summary metrics over the filtered rows.
    pub summary: Summary,
    /// One-line headline in the dashboard format.
    pub headline: String,
    /// Rating histogram, ratings 1 through 5.
    pub rating_histogram: Vec<RatingCount>,
    /// Monthly review volume, chronological.
    pub monthly_volume: Vec<MonthlyCount>,
    /// Top keyword terms from positive reviews (4–5).
    pub positive_terms: Vec<TermCount>,
    /// Top keyword terms from negative reviews (1–2).
    pub negative_terms: Vec<TermCount>,
    /// The most recent filtered rows, newest first.
    pub recent: Vec<ReportRow>,
}

impl Report {
    /// Builds a report by running the full pipeline over the filtered rows.
    ///
    /// An empty filtered set produces a report with `empty` set and every
    /// section blank, mirroring the dashboard's empty-state notice.
    #[must_use]
    pub fn build(reviews: &[Review], query: &ReviewQuery) -> Self {
        let filtered = query.apply(reviews);
        let generated_at = Utc::now().to_rfc3339();
        let filters = query.describe();

        if filtered.is_empty() {
            let summary = Summary::compute(&[]);
            return Self {
                generated_at,
                filters,
                empty: true,
                headline: summary.headline(),
                summary,
                rating_histogram: Vec::new(),
                monthly_volume: Vec::new(),
                positive_terms: Vec::new(),
                negative_terms: Vec::new(),
                recent: Vec::new(),
            };
        }

        let summary = Summary::compute(&filtered);
        let headline = summary.headline();
        Self {
            generated_at,
            filters,
            empty: false,
            headline,
            summary,
            rating_histogram: rating_histogram(&filtered),
            monthly_volume: monthly_volume(&filtered),
            positive_terms: top_terms(&filtered, SentimentBucket::Positive),
            negative_terms: top_terms(&filtered, SentimentBucket::Negative),
            recent: recent_reviews(&filtered, RECENT_LIMIT)
                .into_iter()
                .map(ReportRow::from)
                .collect(),
        }
    }
}

/// Computes the top keyword terms for one sentiment bucket.
fn top_terms(filtered: &[&Review], bucket: SentimentBucket) -> Vec<TermCount> {
    let rows = bucket_rows(filtered, bucket);
    let corpus = build_corpus(&rows);
    let mut terms = term_frequencies(&corpus);
    terms.truncate(REPORT_TERM_LIMIT);
    terms
}

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Human-readable Markdown report.
    Markdown,
    /// Machine-readable JSON document.
    Json,
}

impl FromStr for ExportFormat {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(PulseError::Configuration {
                message: format!(
                    "unsupported export format '{s}': valid options are 'markdown' or 'json'"
                ),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
        }
    }
}
