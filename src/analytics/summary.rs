//! Summary metrics over a filtered review set.
//!
//! These are plain aggregate formulas: row count, mean and median rating
//! over non-null ratings, and positive/negative shares by rating
//! threshold (≥ 4 positive, ≤ 2 negative, 3 neutral). Shares divide
//! by the full filtered row count, so unrated rows dilute both shares.

use serde::Serialize;

use crate::dataset::Review;

/// Aggregate metrics for the rows currently in view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of rows in view.
    pub total: usize,
    /// Mean rating over non-null ratings. `None` when no row is rated.
    pub mean_rating: Option<f64>,
    /// Median rating over non-null ratings. `None` when no row is rated.
    pub median_rating: Option<f64>,
    /// Percentage of rows rated 4 or 5.
    pub positive_share: f64,
    /// Percentage of rows rated 1 or 2.
    pub negative_share: f64,
}

impl Summary {
    /// Computes summary metrics from a filtered row set.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "aggregate formulas over counts far below f64's integer range"
    )]
    pub fn compute(rows: &[&Review]) -> Self {
        let total = rows.len();
        let mut ratings: Vec<u8> = rows.iter().filter_map(|r| r.rating).collect();
        ratings.sort_unstable();

        let mean_rating = if ratings.is_empty() {
            None
        } else {
            let sum: u64 = ratings.iter().map(|&r| u64::from(r)).sum();
            Some(sum as f64 / ratings.len() as f64)
        };

        let positive = rows
            .iter()
            .filter(|r| r.rating.is_some_and(|rating| rating >= 4))
            .count();
        let negative = rows
            .iter()
            .filter(|r| r.rating.is_some_and(|rating| rating <= 2))
            .count();
        // Multiplying before dividing keeps even percentages exact
        // (e.g. 20 of 50 rows is exactly 40.0).
        let share = |count: usize| {
            if total == 0 {
                0.0
            } else {
                (count * 100) as f64 / total as f64
            }
        };

        Self {
            total,
            mean_rating,
            median_rating: median(&ratings),
            positive_share: share(positive),
            negative_share: share(negative),
        }
    }

    /// One-line summary in the dashboard's headline format.
    #[must_use]
    pub fn headline(&self) -> String {
        let avg = self
            .mean_rating
            .map_or_else(|| "n/a".to_owned(), |mean| format!("{mean:.2}"));
        format!(
            "{} reviews in view | Avg rating: {avg} | Positive (4-5): {:.1}% | Negative (1-2): {:.1}%",
            group_thousands(self.total),
            self.positive_share,
            self.negative_share
        )
    }
}

/// Median of a sorted rating list, averaging the two middle values for an
/// even count.
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "ratings are in 1..=5; the midpoint average is exact in f64"
)]
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "midpoint index arithmetic on a slice length"
)]
fn median(sorted: &[u8]) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted.get(mid).map(|&r| f64::from(r))
    } else {
        let lower = sorted.get(mid.checked_sub(1)?)?;
        let upper = sorted.get(mid)?;
        Some((f64::from(*lower) + f64::from(*upper)) / 2.0)
    }
}

/// Formats a count with thousands separators (e.g. `12,345`).
#[must_use]
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "digit-group arithmetic on the decimal string length"
)]
pub fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Count of rows per rating value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingCount {
    /// Rating value, 1–5.
    pub rating: u8,
    /// Number of rows with that rating.
    pub count: usize,
}

/// Histogram of rating counts for ratings 1 through 5, in order.
///
/// Rows without a rating are dropped.
#[must_use]
pub fn rating_histogram(rows: &[&Review]) -> Vec<RatingCount> {
    (1..=5)
        .map(|rating| RatingCount {
            rating,
            count: rows
                .iter()
                .filter(|r| r.rating == Some(rating))
                .count(),
        })
        .collect()
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
