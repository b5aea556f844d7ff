//! Most-recent-reviews selection for the dashboard table.

use std::cmp::Reverse;

use crate::dataset::Review;

/// Number of rows shown in the recent-reviews table.
pub const RECENT_LIMIT: usize = 20;

/// Returns up to `limit` rows ordered by publication time, newest first.
///
/// Rows without a timestamp sort after every dated row; the sort is stable,
/// so undated rows keep their file order.
#[must_use]
pub fn recent_reviews<'a>(rows: &[&'a Review], limit: usize) -> Vec<&'a Review> {
    let mut ordered: Vec<&Review> = rows.to_vec();
    ordered.sort_by_key(|review| Reverse(review.published_at));
    ordered.truncate(limit);
    ordered
}

#[cfg(test)]
#[path = "recent_tests.rs"]
mod tests;
