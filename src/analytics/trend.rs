//! Monthly review-volume aggregation.
//!
//! Rows without a timestamp are dropped; the remainder are bucketed by
//! calendar month and counted. `BTreeMap` ordering keeps the buckets
//! chronological without an explicit sort.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::dataset::Review;

/// Review count for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    /// First day of the bucketed month.
    pub month: NaiveDate,
    /// Number of reviews published in that month.
    pub count: usize,
}

/// Buckets the rows by calendar month, ordered chronologically.
///
/// The bucket counts sum exactly to the number of rows carrying a
/// timestamp; months with no reviews inside the observed span are absent
/// rather than zero.
#[must_use]
pub fn monthly_volume(rows: &[&Review]) -> Vec<MonthlyCount> {
    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for review in rows {
        let Some(date) = review.published_date else {
            continue;
        };
        let Some(month) = NaiveDate::from_ymd_opt(date.year(), date.month(), 1) else {
            continue;
        };
        *buckets.entry(month).or_insert(0) += 1;
    }
    buckets
        .into_iter()
        .map(|(month, count)| MonthlyCount { month, count })
        .collect()
}

#[cfg(test)]
#[path = "trend_tests.rs"]
mod tests;
