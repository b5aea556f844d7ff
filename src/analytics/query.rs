//! Filter pipeline narrowing the loaded dataset.
//!
//! A [`ReviewQuery`] is a conjunction of independent predicates: platform,
//! review type, inclusive rating range, and inclusive date range. Reversed
//! ranges are normalised on construction, so the stored bounds always
//! satisfy `lo <= hi` and `start <= end`.

use chrono::NaiveDate;

use crate::dataset::Review;

/// Conjunction of filter predicates over the review dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewQuery {
    /// Platform to match exactly; `None` matches every platform.
    platform: Option<String>,
    /// Review type to match exactly; `None` matches every type.
    review_type: Option<String>,
    /// Inclusive rating lower bound.
    rating_lo: u8,
    /// Inclusive rating upper bound.
    rating_hi: u8,
    /// Inclusive date range; `None` disables the date predicate.
    date_range: Option<(NaiveDate, NaiveDate)>,
}

impl Default for ReviewQuery {
    fn default() -> Self {
        Self {
            platform: None,
            review_type: None,
            rating_lo: 1,
            rating_hi: 5,
            date_range: None,
        }
    }
}

impl ReviewQuery {
    /// Creates a query, normalising reversed rating and date ranges.
    #[must_use]
    pub fn new(
        platform: Option<String>,
        review_type: Option<String>,
        rating_range: (u8, u8),
        date_range: Option<(NaiveDate, NaiveDate)>,
    ) -> Self {
        let mut query = Self {
            platform,
            review_type,
            ..Self::default()
        };
        query.set_rating_range(rating_range.0, rating_range.1);
        query.set_date_range(date_range);
        query
    }

    /// Selected platform, when the platform predicate is active.
    #[must_use]
    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    /// Selected review type, when the type predicate is active.
    #[must_use]
    pub fn review_type(&self) -> Option<&str> {
        self.review_type.as_deref()
    }

    /// Inclusive rating bounds, always `lo <= hi`.
    #[must_use]
    pub const fn rating_range(&self) -> (u8, u8) {
        (self.rating_lo, self.rating_hi)
    }

    /// Inclusive date bounds, always `start <= end` when present.
    #[must_use]
    pub const fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.date_range
    }

    /// Sets or clears the platform predicate.
    pub fn set_platform(&mut self, platform: Option<String>) {
        self.platform = platform;
    }

    /// Sets or clears the review-type predicate.
    pub fn set_review_type(&mut self, review_type: Option<String>) {
        self.review_type = review_type;
    }

    /// Sets the rating bounds, swapping a reversed pair.
    pub const fn set_rating_range(&mut self, lo: u8, hi: u8) {
        if lo <= hi {
            self.rating_lo = lo;
            self.rating_hi = hi;
        } else {
            self.rating_lo = hi;
            self.rating_hi = lo;
        }
    }

    /// Sets or clears the date bounds, swapping a reversed pair.
    pub fn set_date_range(&mut self, range: Option<(NaiveDate, NaiveDate)>) {
        self.date_range = range.map(|(start, end)| {
            if start <= end {
                (start, end)
            } else {
                (end, start)
            }
        });
    }

    /// Returns true when the review satisfies every active predicate.
    ///
    /// Rows with a null rating never match, because the rating-range
    /// predicate is always active. Rows with a null date fail whenever a
    /// date range is set.
    #[must_use]
    pub fn matches(&self, review: &Review) -> bool {
        if let Some(platform) = &self.platform {
            if review.platform.as_deref() != Some(platform.as_str()) {
                return false;
            }
        }
        if let Some(review_type) = &self.review_type {
            if review.review_type.as_deref() != Some(review_type.as_str()) {
                return false;
            }
        }
        let Some(rating) = review.rating else {
            return false;
        };
        if rating < self.rating_lo || rating > self.rating_hi {
            return false;
        }
        if let Some((start, end)) = self.date_range {
            let Some(date) = review.published_date else {
                return false;
            };
            if date < start || date > end {
                return false;
            }
        }
        true
    }

    /// Applies the query, returning references to matching rows in order.
    #[must_use]
    pub fn apply<'a>(&self, reviews: &'a [Review]) -> Vec<&'a Review> {
        reviews.iter().filter(|review| self.matches(review)).collect()
    }

    /// Human-readable description of the active predicates, for the filter
    /// bar and exported reports.
    #[must_use]
    pub fn describe(&self) -> String {
        let platform = self.platform.as_deref().unwrap_or("All");
        let review_type = self.review_type.as_deref().unwrap_or("All");
        let dates = self.date_range.map_or_else(
            || "all dates".to_owned(),
            |(start, end)| format!("{start} to {end}"),
        );
        format!(
            "Platform: {platform} | Type: {review_type} | Rating: {}-{} | Dates: {dates}",
            self.rating_lo, self.rating_hi
        )
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
