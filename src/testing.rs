//! Builders for synthetic review data used by unit and integration tests.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::dataset::Review;

/// Builder producing [`Review`] values with sensible defaults.
#[derive(Debug, Default)]
pub struct ReviewBuilder {
    platform: Option<String>,
    review_type: Option<String>,
    rating: Option<u8>,
    published: Option<NaiveDate>,
    title: Option<String>,
    body: Option<String>,
    helpful_votes: Option<u64>,
}

impl ReviewBuilder {
    /// Creates a builder with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the platform.
    #[must_use]
    pub fn platform(mut self, platform: &str) -> Self {
        self.platform = Some(platform.to_owned());
        self
    }

    /// Sets the review type.
    #[must_use]
    pub fn review_type(mut self, review_type: &str) -> Self {
        self.review_type = Some(review_type.to_owned());
        self
    }

    /// Sets the rating.
    #[must_use]
    pub const fn rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Sets the publication date (midnight UTC).
    #[must_use]
    pub const fn published(mut self, date: NaiveDate) -> Self {
        self.published = Some(date);
        self
    }

    /// Sets the publication date from year/month/day parts.
    ///
    /// # Panics
    ///
    /// Panics when the parts do not form a valid calendar date; test input
    /// is expected to be well-formed.
    #[must_use]
    pub fn published_ymd(self, year: i32, month: u32, day: u32) -> Self {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid test date");
        self.published(date)
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_owned());
        self
    }

    /// Sets the body text.
    #[must_use]
    pub fn body(mut self, body: &str) -> Self {
        self.body = Some(body.to_owned());
        self
    }

    /// Sets the helpful-vote count.
    #[must_use]
    pub const fn helpful_votes(mut self, votes: u64) -> Self {
        self.helpful_votes = Some(votes);
        self
    }

    /// Builds the review.
    #[must_use]
    pub fn build(self) -> Review {
        let published_at = self.published.and_then(|date| {
            date.and_hms_opt(12, 0, 0)
                .map(|naive| Utc.from_utc_datetime(&naive))
        });
        Review {
            platform: self.platform,
            review_type: self.review_type,
            rating: self.rating,
            published_at,
            published_date: self.published,
            title: self.title,
            body: self.body,
            helpful_votes: self.helpful_votes,
        }
    }
}

/// A small mixed dataset: two platforms, two types, the full rating range,
/// one unrated row, and one undated row.
#[must_use]
pub fn sample_reviews() -> Vec<Review> {
    vec![
        ReviewBuilder::new()
            .platform("Desktop")
            .review_type("review")
            .rating(5)
            .published_ymd(2024, 3, 5)
            .title("Wonderful crew")
            .body("Attentive cabin crew and excellent food")
            .helpful_votes(4)
            .build(),
        ReviewBuilder::new()
            .platform("Desktop")
            .review_type("review")
            .rating(4)
            .published_ymd(2024, 2, 18)
            .title("Comfortable seat")
            .body("Comfortable seat and smooth boarding")
            .build(),
        ReviewBuilder::new()
            .platform("Mobile")
            .review_type("review")
            .rating(3)
            .published_ymd(2024, 2, 2)
            .title("Average")
            .body("Nothing special either way")
            .build(),
        ReviewBuilder::new()
            .platform("Mobile")
            .review_type("question")
            .rating(2)
            .published_ymd(2024, 1, 10)
            .title("Delayed departure")
            .body("Delayed two hours with no announcement")
            .helpful_votes(1)
            .build(),
        ReviewBuilder::new()
            .platform("Desktop")
            .review_type("review")
            .rating(1)
            .published_ymd(2023, 12, 28)
            .title("Lost luggage")
            .body("Luggage lost and support unhelpful")
            .build(),
        // Unrated row: excluded by the always-active rating predicate.
        ReviewBuilder::new()
            .platform("Desktop")
            .review_type("review")
            .published_ymd(2024, 1, 20)
            .body("No rating attached")
            .build(),
        // Undated row: excluded whenever a date range is active.
        ReviewBuilder::new()
            .platform("Mobile")
            .review_type("review")
            .rating(4)
            .title("No date attached")
            .build(),
    ]
}
