//! Tests for the filter pipeline.

use chrono::NaiveDate;
use rstest::rstest;

use crate::testing::{ReviewBuilder, sample_reviews};

use super::ReviewQuery;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

#[rstest]
fn default_query_admits_every_rated_row() {
    let reviews = sample_reviews();
    let matched = ReviewQuery::default().apply(&reviews);
    // Only the unrated row falls out; the undated row survives because no
    // date range is set.
    assert_eq!(matched.len(), 6);
    assert!(matched.iter().all(|r| r.rating.is_some()));
}

#[rstest]
fn predicates_combine_with_and_semantics() {
    let reviews = sample_reviews();
    let query = ReviewQuery::new(
        Some("Desktop".to_owned()),
        Some("review".to_owned()),
        (4, 5),
        Some((date(2024, 1, 1), date(2024, 12, 31))),
    );
    let matched = query.apply(&reviews);
    assert_eq!(matched.len(), 2);
    assert!(matched.iter().all(|r| query.matches(r)));
}

#[rstest]
fn filtered_set_is_subset_of_input() {
    let reviews = sample_reviews();
    let query = ReviewQuery::new(Some("Mobile".to_owned()), None, (1, 5), None);
    let matched = query.apply(&reviews);
    assert!(matched.len() <= reviews.len());
    for row in matched {
        assert!(reviews.iter().any(|original| original == row));
    }
}

#[rstest]
#[case((2, 4), 3)]
#[case((4, 4), 1)]
#[case((1, 1), 1)]
fn rating_bounds_are_inclusive(#[case] range: (u8, u8), #[case] expected: usize) {
    let reviews = sample_reviews();
    let query = ReviewQuery::new(None, None, range, None);
    // Restricting to dated rows keeps the counts independent of the
    // undated rating-4 row.
    let mut dated_query = query;
    dated_query.set_date_range(Some((date(2023, 1, 1), date(2024, 12, 31))));
    assert_eq!(dated_query.apply(&reviews).len(), expected);
}

#[rstest]
fn reversed_ranges_are_normalised() {
    let query = ReviewQuery::new(
        None,
        None,
        (5, 2),
        Some((date(2024, 6, 1), date(2024, 1, 1))),
    );
    assert_eq!(query.rating_range(), (2, 5));
    assert_eq!(
        query.date_range(),
        Some((date(2024, 1, 1), date(2024, 6, 1)))
    );
}

#[rstest]
fn date_bounds_are_inclusive() {
    let reviews = sample_reviews();
    // Exactly the publication date of the rating-2 row on both ends.
    let query = ReviewQuery::new(None, None, (1, 5), Some((date(2024, 1, 10), date(2024, 1, 10))));
    let matched = query.apply(&reviews);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched.first().map(|r| r.rating), Some(Some(2)));
}

#[rstest]
fn null_rating_never_matches() {
    let unrated = ReviewBuilder::new().platform("Desktop").build();
    assert!(!ReviewQuery::default().matches(&unrated));
}

#[rstest]
fn null_date_fails_an_active_date_range() {
    let undated = ReviewBuilder::new().rating(5).build();
    let mut query = ReviewQuery::default();
    assert!(query.matches(&undated));
    query.set_date_range(Some((date(2024, 1, 1), date(2024, 12, 31))));
    assert!(!query.matches(&undated));
}

#[rstest]
fn zero_match_combination_yields_empty_set() {
    let reviews = sample_reviews();
    let query = ReviewQuery::new(
        Some("Mobile".to_owned()),
        None,
        (1, 5),
        Some((date(2020, 1, 1), date(2020, 12, 31))),
    );
    assert!(query.apply(&reviews).is_empty());
}

#[rstest]
fn describe_names_every_active_predicate() {
    let query = ReviewQuery::new(
        Some("Desktop".to_owned()),
        None,
        (2, 5),
        Some((date(2024, 1, 1), date(2024, 6, 30))),
    );
    let description = query.describe();
    assert!(description.contains("Platform: Desktop"));
    assert!(description.contains("Type: All"));
    assert!(description.contains("Rating: 2-5"));
    assert!(description.contains("2024-01-01 to 2024-06-30"));
}
