//! CLI operation mode handlers.
//!
//! This module contains the implementations for the different operation
//! modes:
//! - [`dashboard`]: Interactive TUI dashboard (the default)
//! - [`summary`]: One-shot summary metrics printed to stdout
//! - [`export_report`]: One-shot Markdown or JSON report export

use revpulse::{Dataset, PulseConfig, PulseError, ReviewQuery};

pub mod dashboard;
pub mod export_report;
pub mod summary;

/// Builds the filter query for a dataset from configured values.
///
/// Unset rating bounds fall back to the dataset's observed bounds;
/// configured bounds are clamped to the 1-5 rating scale. An entirely
/// unset date pair falls back to the dataset's default twelve-month
/// window. A half-open configured pair is completed from the dataset's
/// bounds on the missing side.
///
/// # Errors
///
/// Returns [`PulseError::InvalidDate`] when a configured date is not
/// `YYYY-MM-DD`.
pub fn build_query(config: &PulseConfig, dataset: &Dataset) -> Result<ReviewQuery, PulseError> {
    let (default_lo, default_hi) = dataset.rating_bounds();
    let lo = config.min_rating.unwrap_or(default_lo).clamp(1, 5);
    let hi = config.max_rating.unwrap_or(default_hi).clamp(1, 5);

    let start = config.parse_start_date()?;
    let end = config.parse_end_date()?;
    let date_range = match (start, end) {
        (None, None) => dataset.default_date_window(),
        (configured_start, configured_end) => {
            let bounds = dataset.date_bounds();
            let window_start = configured_start.or_else(|| bounds.map(|(min, _)| min));
            let window_end = configured_end.or_else(|| bounds.map(|(_, max)| max));
            window_start.zip(window_end)
        }
    };

    Ok(ReviewQuery::new(
        config.platform.clone(),
        config.review_type.clone(),
        (lo, hi),
        date_range,
    ))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use revpulse::testing::sample_reviews;

    use super::*;

    fn make_dataset() -> Dataset {
        Dataset::new(sample_reviews())
    }

    #[test]
    fn unset_config_uses_dataset_defaults() {
        let dataset = make_dataset();
        let config = PulseConfig::default();
        let query = build_query(&config, &dataset).expect("valid query");

        assert_eq!(query.rating_range(), dataset.rating_bounds());
        assert_eq!(query.date_range(), dataset.default_date_window());
        assert_eq!(query.platform(), None);
    }

    #[test]
    fn configured_values_override_defaults() {
        let dataset = make_dataset();
        let config = PulseConfig {
            platform: Some("Mobile".to_owned()),
            min_rating: Some(2),
            max_rating: Some(4),
            start_date: Some("2024-01-01".to_owned()),
            end_date: Some("2024-02-01".to_owned()),
            ..PulseConfig::default()
        };
        let query = build_query(&config, &dataset).expect("valid query");

        assert_eq!(query.platform(), Some("Mobile"));
        assert_eq!(query.rating_range(), (2, 4));
        assert_eq!(
            query.date_range(),
            Some((
                NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
                NaiveDate::from_ymd_opt(2024, 2, 1).expect("valid date"),
            ))
        );
    }

    #[test]
    fn out_of_scale_rating_bounds_are_clamped() {
        let dataset = make_dataset();
        let config = PulseConfig {
            min_rating: Some(0),
            max_rating: Some(200),
            ..PulseConfig::default()
        };
        let query = build_query(&config, &dataset).expect("valid query");

        assert_eq!(query.rating_range(), (1, 5));
    }

    #[test]
    fn half_open_date_pair_completes_from_dataset() {
        let dataset = make_dataset();
        let config = PulseConfig {
            start_date: Some("2024-01-01".to_owned()),
            ..PulseConfig::default()
        };
        let query = build_query(&config, &dataset).expect("valid query");

        let (_, dataset_max) = dataset.date_bounds().expect("sample data has dates");
        let (start, end) = query.date_range().expect("active window");
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1).expect("ymd"));
        assert_eq!(end, dataset_max);
    }

    #[test]
    fn malformed_date_is_rejected() {
        let dataset = make_dataset();
        let config = PulseConfig {
            start_date: Some("01/02/2024".to_owned()),
            ..PulseConfig::default()
        };
        let error = build_query(&config, &dataset).expect_err("rejects malformed date");
        assert!(matches!(error, PulseError::InvalidDate { .. }));
    }
}
