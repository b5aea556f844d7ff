//! One-shot summary mode.
//!
//! Prints the filter description, the headline metrics, and the rating
//! distribution to stdout, then exits. Useful for scripting and for a
//! quick look without entering the TUI.

use std::io::{self, Write};

use revpulse::analytics::{Summary, rating_histogram};
use revpulse::{PulseConfig, PulseError, load_dataset};

/// Runs the summary mode.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded, a configured filter
/// value is malformed, or stdout cannot be written.
pub fn run(config: &PulseConfig) -> Result<(), PulseError> {
    let path = config.require_data_path()?;
    let dataset = load_dataset(&path)?;
    let query = super::build_query(config, &dataset)?;
    let filtered = query.apply(dataset.reviews());

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Filters: {}", query.describe()).map_err(|error| PulseError::io(&error))?;

    if filtered.is_empty() {
        writeln!(stdout, "No reviews match the current filters.")
            .map_err(|error| PulseError::io(&error))?;
        return Ok(());
    }

    let summary = Summary::compute(&filtered);
    writeln!(stdout, "{}", summary.headline()).map_err(|error| PulseError::io(&error))?;

    writeln!(stdout, "\nRating distribution:").map_err(|error| PulseError::io(&error))?;
    for entry in rating_histogram(&filtered) {
        writeln!(stdout, "  {} stars: {}", entry.rating, entry.count)
            .map_err(|error| PulseError::io(&error))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use revpulse::ReviewQuery;
    use revpulse::testing::sample_reviews;

    use super::*;

    #[test]
    fn summary_metrics_cover_filtered_rows() {
        let reviews = sample_reviews();
        let filtered = ReviewQuery::default().apply(&reviews);
        let summary = Summary::compute(&filtered);
        assert_eq!(summary.total, 6);
        assert!(summary.headline().contains("6 reviews in view"));
    }
}
