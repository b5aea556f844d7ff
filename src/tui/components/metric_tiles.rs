//! Metric tiles row: total, average, median, and positive share.

use crate::analytics::Summary;
use crate::analytics::summary::group_thousands;

use super::text_truncate::pad_to_width;

/// Display width of one metric tile.
const TILE_WIDTH: usize = 18;

/// Renders the four metric tiles as a two-line row.
#[must_use]
pub fn view(summary: &Summary) -> String {
    let labels = ["Total Reviews", "Average Rating", "Median Rating", "4+ Rating Share"];
    let values = [
        group_thousands(summary.total),
        summary
            .mean_rating
            .map_or_else(|| "n/a".to_owned(), |mean| format!("{mean:.2}")),
        summary
            .median_rating
            .map_or_else(|| "n/a".to_owned(), |median| format!("{median:.1}")),
        format!("{:.1}%", summary.positive_share),
    ];

    let mut output = String::new();
    for label in labels {
        output.push_str(&pad_to_width(label, TILE_WIDTH));
    }
    output.push('\n');
    for value in &values {
        output.push_str(&pad_to_width(value, TILE_WIDTH));
    }
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use crate::analytics::Summary;
    use crate::dataset::Review;
    use crate::testing::sample_reviews;

    use super::view;

    #[test]
    fn tiles_render_labels_and_values() {
        let reviews = sample_reviews();
        let refs: Vec<&Review> = reviews.iter().collect();
        let summary = Summary::compute(&refs);
        let output = view(&summary);

        assert!(output.contains("Total Reviews"));
        assert!(output.contains("Average Rating"));
        assert!(output.contains("Median Rating"));
        assert!(output.contains("4+ Rating Share"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn unrated_sets_show_placeholders() {
        let summary = Summary::compute(&[]);
        let output = view(&summary);
        assert!(output.contains("n/a"));
        assert!(output.contains("0.0%"));
    }
}
