//! Rating-distribution bar chart.
//!
//! Renders one horizontal bar per rating value, scaled to the widest
//! bucket, with the exact count at the end of each bar.

use crate::analytics::RatingCount;

use super::text_truncate::pad_to_width;

/// Columns reserved for the rating label, axis, and count suffix.
const GUTTER_WIDTH: usize = 12;

/// Minimum bar area when the terminal is very narrow.
const MIN_BAR_WIDTH: usize = 10;

/// Renders the rating histogram as horizontal bars, rating 5 on top.
#[must_use]
pub fn view(histogram: &[RatingCount], width: usize) -> String {
    let bar_area = width.saturating_sub(GUTTER_WIDTH).max(MIN_BAR_WIDTH);
    let max_count = histogram.iter().map(|bucket| bucket.count).max().unwrap_or(0);

    let mut output = String::from("Rating Distribution\n");
    for bucket in histogram.iter().rev() {
        let bar = scaled_bar(bucket.count, max_count, bar_area);
        let label = pad_to_width(&format!("{} *", bucket.rating), 4);
        output.push_str(&format!("{label}|{bar} {}\n", bucket.count));
    }
    output
}

/// Scales a count to a run of block characters.
///
/// A non-zero count always draws at least one block so small buckets stay
/// visible next to large ones.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_arithmetic,
    reason = "proportional scaling of small review counts to a bar width"
)]
fn scaled_bar(count: usize, max_count: usize, bar_area: usize) -> String {
    if count == 0 || max_count == 0 {
        return String::new();
    }
    let scaled = (count as f64 / max_count as f64 * bar_area as f64).round() as usize;
    "█".repeat(scaled.max(1))
}
