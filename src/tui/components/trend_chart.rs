//! Monthly review-volume trend chart.
//!
//! Renders the chronological month buckets as a sparkline with the month
//! range and peak volume labelled underneath.

use crate::analytics::MonthlyCount;

/// Block glyphs from lowest to highest level.
const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Renders the monthly volume as a sparkline panel.
#[must_use]
pub fn view(volume: &[MonthlyCount], width: usize) -> String {
    let mut output = String::from("Review Volume Over Time\n");
    if volume.is_empty() {
        output.push_str("No dated reviews in the current view.\n");
        return output;
    }

    let max_count = volume.iter().map(|bucket| bucket.count).max().unwrap_or(1);
    let visible = volume.len().min(width.max(1));
    let start = volume.len().saturating_sub(visible);

    let mut sparkline = String::with_capacity(visible * 3);
    for bucket in volume.iter().skip(start) {
        sparkline.push(level_glyph(bucket.count, max_count));
    }
    output.push_str(&sparkline);
    output.push('\n');

    let first = volume.get(start).map(|bucket| bucket.month);
    let last = volume.last().map(|bucket| bucket.month);
    if let (Some(first_month), Some(last_month)) = (first, last) {
        output.push_str(&format!(
            "{} .. {} (peak {max_count}/month)\n",
            first_month.format("%b %Y"),
            last_month.format("%b %Y")
        ));
    }
    output
}

/// Maps a count to one of the eight sparkline levels.
///
/// Zero counts map to the lowest glyph; the peak maps to the highest.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_arithmetic,
    reason = "proportional scaling of small review counts to eight levels"
)]
fn level_glyph(count: usize, max_count: usize) -> char {
    if count == 0 || max_count == 0 {
        return '▁';
    }
    let level = (count as f64 / max_count as f64 * (LEVELS.len() - 1) as f64).ceil() as usize;
    LEVELS
        .get(level.min(LEVELS.len() - 1))
        .copied()
        .unwrap_or('█')
}
