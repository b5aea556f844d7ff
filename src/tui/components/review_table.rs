//! Recent-reviews table.
//!
//! Renders the newest filtered rows with fixed-width metadata columns and
//! an excerpt column that absorbs the remaining terminal width.

use crate::dataset::Review;

use super::text_truncate::{fit_to_width, pad_to_width};

/// Fixed column widths: date, platform, type, rating, votes.
const DATE_WIDTH: usize = 11;
const PLATFORM_WIDTH: usize = 10;
const TYPE_WIDTH: usize = 9;
const RATING_WIDTH: usize = 7;
const VOTES_WIDTH: usize = 6;

/// Minimum width of the excerpt column.
const MIN_EXCERPT_WIDTH: usize = 16;

/// Renders the recent-reviews table.
#[must_use]
pub fn view(rows: &[&Review], width: usize) -> String {
    let fixed = DATE_WIDTH + PLATFORM_WIDTH + TYPE_WIDTH + RATING_WIDTH + VOTES_WIDTH;
    let excerpt_width = width.saturating_sub(fixed).max(MIN_EXCERPT_WIDTH);

    let mut output = String::from("Recent Reviews\n");
    output.push_str(&header_line(excerpt_width));
    for review in rows {
        output.push_str(&row_line(review, excerpt_width));
    }
    output
}

fn header_line(excerpt_width: usize) -> String {
    format!(
        "{}{}{}{}{}{}\n",
        pad_to_width("Date", DATE_WIDTH),
        pad_to_width("Platform", PLATFORM_WIDTH),
        pad_to_width("Type", TYPE_WIDTH),
        pad_to_width("Rating", RATING_WIDTH),
        pad_to_width("Votes", VOTES_WIDTH),
        pad_to_width("Review", excerpt_width),
    )
}

fn row_line(review: &Review, excerpt_width: usize) -> String {
    let date = review
        .published_date
        .map_or_else(|| "(no date)".to_owned(), |d| d.to_string());
    let platform = review.platform.as_deref().unwrap_or("-");
    let review_type = review.review_type.as_deref().unwrap_or("-");
    let rating = review
        .rating
        .map_or_else(|| "-".to_owned(), |r| r.to_string());
    let votes = review
        .helpful_votes
        .map_or_else(|| "-".to_owned(), |v| v.to_string());

    format!(
        "{}{}{}{}{}{}\n",
        pad_to_width(&date, DATE_WIDTH),
        pad_to_width(platform, PLATFORM_WIDTH),
        pad_to_width(review_type, TYPE_WIDTH),
        pad_to_width(&rating, RATING_WIDTH),
        pad_to_width(&votes, VOTES_WIDTH),
        fit_to_width(&excerpt(review), excerpt_width),
    )
}

/// Builds the excerpt from title and body, first line only.
fn excerpt(review: &Review) -> String {
    let title = review.title.as_deref().unwrap_or("").trim();
    let body = review.body.as_deref().unwrap_or("").trim();
    let joined = if title.is_empty() {
        body.to_owned()
    } else if body.is_empty() {
        title.to_owned()
    } else {
        format!("{title}: {body}")
    };
    joined.lines().next().unwrap_or("").to_owned()
}
