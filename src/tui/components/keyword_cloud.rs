//! Keyword cloud panels for the sentiment buckets.
//!
//! A terminal stand-in for the word-cloud image: the top terms are laid
//! out as `term x count` tokens, wrapped to the panel width, with the
//! top-frequency tier rendered in capitals for visual weight.

use unicode_width::UnicodeWidthStr;

use crate::analytics::{SentimentBucket, TermCount};

/// Number of terms shown per cloud.
const CLOUD_TERM_LIMIT: usize = 12;

/// Renders a keyword cloud for one sentiment bucket.
///
/// An empty term list renders the informational placeholder instead of a
/// cloud.
#[must_use]
pub fn view(bucket: SentimentBucket, terms: &[TermCount], width: usize) -> String {
    let mut output = format!("{}\n", bucket.label());
    if terms.is_empty() {
        output.push_str(&format!(
            "No {} review text available for the current filters.\n",
            sentiment_word(bucket)
        ));
        return output;
    }

    let max_count = terms.first().map_or(1, |term| term.count.max(1));
    let tokens: Vec<String> = terms
        .iter()
        .take(CLOUD_TERM_LIMIT)
        .map(|term| render_term(term, max_count))
        .collect();
    output.push_str(&wrap_tokens(&tokens, width.max(20)));
    output
}

/// Lowercase sentiment word for the placeholder text.
const fn sentiment_word(bucket: SentimentBucket) -> &'static str {
    match bucket {
        SentimentBucket::Positive => "positive",
        SentimentBucket::Negative => "negative",
    }
}

/// Renders one term token, capitalising the top-frequency tier.
fn render_term(term: &TermCount, max_count: usize) -> String {
    // Terms at half the peak frequency or above form the top tier.
    if term.count * 2 >= max_count {
        format!("{} x{}", term.term.to_uppercase(), term.count)
    } else {
        format!("{} x{}", term.term, term.count)
    }
}

/// Wraps tokens into lines no wider than the panel.
fn wrap_tokens(tokens: &[String], width: usize) -> String {
    let mut output = String::new();
    let mut line_width = 0;
    for token in tokens {
        let token_width = token.width();
        if line_width > 0 && line_width + token_width + 3 > width {
            output.push('\n');
            line_width = 0;
        } else if line_width > 0 {
            output.push_str(" · ");
            line_width += 3;
        }
        output.push_str(token);
        line_width += token_width;
    }
    output.push('\n');
    output
}
