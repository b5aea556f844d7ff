//! Keyword corpora and term frequencies for the sentiment clouds.
//!
//! For each sentiment bucket the title and body of every row are joined
//! (null-safe) into one corpus string, then tokenised into lowercase
//! single-word terms. A standard English stopword list plus a fixed domain
//! set (carrier and filler terms) is excluded. Multi-word phrases are not
//! detected.

use std::collections::HashMap;

use serde::Serialize;

use crate::dataset::Review;

/// Sentiment buckets derived from the star rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentBucket {
    /// Ratings 4–5.
    Positive,
    /// Ratings 1–2.
    Negative,
}

impl SentimentBucket {
    /// Inclusive rating bounds for the bucket.
    #[must_use]
    pub const fn rating_bounds(self) -> (u8, u8) {
        match self {
            Self::Positive => (4, 5),
            Self::Negative => (1, 2),
        }
    }

    /// Display label for panel headings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive Reviews (4-5)",
            Self::Negative => "Negative Reviews (1-2)",
        }
    }
}

/// A term and its occurrence count within a corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    /// Lowercased single-word term.
    pub term: String,
    /// Occurrences in the corpus.
    pub count: usize,
}

/// Selects the rows belonging to a sentiment bucket.
///
/// Rating 3 is neutral and belongs to neither bucket; unrated rows belong
/// to neither bucket.
#[must_use]
pub fn bucket_rows<'a>(rows: &[&'a Review], bucket: SentimentBucket) -> Vec<&'a Review> {
    let (lo, hi) = bucket.rating_bounds();
    rows.iter()
        .copied()
        .filter(|review| {
            review
                .rating
                .is_some_and(|rating| rating >= lo && rating <= hi)
        })
        .collect()
}

/// Concatenates title and body text for every row into one corpus string.
///
/// Missing titles and bodies contribute nothing; the result is
/// whitespace-joined and trimmed, and empty when no row carries text.
#[must_use]
pub fn build_corpus(rows: &[&Review]) -> String {
    let mut corpus = String::new();
    for review in rows {
        for text in [review.title.as_deref(), review.body.as_deref()] {
            let Some(fragment) = text else {
                continue;
            };
            if fragment.trim().is_empty() {
                continue;
            }
            if !corpus.is_empty() {
                corpus.push(' ');
            }
            corpus.push_str(fragment.trim());
        }
    }
    corpus
}

/// Tokenises a corpus and counts term frequencies, descending.
///
/// Terms are lowercased, punctuation-delimited words of at least two
/// characters; stopwords are excluded. Ties break alphabetically so the
/// ordering is deterministic.
#[must_use]
pub fn term_frequencies(corpus: &str) -> Vec<TermCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in tokenize(corpus) {
        if is_stopword(&token) {
            continue;
        }
        *counts.entry(token).or_insert(0) += 1;
    }
    let mut frequencies: Vec<TermCount> = counts
        .into_iter()
        .map(|(term, count)| TermCount { term, count })
        .collect();
    frequencies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
    frequencies
}

/// Splits a corpus into lowercase word tokens.
///
/// Words are runs of alphanumeric characters and interior apostrophes;
/// single-character tokens are dropped.
fn tokenize(corpus: &str) -> impl Iterator<Item = String> {
    corpus
        .split(|ch: char| !ch.is_alphanumeric() && ch != '\'')
        .map(|raw| raw.trim_matches('\'').to_lowercase())
        .filter(|token| token.chars().count() >= 2)
}

/// Returns true when the term is in the English or domain stopword set.
fn is_stopword(term: &str) -> bool {
    DOMAIN_STOPWORDS.contains(&term) || ENGLISH_STOPWORDS.contains(&term)
}

/// Brand, carrier, and filler terms excluded from the clouds on top of the
/// standard English list.
const DOMAIN_STOPWORDS: &[&str] = &[
    "flight",
    "flights",
    "airline",
    "airlines",
    "singapore",
    "sia",
    "would",
    "also",
    "one",
];

/// Standard English stopword list.
const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does",
    "doesn't", "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "get",
    "had", "hadn't", "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's",
    "her", "here", "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i",
    "i'd", "i'll", "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its",
    "itself", "just", "let's", "like", "me", "more", "most", "mustn't", "my", "myself", "no",
    "nor", "not", "of", "off", "on", "once", "only", "or", "other", "ought", "our", "ours",
    "ourselves", "out", "over", "own", "same", "shan't", "she", "she'd", "she'll", "she's",
    "should", "shouldn't", "so", "some", "such", "than", "that", "that's", "the", "their",
    "theirs", "them", "themselves", "then", "there", "there's", "these", "they", "they'd",
    "they'll", "they're", "they've", "this", "those", "through", "to", "too", "under", "until",
    "up", "us", "very", "was", "wasn't", "we", "we'd", "we'll", "we're", "we've", "were",
    "weren't", "what", "what's", "when", "when's", "where", "where's", "which", "while", "who",
    "who's", "whom", "why", "why's", "will", "with", "won't", "wouldn't", "you", "you'd",
    "you'll", "you're", "you've", "your", "yours", "yourself", "yourselves",
];

#[cfg(test)]
#[path = "corpus_tests.rs"]
mod tests;
