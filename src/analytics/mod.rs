//! Filtering and aggregation over the loaded review dataset.
//!
//! Everything in this module is a pure function of the filtered row set:
//!
//! - [`query`]: the conjunction of filter predicates
//! - [`summary`]: count, mean, median, and sentiment shares
//! - [`trend`]: monthly review-volume bucketing
//! - [`corpus`]: keyword corpora and term frequencies
//! - [`recent`]: newest-first row selection for the table

pub mod corpus;
pub mod query;
pub mod recent;
pub mod summary;
pub mod trend;

pub use corpus::{SentimentBucket, TermCount, bucket_rows, build_corpus, term_frequencies};
pub use query::ReviewQuery;
pub use recent::{RECENT_LIMIT, recent_reviews};
pub use summary::{RatingCount, Summary, rating_histogram};
pub use trend::{MonthlyCount, monthly_volume};
