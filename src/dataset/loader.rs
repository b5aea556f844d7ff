//! CSV dataset ingestion with a process-wide load cache.
//!
//! Loading parses every record leniently (field failures coerce to null,
//! per [`super::model`]) and derives the selector options and default
//! filter bounds from the parsed rows. Loaded datasets are cached by path
//! for the lifetime of the process, so re-entering the pipeline with the
//! same path is free.

use std::collections::HashMap;
use std::io::Read;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{Months, NaiveDate};

use crate::error::PulseError;

use super::model::{CsvReview, Review};

/// Default rating bounds when the dataset has no rated rows.
const DEFAULT_RATING_BOUNDS: (u8, u8) = (1, 5);

/// Span of the default date window, in months before the newest review.
const DEFAULT_WINDOW_MONTHS: u32 = 12;

/// A loaded, immutable review dataset with derived selector metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    reviews: Vec<Review>,
    platforms: Vec<String>,
    review_types: Vec<String>,
}

impl Dataset {
    /// Builds a dataset from parsed rows, deriving selector options.
    #[must_use]
    pub fn new(reviews: Vec<Review>) -> Self {
        let platforms = distinct_sorted(reviews.iter().filter_map(|r| r.platform.as_deref()));
        let review_types = distinct_sorted(reviews.iter().filter_map(|r| r.review_type.as_deref()));
        Self {
            reviews,
            platforms,
            review_types,
        }
    }

    /// All loaded reviews, in file order.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Number of loaded reviews.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Returns true when the dataset holds no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Sorted distinct platform values, for the platform selector.
    #[must_use]
    pub fn platforms(&self) -> &[String] {
        &self.platforms
    }

    /// Sorted distinct review-type values, for the type selector.
    #[must_use]
    pub fn review_types(&self) -> &[String] {
        &self.review_types
    }

    /// Minimum and maximum observed rating, defaulting to 1–5 when no row
    /// carries a rating.
    #[must_use]
    pub fn rating_bounds(&self) -> (u8, u8) {
        let mut ratings = self.reviews.iter().filter_map(|r| r.rating);
        let Some(first) = ratings.next() else {
            return DEFAULT_RATING_BOUNDS;
        };
        ratings.fold((first, first), |(lo, hi), rating| {
            (lo.min(rating), hi.max(rating))
        })
    }

    /// Earliest and latest review dates, when any row carries a timestamp.
    #[must_use]
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.reviews.iter().filter_map(|r| r.published_date);
        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), date| {
            (lo.min(date), hi.max(date))
        }))
    }

    /// Default date window: the last twelve months of data, clamped to the
    /// dataset's earliest date.
    #[must_use]
    pub fn default_date_window(&self) -> Option<(NaiveDate, NaiveDate)> {
        let (min_date, max_date) = self.date_bounds()?;
        let start = max_date
            .checked_sub_months(Months::new(DEFAULT_WINDOW_MONTHS))
            .map_or(min_date, |candidate| candidate.max(min_date));
        Some((start, max_date))
    }
}

/// Collects distinct values from an iterator of string slices, sorted.
fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut collected: Vec<String> = values.map(str::to_owned).collect();
    collected.sort();
    collected.dedup();
    collected
}

/// Process-wide dataset cache, keyed by input path.
static CACHE: OnceLock<Mutex<HashMap<Utf8PathBuf, Arc<Dataset>>>> = OnceLock::new();

fn cache() -> MutexGuard<'static, HashMap<Utf8PathBuf, Arc<Dataset>>> {
    let lock = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    // The cache holds immutable data, so a poisoned lock is still usable.
    match lock.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Loads the dataset at `path`, reusing a cached copy when available.
///
/// The underlying data is read-only for the process lifetime, so sharing
/// the cached [`Dataset`] across callers is safe.
///
/// # Errors
///
/// Returns [`PulseError::DataFile`] when the file cannot be opened and
/// [`PulseError::Csv`] when a record is structurally malformed.
pub fn load_dataset(path: &Utf8Path) -> Result<Arc<Dataset>, PulseError> {
    if let Some(cached) = cache().get(path) {
        tracing::debug!("dataset cache hit for '{path}'");
        return Ok(Arc::clone(cached));
    }

    let dataset = Arc::new(load_uncached(path)?);
    cache().insert(path.to_owned(), Arc::clone(&dataset));
    Ok(dataset)
}

/// Loads and parses the dataset without consulting the cache.
fn load_uncached(path: &Utf8Path) -> Result<Dataset, PulseError> {
    let file = std::fs::File::open(path).map_err(|error| PulseError::DataFile {
        path: path.to_string(),
        message: error.to_string(),
    })?;
    let dataset = read_reviews(file)?;
    if dataset.is_empty() {
        tracing::warn!("dataset '{path}' contains no rows");
    }
    tracing::debug!(
        rows = dataset.len(),
        platforms = dataset.platforms().len(),
        "loaded dataset from '{path}'"
    );
    Ok(dataset)
}

/// Parses reviews from any CSV reader.
///
/// # Errors
///
/// Returns [`PulseError::Csv`] when a record cannot be decoded at all.
/// Field-level failures degrade to null values instead.
pub fn read_reviews<R: Read>(reader: R) -> Result<Dataset, PulseError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let mut reviews = Vec::new();
    for record in csv_reader.deserialize::<CsvReview>() {
        let row = record.map_err(|error| PulseError::Csv {
            message: error.to_string(),
        })?;
        reviews.push(Review::from(row));
    }
    Ok(Dataset::new(reviews))
}
