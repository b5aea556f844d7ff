//! Review dataset loading and domain models.
//!
//! The loader reads a CSV export of airline reviews, coerces date and
//! rating columns to their semantic types (unparseable values become null
//! rather than failing the load), and caches the result by path for the
//! process lifetime.

mod loader;
mod model;

pub use loader::{Dataset, load_dataset, read_reviews};
pub use model::Review;
