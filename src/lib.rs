//! Review Pulse library crate providing review analytics.
//!
//! The library loads a static CSV of customer reviews, filters it with a
//! composable query, and derives summary metrics, monthly volume,
//! sentiment-bucketed keyword clouds, and a most-recent listing. The TUI
//! dashboard and the one-shot report exporters sit on top of the same
//! analytics layer.

pub mod analytics;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod telemetry;
pub mod tui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use analytics::{ReviewQuery, Summary};
pub use config::{OperationMode, PulseConfig};
pub use dataset::{Dataset, Review, load_dataset};
pub use error::PulseError;
pub use export::{ExportFormat, Report};
