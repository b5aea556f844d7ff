//! Error types surfaced by the dashboard pipeline.

use thiserror::Error;

/// Errors surfaced while loading data, resolving configuration, or rendering.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PulseError {
    /// The CLI did not include a dataset path.
    #[error("dataset path is required (use --data or -d)")]
    MissingDataPath,

    /// The dataset file could not be opened or read.
    #[error("failed to read dataset '{path}': {message}")]
    DataFile {
        /// Path of the dataset that failed to open.
        path: String,
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// A CSV record could not be decoded at all.
    ///
    /// Field-level coercion failures degrade to null values instead; this
    /// variant covers structural problems such as malformed quoting.
    #[error("malformed CSV record: {message}")]
    Csv {
        /// Error detail from the CSV reader.
        message: String,
    },

    /// Configuration could not be loaded or validated.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// A date argument was not in `YYYY-MM-DD` form.
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input value.
        value: String,
    },

    /// Report template rendering failed.
    #[error("template error: {message}")]
    Template {
        /// Error detail from the template engine.
        message: String,
    },

    /// Report serialisation failed.
    #[error("serialisation error: {message}")]
    Serialization {
        /// Error detail from the serialiser.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The terminal dashboard failed to start or crashed.
    #[error("dashboard error: {message}")]
    Dashboard {
        /// Error detail from the TUI runtime.
        message: String,
    },
}

impl PulseError {
    /// Wraps an I/O error with its message.
    #[must_use]
    pub fn io(error: &std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
