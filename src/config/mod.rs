//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.revpulse.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `REVPULSE_DATA`, `REVPULSE_PLATFORM`, …
//! 4. **Command-line arguments** – `--data`/`-d`, `--platform`/`-p`, …
//!
//! # Configuration File
//!
//! Place `.revpulse.toml` in the current directory, home directory, or XDG
//! config directory with:
//!
//! ```toml
//! data = "data/singapore_airlines_reviews.csv"
//! platform = "Desktop"
//! min_rating = 1
//! max_rating = 5
//! start_date = "2023-06-01"
//! end_date = "2024-06-01"
//! ```

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::PulseError;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive terminal dashboard (the default).
    Dashboard,
    /// One-shot summary printed to stdout.
    Summary,
    /// One-shot report export (Markdown or JSON).
    Export,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `REVPULSE_DATA` or `--data`: Path to the review CSV
/// - `REVPULSE_PLATFORM` or `--platform`: Platform filter
/// - `REVPULSE_REVIEW_TYPE` or `--review-type`: Review-type filter
/// - `REVPULSE_MIN_RATING` / `REVPULSE_MAX_RATING`: Rating bounds
/// - `REVPULSE_START_DATE` / `REVPULSE_END_DATE`: Date bounds (YYYY-MM-DD)
/// - `REVPULSE_EXPORT` or `--export`: Export format (markdown or json)
/// - `REVPULSE_OUTPUT` or `--output`: Export destination path
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REVPULSE",
    discovery(
        dotfile_name = ".revpulse.toml",
        config_file_name = "revpulse.toml",
        app_name = "revpulse"
    )
)]
pub struct PulseConfig {
    /// Path to the review dataset CSV.
    ///
    /// Can be provided via:
    /// - CLI: `--data <PATH>` or `-d <PATH>`
    /// - Environment: `REVPULSE_DATA`
    /// - Config file: `data = "..."`
    #[ortho_config(cli_short = 'd')]
    pub data: Option<String>,

    /// Platform filter (e.g. "Desktop"); unset means all platforms.
    #[ortho_config(cli_short = 'p')]
    pub platform: Option<String>,

    /// Review-type filter (e.g. "review"); unset means all types.
    #[ortho_config(cli_short = 't')]
    pub review_type: Option<String>,

    /// Inclusive rating lower bound, 1–5.
    ///
    /// Defaults to the dataset's observed minimum rating.
    #[ortho_config()]
    pub min_rating: Option<u8>,

    /// Inclusive rating upper bound, 1–5.
    ///
    /// Defaults to the dataset's observed maximum rating.
    #[ortho_config()]
    pub max_rating: Option<u8>,

    /// Start of the date window, `YYYY-MM-DD`.
    ///
    /// Defaults to twelve months before the newest review, clamped to the
    /// dataset's earliest date. A reversed start/end pair is swapped.
    #[ortho_config()]
    pub start_date: Option<String>,

    /// End of the date window, `YYYY-MM-DD`.
    ///
    /// Defaults to the newest review date.
    #[ortho_config()]
    pub end_date: Option<String>,

    /// Export format: `markdown` (or `md`) or `json`.
    ///
    /// When set, the dashboard runs once and writes a report instead of
    /// entering the TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--export <FORMAT>`
    /// - Environment: `REVPULSE_EXPORT`
    #[ortho_config()]
    pub export: Option<String>,

    /// Export destination path; stdout when unset.
    #[ortho_config(cli_short = 'o')]
    pub output: Option<String>,

    /// Prints the one-line summary and metric values to stdout instead of
    /// entering the TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--summary`
    /// - Config file: `summary = true`
    ///
    /// Note: Environment variable `REVPULSE_SUMMARY` is not supported
    /// because `ortho_config` does not load boolean values from the
    /// environment.
    #[ortho_config()]
    pub summary: bool,

    /// Emits JSONL telemetry events to stderr.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry`
    /// - Config file: `telemetry = true`
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            data: None,
            platform: None,
            review_type: None,
            min_rating: None,
            max_rating: None,
            start_date: None,
            end_date: None,
            export: None,
            output: None,
            summary: false,
            telemetry: false,
        }
    }
}

impl PulseConfig {
    /// Returns the dataset path or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`PulseError::MissingDataPath`] when no path is configured.
    pub fn require_data_path(&self) -> Result<Utf8PathBuf, PulseError> {
        self.data
            .as_deref()
            .map(Utf8PathBuf::from)
            .ok_or(PulseError::MissingDataPath)
    }

    /// Determines the operation mode based on provided configuration.
    ///
    /// Returns `Export` when an export format is set, `Summary` when the
    /// summary flag is set, and `Dashboard` otherwise.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.export.is_some() {
            OperationMode::Export
        } else if self.summary {
            OperationMode::Summary
        } else {
            OperationMode::Dashboard
        }
    }

    /// Parses the configured start date, when present.
    ///
    /// # Errors
    ///
    /// Returns [`PulseError::InvalidDate`] when the value is not
    /// `YYYY-MM-DD`.
    pub fn parse_start_date(&self) -> Result<Option<NaiveDate>, PulseError> {
        parse_date(self.start_date.as_deref())
    }

    /// Parses the configured end date, when present.
    ///
    /// # Errors
    ///
    /// Returns [`PulseError::InvalidDate`] when the value is not
    /// `YYYY-MM-DD`.
    pub fn parse_end_date(&self) -> Result<Option<NaiveDate>, PulseError> {
        parse_date(self.end_date.as_deref())
    }
}

/// Parses an optional `YYYY-MM-DD` argument.
fn parse_date(value: Option<&str>) -> Result<Option<NaiveDate>, PulseError> {
    value
        .map(|raw| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| PulseError::InvalidDate {
                value: raw.to_owned(),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests;
