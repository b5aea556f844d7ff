//! Interactive TUI dashboard mode.
//!
//! This module provides the entry point for the terminal dashboard that
//! lets users adjust filters and watch the metrics, charts, and review
//! listing re-render live.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use revpulse::tui::{DashboardApp, set_initial_dashboard};
use revpulse::{PulseConfig, PulseError, load_dataset};

/// Runs the interactive dashboard.
///
/// # Errors
///
/// Returns an error if:
/// - The dataset path is missing or the file cannot be read
/// - A configured filter value is malformed
/// - The TUI fails to initialise
pub async fn run(config: &PulseConfig) -> Result<(), PulseError> {
    let path = config.require_data_path()?;
    let dataset = load_dataset(&path)?;
    let query = super::build_query(config, &dataset)?;

    // Store the dataset and query in module-level storage for
    // Model::init() to retrieve. If already set (e.g. re-running the
    // dashboard in the same process), the existing data remains.
    let _ = set_initial_dashboard(Arc::clone(&dataset), query);

    run_tui().await.map_err(|error| PulseError::Dashboard {
        message: error.to_string(),
    })?;

    Ok(())
}

/// Runs the bubbletea-rs program with the `DashboardApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // DashboardApp::init() will retrieve data from module-level storage.
    let program = Program::<DashboardApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
