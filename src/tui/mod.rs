//! Terminal dashboard for review analytics.
//!
//! This module provides the interactive dashboard built on the
//! bubbletea-rs framework.
//!
//! # Architecture
//!
//! The dashboard follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::DashboardApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Filter-control focus management
//! - [`components`]: Panel renderers (tiles, charts, clouds, table)
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, we use a module-level storage pattern for initial data. Call
//! [`set_initial_dashboard`] before starting the program, and
//! `DashboardApp::init()` will automatically retrieve the dataset and the
//! seeded query.

use std::sync::{Arc, OnceLock};

use crate::analytics::ReviewQuery;
use crate::dataset::Dataset;

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::DashboardApp;

/// Global storage for the initial dataset and seeded query.
///
/// This is set before the TUI program starts and read by
/// `DashboardApp::init()`.
static INITIAL_DASHBOARD: OnceLock<(Arc<Dataset>, ReviewQuery)> = OnceLock::new();

/// Sets the dataset and seeded query for the dashboard application.
///
/// This must be called before starting the bubbletea-rs program. The data
/// will be read by `DashboardApp::init()` when the program starts.
///
/// # Returns
///
/// `true` if the data was set, `false` if it was already set.
pub fn set_initial_dashboard(dataset: Arc<Dataset>, query: ReviewQuery) -> bool {
    INITIAL_DASHBOARD.set((dataset, query)).is_ok()
}

/// Gets a clone of the initial dashboard data from storage.
///
/// Called internally by `DashboardApp::init()`. Returns an empty dataset
/// and a default query when nothing was stored, so the program still
/// starts (showing the empty-state notice).
pub(crate) fn get_initial_dashboard() -> (Arc<Dataset>, ReviewQuery) {
    INITIAL_DASHBOARD.get().cloned().unwrap_or_else(|| {
        (Arc::new(Dataset::new(Vec::new())), ReviewQuery::default())
    })
}
