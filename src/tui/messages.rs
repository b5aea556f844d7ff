//! Message types for the dashboard update loop.
//!
//! This module defines all message types that can be sent to the
//! application's update function. Messages represent user actions and
//! system events; there is no async data loading, because the dataset is
//! read once before the program starts.

/// Messages for the dashboard application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMsg {
    // Filter-control focus
    /// Move focus to the next filter control.
    FocusNext,
    /// Move focus to the previous filter control.
    FocusPrevious,

    // Filter adjustments (act on the focused control)
    /// Step the focused control forward (next option, higher bound,
    /// later month).
    Increase,
    /// Step the focused control backward.
    Decrease,
    /// Reset every filter to its dataset-derived default.
    ResetFilters,

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}
