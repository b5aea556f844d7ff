//! Panel renderers for the dashboard.
//!
//! Each component is a pure `view` function from analytics output to a
//! string, so panels can be tested without a terminal.

pub mod bar_chart;
pub mod keyword_cloud;
pub mod metric_tiles;
pub mod review_table;
pub mod trend_chart;

pub(crate) mod text_truncate;
