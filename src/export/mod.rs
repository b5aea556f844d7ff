//! Report export in structured formats.
//!
//! Exports run the same pipeline as the dashboard — filters, summary,
//! histogram, trend, keywords, recent rows — and render the result as
//! Markdown (via the template engine) or JSON for scripts and CI.

mod json;
mod markdown;
mod model;

pub use json::write_json;
pub use markdown::{render_markdown, write_markdown};
pub use model::{ExportFormat, Report, ReportRow};
