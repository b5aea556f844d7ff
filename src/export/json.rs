//! JSON report writer.
//!
//! Serialises the full report document as pretty-printed JSON, suitable
//! for downstream processing.

use std::io::Write;

use crate::error::PulseError;

use super::model::Report;

/// Writes the report as pretty-printed JSON to the given writer.
///
/// # Errors
///
/// Returns [`PulseError::Serialization`] when serialisation fails and
/// [`PulseError::Io`] when writing fails.
pub fn write_json<W: Write>(writer: &mut W, report: &Report) -> Result<(), PulseError> {
    serde_json::to_writer_pretty(&mut *writer, report).map_err(|error| {
        PulseError::Serialization {
            message: error.to_string(),
        }
    })?;
    writeln!(writer).map_err(|error| PulseError::io(&error))
}
