//! One-shot report export mode.
//!
//! Builds the full report for the filtered rows and writes it as Markdown
//! or JSON to a file or to stdout.

use std::fs::File;
use std::io::{self, Write};

use camino::Utf8Path;

use revpulse::export::{Report, write_json, write_markdown};
use revpulse::{ExportFormat, PulseConfig, PulseError, load_dataset};

/// Runs the export mode.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded, the format or a
/// filter value is malformed, or the destination cannot be written.
pub fn run(config: &PulseConfig) -> Result<(), PulseError> {
    let format: ExportFormat = config
        .export
        .as_deref()
        .unwrap_or("markdown")
        .parse()?;

    let path = config.require_data_path()?;
    let dataset = load_dataset(&path)?;
    let query = super::build_query(config, &dataset)?;
    let report = Report::build(dataset.reviews(), &query);

    match config.output.as_deref() {
        Some(output) => write_to_file(Utf8Path::new(output), format, &report),
        None => write_to_stdout(format, &report),
    }
}

fn write_to_file(path: &Utf8Path, format: ExportFormat, report: &Report) -> Result<(), PulseError> {
    let mut file = File::create(path).map_err(|error| PulseError::io(&error))?;
    write_report(&mut file, format, report)
}

fn write_to_stdout(format: ExportFormat, report: &Report) -> Result<(), PulseError> {
    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, format, report)
}

fn write_report<W: Write>(
    writer: &mut W,
    format: ExportFormat,
    report: &Report,
) -> Result<(), PulseError> {
    match format {
        ExportFormat::Markdown => write_markdown(writer, report),
        ExportFormat::Json => write_json(writer, report),
    }
}

#[cfg(test)]
mod tests {
    use revpulse::ReviewQuery;
    use revpulse::testing::sample_reviews;

    use super::*;

    #[test]
    fn markdown_report_writes_to_buffer() {
        let reviews = sample_reviews();
        let report = Report::build(&reviews, &ReviewQuery::default());
        let mut buffer = Vec::new();
        write_report(&mut buffer, ExportFormat::Markdown, &report)
            .expect("markdown report should render");
        let rendered = String::from_utf8(buffer).expect("report is UTF-8");
        assert!(rendered.contains("# Review Pulse Report"));
    }

    #[test]
    fn json_report_writes_to_buffer() {
        let reviews = sample_reviews();
        let report = Report::build(&reviews, &ReviewQuery::default());
        let mut buffer = Vec::new();
        write_report(&mut buffer, ExportFormat::Json, &report).expect("json report should render");
        let parsed: serde_json::Value =
            serde_json::from_slice(&buffer).expect("report is valid JSON");
        assert_eq!(parsed["empty"], serde_json::Value::Bool(false));
    }
}
