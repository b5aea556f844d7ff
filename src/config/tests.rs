//! Unit tests for configuration loading and mode resolution.

use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::json;

use crate::error::PulseError;

use super::{OperationMode, PulseConfig};

#[rstest]
fn cli_overrides_file_and_defaults() {
    let mut composer = MergeComposer::new();
    composer.push_defaults(json!({"data": "default.csv", "platform": null}));
    composer.push_file(json!({"data": "file.csv", "platform": "Mobile"}), None);
    composer.push_cli(json!({"data": "cli.csv"}));

    let config = PulseConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

    assert_eq!(config.data.as_deref(), Some("cli.csv"), "CLI wins for data");
    assert_eq!(
        config.platform.as_deref(),
        Some("Mobile"),
        "file wins for platform (no CLI override)"
    );
}

#[rstest]
fn environment_overrides_file() {
    let mut composer = MergeComposer::new();
    composer.push_file(json!({"review_type": "review"}), None);
    composer.push_environment(json!({"review_type": "question"}));

    let config = PulseConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

    assert_eq!(config.review_type.as_deref(), Some("question"));
}

#[rstest]
fn require_data_path_errors_when_unset() {
    let config = PulseConfig::default();
    assert_eq!(
        config.require_data_path(),
        Err(PulseError::MissingDataPath)
    );
}

#[rstest]
fn require_data_path_returns_configured_path() {
    let config = PulseConfig {
        data: Some("data/reviews.csv".to_owned()),
        ..Default::default()
    };
    let path = config.require_data_path().expect("path should resolve");
    assert_eq!(path.as_str(), "data/reviews.csv");
}

#[rstest]
#[case::dashboard(PulseConfig::default(), OperationMode::Dashboard)]
#[case::summary(
    PulseConfig { summary: true, ..Default::default() },
    OperationMode::Summary
)]
#[case::export(
    PulseConfig { export: Some("markdown".to_owned()), ..Default::default() },
    OperationMode::Export
)]
#[case::export_wins_over_summary(
    PulseConfig { export: Some("json".to_owned()), summary: true, ..Default::default() },
    OperationMode::Export
)]
fn operation_mode_resolution(#[case] config: PulseConfig, #[case] expected: OperationMode) {
    assert_eq!(config.operation_mode(), expected);
}

#[rstest]
fn dates_parse_from_iso_strings() {
    let config = PulseConfig {
        start_date: Some("2024-01-15".to_owned()),
        end_date: Some("2024-06-30".to_owned()),
        ..Default::default()
    };
    let start = config.parse_start_date().expect("start should parse");
    let end = config.parse_end_date().expect("end should parse");
    assert_eq!(start.map(|d| d.to_string()), Some("2024-01-15".to_owned()));
    assert_eq!(end.map(|d| d.to_string()), Some("2024-06-30".to_owned()));
}

#[rstest]
#[case("2024/01/15")]
#[case("15-01-2024")]
#[case("yesterday")]
fn malformed_dates_are_rejected(#[case] raw: &str) {
    let config = PulseConfig {
        start_date: Some(raw.to_owned()),
        ..Default::default()
    };
    assert_eq!(
        config.parse_start_date(),
        Err(PulseError::InvalidDate {
            value: raw.to_owned()
        })
    );
}

#[rstest]
fn unset_dates_parse_to_none() {
    let config = PulseConfig::default();
    assert_eq!(config.parse_start_date(), Ok(None));
    assert_eq!(config.parse_end_date(), Ok(None));
}
