//! Integration tests for report building and rendering.

use revpulse::export::{render_markdown, write_json};
use revpulse::testing::sample_reviews;
use revpulse::{Report, ReviewQuery};

#[test]
fn markdown_report_carries_every_section() {
    let reviews = sample_reviews();
    let report = Report::build(&reviews, &ReviewQuery::default());
    let rendered = render_markdown(&report).expect("markdown renders");

    assert!(rendered.contains("# Review Pulse Report"));
    assert!(rendered.contains("## Metrics"));
    assert!(rendered.contains("## Rating Distribution"));
    assert!(rendered.contains("## Review Volume"));
    assert!(rendered.contains("## Keyword Clouds"));
    assert!(rendered.contains("## Recent Reviews"));
}

#[test]
fn empty_report_renders_the_notice_instead_of_sections() {
    let reviews = sample_reviews();
    let query = ReviewQuery::new(Some("Kiosk".to_owned()), None, (1, 5), None);
    let report = Report::build(&reviews, &query);
    let rendered = render_markdown(&report).expect("markdown renders");

    assert!(report.empty);
    assert!(rendered.contains("No reviews match the current filters."));
    assert!(!rendered.contains("## Metrics"));
}

#[test]
fn json_report_round_trips_headline_numbers() {
    let reviews = sample_reviews();
    let report = Report::build(&reviews, &ReviewQuery::default());

    let mut buffer = Vec::new();
    write_json(&mut buffer, &report).expect("json renders");
    let parsed: serde_json::Value = serde_json::from_slice(&buffer).expect("valid JSON");

    assert_eq!(parsed["summary"]["total"], serde_json::json!(6));
    assert_eq!(parsed["filters"], serde_json::json!(report.filters));
    assert!(parsed["recent"].as_array().is_some());
}

#[test]
fn report_filters_echo_the_query_description() {
    let reviews = sample_reviews();
    let query = ReviewQuery::new(Some("Desktop".to_owned()), None, (2, 5), None);
    let report = Report::build(&reviews, &query);

    assert_eq!(report.filters, query.describe());
}
