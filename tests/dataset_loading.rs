//! Integration tests for CSV loading, coercion, and caching.

use std::io::Write;
use std::sync::Arc;

use camino::Utf8PathBuf;
use revpulse::load_dataset;
use tempfile::NamedTempFile;

const DIRTY_CSV: &str = "\
published_date,published_platform,type,rating,title,text,helpful_votes
2024-03-05T09:30:00+00:00,Desktop,review,5.0,Wonderful crew,Smooth boarding and great meals.,3
2024-02-18 14:00:00,Mobile,review,not-a-number,Fine,Average experience overall.,
garbage-date,Desktop,question,4,Seat question,Is seat 31A a bulkhead seat?,0
2023-12-28,,review,6,Out of range,Rating above scale is dropped.,1
";

fn write_csv(content: &str) -> (NamedTempFile, Utf8PathBuf) {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write csv");
    let path = Utf8PathBuf::from_path_buf(file.path().to_path_buf()).expect("utf-8 path");
    (file, path)
}

#[test]
fn dirty_cells_coerce_to_none_without_dropping_rows() {
    let (_guard, path) = write_csv(DIRTY_CSV);
    let dataset = load_dataset(&path).expect("dataset loads");

    assert_eq!(dataset.len(), 4);

    let reviews = dataset.reviews();
    let first = reviews.first().expect("first row");
    assert_eq!(first.rating, Some(5));
    assert_eq!(first.platform.as_deref(), Some("Desktop"));
    assert!(first.published_at.is_some());
    assert_eq!(first.helpful_votes, Some(3));

    let second = reviews.get(1).expect("second row");
    assert_eq!(second.rating, None);
    assert!(second.published_at.is_some());
    assert_eq!(second.helpful_votes, None);

    let third = reviews.get(2).expect("third row");
    assert_eq!(third.rating, Some(4));
    assert_eq!(third.published_at, None);
    assert_eq!(third.published_date, None);

    let fourth = reviews.get(3).expect("fourth row");
    assert_eq!(fourth.rating, None);
    assert_eq!(fourth.platform, None);
}

#[test]
fn selector_options_are_distinct_and_sorted() {
    let (_guard, path) = write_csv(DIRTY_CSV);
    let dataset = load_dataset(&path).expect("dataset loads");

    assert_eq!(dataset.platforms(), ["Desktop", "Mobile"]);
    assert_eq!(dataset.review_types(), ["question", "review"]);
}

#[test]
fn repeated_loads_share_one_parsed_dataset() {
    let (_guard, path) = write_csv(DIRTY_CSV);
    let first = load_dataset(&path).expect("first load");
    let second = load_dataset(&path).expect("second load");

    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn missing_file_reports_the_path() {
    let path = Utf8PathBuf::from("/nonexistent/reviews.csv");
    let error = load_dataset(&path).expect_err("missing file fails");
    assert!(error.to_string().contains("/nonexistent/reviews.csv"));
}
