//! Tests for the dashboard application model.

use super::*;

use crate::testing::sample_reviews;

fn make_app() -> DashboardApp {
    let dataset = Arc::new(Dataset::new(sample_reviews()));
    let query = ReviewQuery::default();
    DashboardApp::new(dataset, query)
}

#[test]
fn new_app_filters_on_construction() {
    let app = make_app();
    // The default query has no date window, so only the unrated sample
    // row drops out.
    assert_eq!(app.filtered_count(), 6);
}

#[test]
fn empty_app_has_no_rows() {
    let app = DashboardApp::empty();
    assert_eq!(app.filtered_count(), 0);
    assert!(app.view().contains("No reviews match the current filters."));
}

#[test]
fn focus_cycles_through_controls() {
    let mut app = make_app();
    assert_eq!(app.focus(), FilterControl::Platform);

    app.handle_message(AppMsg::FocusNext);
    assert_eq!(app.focus(), FilterControl::ReviewType);

    app.handle_message(AppMsg::FocusPrevious);
    assert_eq!(app.focus(), FilterControl::Platform);

    app.handle_message(AppMsg::FocusPrevious);
    assert_eq!(app.focus(), FilterControl::EndDate); // Wraps around
}

#[test]
fn platform_filter_cycles_through_options() {
    let mut app = make_app();
    assert_eq!(app.query().platform(), None);

    app.handle_message(AppMsg::Increase);
    assert_eq!(app.query().platform(), Some("Desktop"));

    app.handle_message(AppMsg::Increase);
    assert_eq!(app.query().platform(), Some("Mobile"));

    app.handle_message(AppMsg::Increase);
    assert_eq!(app.query().platform(), None); // Back to the wildcard
}

#[test]
fn platform_filter_narrows_rows() {
    let mut app = make_app();
    let all = app.filtered_count();

    app.handle_message(AppMsg::Increase); // Desktop
    assert!(app.filtered_count() < all);
    assert!(
        app.filtered_reviews()
            .iter()
            .all(|review| review.platform.as_deref() == Some("Desktop"))
    );
}

#[test]
fn rating_lower_bound_clamps_to_upper() {
    let mut app = make_app();
    app.handle_message(AppMsg::FocusNext); // ReviewType
    app.handle_message(AppMsg::FocusNext); // RatingLo

    for _ in 0..10 {
        app.handle_message(AppMsg::Increase);
    }
    assert_eq!(app.query().rating_range(), (5, 5));

    for _ in 0..10 {
        app.handle_message(AppMsg::Decrease);
    }
    assert_eq!(app.query().rating_range(), (1, 5));
}

#[test]
fn rating_upper_bound_clamps_to_lower() {
    let mut app = make_app();
    app.handle_message(AppMsg::FocusNext); // ReviewType
    app.handle_message(AppMsg::FocusNext); // RatingLo
    app.handle_message(AppMsg::FocusNext); // RatingHi

    for _ in 0..10 {
        app.handle_message(AppMsg::Decrease);
    }
    assert_eq!(app.query().rating_range(), (1, 1));

    for _ in 0..10 {
        app.handle_message(AppMsg::Increase);
    }
    assert_eq!(app.query().rating_range(), (1, 5));
}

#[test]
fn date_window_steps_stay_inside_dataset_bounds() {
    let dataset = Arc::new(Dataset::new(sample_reviews()));
    let query = DashboardApp::default_query(&dataset);
    let mut app = DashboardApp::new(Arc::clone(&dataset), query);

    app.handle_message(AppMsg::FocusPrevious); // Wrap back to EndDate
    app.handle_message(AppMsg::FocusPrevious);
    assert_eq!(app.focus(), FilterControl::StartDate);

    let (dataset_min, dataset_max) = dataset.date_bounds().expect("sample data has dates");
    for _ in 0..30 {
        app.handle_message(AppMsg::Decrease);
    }
    let (start, _) = app.query().date_range().expect("window stays active");
    assert_eq!(start, dataset_min);

    app.handle_message(AppMsg::FocusNext);
    assert_eq!(app.focus(), FilterControl::EndDate);
    for _ in 0..30 {
        app.handle_message(AppMsg::Increase);
    }
    let (_, end) = app.query().date_range().expect("window stays active");
    assert_eq!(end, dataset_max);
}

#[test]
fn window_before_the_dataset_steps_without_panicking() {
    use chrono::NaiveDate;

    let dataset = Arc::new(Dataset::new(sample_reviews()));
    // Window entirely before the earliest review (2023-12-28).
    let query = ReviewQuery::new(
        None,
        None,
        (1, 5),
        Some((
            NaiveDate::from_ymd_opt(2020, 1, 1).expect("ymd"),
            NaiveDate::from_ymd_opt(2020, 12, 31).expect("ymd"),
        )),
    );
    let mut app = DashboardApp::new(dataset, query);

    app.handle_message(AppMsg::FocusPrevious); // EndDate
    app.handle_message(AppMsg::FocusPrevious); // StartDate
    app.handle_message(AppMsg::Increase);
    app.handle_message(AppMsg::Decrease);

    let (start, end) = app.query().date_range().expect("window stays active");
    assert!(start <= end);
}

#[test]
fn window_after_the_dataset_steps_without_panicking() {
    use chrono::NaiveDate;

    let dataset = Arc::new(Dataset::new(sample_reviews()));
    // Window entirely after the latest review (2024-03-05).
    let query = ReviewQuery::new(
        None,
        None,
        (1, 5),
        Some((
            NaiveDate::from_ymd_opt(2030, 1, 1).expect("ymd"),
            NaiveDate::from_ymd_opt(2030, 6, 30).expect("ymd"),
        )),
    );
    let mut app = DashboardApp::new(dataset, query);

    app.handle_message(AppMsg::FocusPrevious); // EndDate
    app.handle_message(AppMsg::Increase);
    app.handle_message(AppMsg::Decrease);

    let (start, end) = app.query().date_range().expect("window stays active");
    assert!(start <= end);
}

#[test]
fn reset_restores_dataset_defaults() {
    let dataset = Arc::new(Dataset::new(sample_reviews()));
    let mut app = DashboardApp::new(Arc::clone(&dataset), ReviewQuery::default());

    app.handle_message(AppMsg::Increase); // Narrow to Desktop
    assert!(app.query().platform().is_some());

    app.handle_message(AppMsg::ResetFilters);
    assert_eq!(app.query().platform(), None);
    assert_eq!(app.query().rating_range(), dataset.rating_bounds());
    assert_eq!(app.query().date_range(), dataset.default_date_window());
}

#[test]
fn quit_produces_a_command() {
    let mut app = make_app();
    let cmd = app.handle_message(AppMsg::Quit);
    assert!(cmd.is_some());
}

#[test]
fn help_overlay_toggles() {
    let mut app = make_app();
    assert!(!app.view().contains("Keyboard Shortcuts"));

    app.handle_message(AppMsg::ToggleHelp);
    assert!(app.view().contains("Keyboard Shortcuts"));

    app.handle_message(AppMsg::ToggleHelp);
    assert!(!app.view().contains("Keyboard Shortcuts"));
}

#[test]
fn resize_updates_dimensions() {
    let mut app = make_app();
    app.handle_message(AppMsg::WindowResized {
        width: 120,
        height: 48,
    });
    assert!(app.view().contains("Review Pulse"));
}

#[test]
fn view_renders_every_panel() {
    let app = make_app();
    let view = app.view();

    assert!(view.contains("Review Pulse"));
    assert!(view.contains("Rating"));
    assert!(view.contains("Positive Reviews (4-5)"));
    assert!(view.contains("Negative Reviews (1-2)"));
    assert!(view.contains("q:quit"));
}
