//! Main dashboard application model implementing the MVU pattern.
//!
//! The model holds the loaded dataset, the active query, and a cached
//! list of filtered row indices. Every filter adjustment rebuilds the
//! cache and the whole view re-renders from the filtered set.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::{Cmd, Model};
use chrono::Months;

use crate::analytics::{
    RECENT_LIMIT, ReviewQuery, SentimentBucket, Summary, bucket_rows, build_corpus,
    monthly_volume, rating_histogram, recent_reviews, term_frequencies,
};
use crate::dataset::{Dataset, Review};

use super::components::{bar_chart, keyword_cloud, metric_tiles, review_table, trend_chart};
use super::input::map_key_to_message;
use super::messages::AppMsg;
use super::state::{FilterControl, cycle_option};

/// Main application model for the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardApp {
    /// The loaded dataset (read-only, shared).
    dataset: Arc<Dataset>,
    /// Active filter query.
    query: ReviewQuery,
    /// Cached indices of rows matching the current query.
    /// Invalidated whenever the query changes.
    filtered_indices: Vec<usize>,
    /// Currently focused filter control.
    focus: FilterControl,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    show_help: bool,
}

impl DashboardApp {
    /// Creates an application over a dataset with a seeded query.
    #[must_use]
    pub fn new(dataset: Arc<Dataset>, query: ReviewQuery) -> Self {
        let mut app = Self {
            dataset,
            query,
            filtered_indices: Vec::new(),
            focus: FilterControl::default(),
            width: 100,
            height: 30,
            show_help: false,
        };
        app.rebuild_filter_cache();
        app
    }

    /// Creates an application over an empty dataset.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Arc::new(Dataset::new(Vec::new())), ReviewQuery::default())
    }

    /// The default query for a dataset: wildcards everywhere, rating
    /// bounds from the data, and the last-twelve-months date window.
    #[must_use]
    pub fn default_query(dataset: &Dataset) -> ReviewQuery {
        ReviewQuery::new(
            None,
            None,
            dataset.rating_bounds(),
            dataset.default_date_window(),
        )
    }

    /// Returns the currently filtered reviews.
    #[must_use]
    pub fn filtered_reviews(&self) -> Vec<&Review> {
        self.filtered_indices
            .iter()
            .filter_map(|&index| self.dataset.reviews().get(index))
            .collect()
    }

    /// Returns the count of filtered reviews.
    #[must_use]
    pub const fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// Returns the active query.
    #[must_use]
    pub const fn query(&self) -> &ReviewQuery {
        &self.query
    }

    /// Returns the focused filter control.
    #[must_use]
    pub const fn focus(&self) -> FilterControl {
        self.focus
    }

    /// Rebuilds the filtered-index cache from the current query.
    fn rebuild_filter_cache(&mut self) {
        self.filtered_indices = self
            .dataset
            .reviews()
            .iter()
            .enumerate()
            .filter(|(_, review)| self.query.matches(review))
            .map(|(index, _)| index)
            .collect();
    }

    /// Handles a message and updates state accordingly.
    pub fn handle_message(&mut self, msg: AppMsg) -> Option<Cmd> {
        match msg {
            // Focus movement
            AppMsg::FocusNext => {
                self.focus = self.focus.next();
                None
            }
            AppMsg::FocusPrevious => {
                self.focus = self.focus.previous();
                None
            }

            // Filter adjustments
            AppMsg::Increase => self.handle_step(true),
            AppMsg::Decrease => self.handle_step(false),
            AppMsg::ResetFilters => self.handle_reset(),

            // Application lifecycle
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }

            // Window events
            AppMsg::WindowResized { width, height } => {
                self.width = width;
                self.height = height;
                None
            }
        }
    }

    /// Steps the focused control and rebuilds the filter cache.
    fn handle_step(&mut self, forward: bool) -> Option<Cmd> {
        match self.focus {
            FilterControl::Platform => {
                let stepped =
                    cycle_option(self.query.platform(), self.dataset.platforms(), forward);
                self.query.set_platform(stepped);
            }
            FilterControl::ReviewType => {
                let stepped =
                    cycle_option(self.query.review_type(), self.dataset.review_types(), forward);
                self.query.set_review_type(stepped);
            }
            FilterControl::RatingLo => self.step_rating_lo(forward),
            FilterControl::RatingHi => self.step_rating_hi(forward),
            FilterControl::StartDate => self.step_start_date(forward),
            FilterControl::EndDate => self.step_end_date(forward),
        }
        self.rebuild_filter_cache();
        None
    }

    /// Raises or lowers the rating lower bound within `1..=hi`.
    fn step_rating_lo(&mut self, forward: bool) {
        let (lo, hi) = self.query.rating_range();
        let stepped = if forward {
            lo.saturating_add(1).min(hi)
        } else {
            lo.saturating_sub(1).max(1)
        };
        self.query.set_rating_range(stepped, hi);
    }

    /// Raises or lowers the rating upper bound within `lo..=5`.
    fn step_rating_hi(&mut self, forward: bool) {
        let (lo, hi) = self.query.rating_range();
        let stepped = if forward {
            hi.saturating_add(1).min(5)
        } else {
            hi.saturating_sub(1).max(lo)
        };
        self.query.set_rating_range(lo, stepped);
    }

    /// Shifts the start of the date window by one month, clamped to the
    /// dataset's date bounds. No-op when the dataset carries no dates.
    fn step_start_date(&mut self, forward: bool) {
        let Some((dataset_min, _)) = self.dataset.date_bounds() else {
            return;
        };
        let Some((start, end)) = self.query.date_range() else {
            self.query.set_date_range(self.dataset.default_date_window());
            return;
        };
        let shifted = if forward {
            start.checked_add_months(Months::new(1)).unwrap_or(start)
        } else {
            start.checked_sub_months(Months::new(1)).unwrap_or(start)
        };
        // A seeded window can sit entirely outside the dataset's bounds,
        // so the clamp floor must never exceed the window end.
        let clamped = shifted.clamp(dataset_min.min(end), end);
        self.query.set_date_range(Some((clamped, end)));
    }

    /// Shifts the end of the date window by one month, clamped to the
    /// dataset's date bounds. No-op when the dataset carries no dates.
    fn step_end_date(&mut self, forward: bool) {
        let Some((_, dataset_max)) = self.dataset.date_bounds() else {
            return;
        };
        let Some((start, end)) = self.query.date_range() else {
            self.query.set_date_range(self.dataset.default_date_window());
            return;
        };
        let shifted = if forward {
            end.checked_add_months(Months::new(1)).unwrap_or(end)
        } else {
            end.checked_sub_months(Months::new(1)).unwrap_or(end)
        };
        // Mirror of step_start_date: the ceiling must never fall below
        // the window start.
        let clamped = shifted.clamp(start, dataset_max.max(start));
        self.query.set_date_range(Some((start, clamped)));
    }

    /// Resets every filter to its dataset-derived default.
    fn handle_reset(&mut self) -> Option<Cmd> {
        self.query = Self::default_query(&self.dataset);
        self.rebuild_filter_cache();
        None
    }

    /// Renders the header bar.
    fn render_header(&self) -> String {
        let count = self.filtered_count();
        let total = self.dataset.len();
        format!("Review Pulse - ratings and sentiment snapshot ({count}/{total} reviews)\n")
    }

    /// Renders the filter bar with the focused control highlighted.
    fn render_filter_bar(&self) -> String {
        let (lo, hi) = self.query.rating_range();
        let (start, end) = self.query.date_range().map_or_else(
            || ("-".to_owned(), "-".to_owned()),
            |(s, e)| (s.to_string(), e.to_string()),
        );
        let value_for = |control: FilterControl| match control {
            FilterControl::Platform => self.query.platform().unwrap_or("All").to_owned(),
            FilterControl::ReviewType => self.query.review_type().unwrap_or("All").to_owned(),
            FilterControl::RatingLo => lo.to_string(),
            FilterControl::RatingHi => hi.to_string(),
            FilterControl::StartDate => start.clone(),
            FilterControl::EndDate => end.clone(),
        };

        let mut bar = String::new();
        for control in FilterControl::ALL {
            let value = value_for(control);
            let segment = if control == self.focus {
                format!("[{}: {value}]", control.label())
            } else {
                format!(" {}: {value} ", control.label())
            };
            if !bar.is_empty() {
                bar.push(' ');
            }
            bar.push_str(&segment);
        }
        bar.push('\n');
        bar
    }

    /// Renders every dashboard panel for the filtered rows.
    fn render_panels(&self) -> String {
        let filtered = self.filtered_reviews();
        if filtered.is_empty() {
            return "\nNo reviews match the current filters.\n".to_owned();
        }

        let width = usize::from(self.width.max(40));
        let summary = Summary::compute(&filtered);

        let mut output = String::new();
        output.push_str(&summary.headline());
        output.push_str("\n\n");
        output.push_str(&metric_tiles::view(&summary));
        output.push('\n');
        output.push_str(&bar_chart::view(&rating_histogram(&filtered), width));
        output.push('\n');
        output.push_str(&trend_chart::view(&monthly_volume(&filtered), width));
        output.push('\n');
        output.push_str(&render_cloud(&filtered, SentimentBucket::Positive, width));
        output.push('\n');
        output.push_str(&render_cloud(&filtered, SentimentBucket::Negative, width));
        output.push('\n');
        output.push_str(&review_table::view(
            &recent_reviews(&filtered, RECENT_LIMIT),
            width,
        ));
        output
    }

    /// Renders the status bar with key hints.
    fn render_status_bar(&self) -> String {
        let hints = "j/k:controls  h/l:adjust  r:reset  ?:help  q:quit";
        format!("\n{hints}\n")
    }

    /// Renders the help overlay if visible.
    fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Controls:
  j, Down, Tab      Focus next filter control
  k, Up, Shift-Tab  Focus previous filter control
  l, Right, +       Step the focused control forward
  h, Left, -        Step the focused control backward
  r                 Reset filters to defaults

Other:
  ?                 Toggle this help
  q, Esc            Quit

Press ? again to close this help.
";
        help_text.to_owned()
    }
}

/// Renders one keyword cloud from the filtered rows.
fn render_cloud(filtered: &[&Review], bucket: SentimentBucket, width: usize) -> String {
    let rows = bucket_rows(filtered, bucket);
    let corpus = build_corpus(&rows);
    let terms = term_frequencies(&corpus);
    keyword_cloud::view(bucket, &terms, width)
}

impl Model for DashboardApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve initial data from module-level storage
        let (dataset, query) = super::get_initial_dashboard();
        (Self::new(dataset, query), None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(*app_msg);
        }

        // Handle key events from bubbletea-rs
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if let Some(mapped) = map_key_to_message(key_msg) {
                return self.handle_message(mapped);
            }
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        // If help is shown, render overlay instead
        if self.show_help {
            return self.render_help_overlay();
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_filter_bar());
        output.push_str(&self.render_panels());
        output.push_str(&self.render_status_bar());
        output
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
