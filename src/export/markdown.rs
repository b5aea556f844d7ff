//! Markdown report rendering using Jinja2-compatible templating.
//!
//! The report template uses `minijinja` with Jinja2 syntax:
//! `{{ variable }}` interpolation, `{% for %}` loops, and `{% if %}`
//! conditionals. The document mirrors the dashboard's panel order: headline,
//! metric tiles, rating distribution, monthly volume, keyword clouds, and
//! the recent-reviews table.

use std::io::Write;

use minijinja::{Environment, context};

use crate::error::PulseError;

use super::model::Report;

/// Default Markdown report template.
const REPORT_TEMPLATE: &str = r"# Review Pulse Report

Generated: {{ report.generated_at }}
Filters: {{ report.filters }}

{% if report.empty -%}
No reviews match the current filters.
{%- else -%}
{{ report.headline }}

## Metrics

| Metric | Value |
| --- | --- |
| Total Reviews | {{ report.summary.total }} |
| Average Rating | {% if report.summary.mean_rating is none %}n/a{% else %}{{ '%.2f' | format(report.summary.mean_rating) }}{% endif %} |
| Median Rating | {% if report.summary.median_rating is none %}n/a{% else %}{{ '%.1f' | format(report.summary.median_rating) }}{% endif %} |
| 4+ Rating Share | {{ '%.1f' | format(report.summary.positive_share) }}% |

## Rating Distribution

| Rating | Reviews |
| --- | --- |
{% for bucket in report.rating_histogram -%}
| {{ bucket.rating }} | {{ bucket.count }} |
{% endfor %}
## Review Volume Over Time

| Month | Reviews |
| --- | --- |
{% for bucket in report.monthly_volume -%}
| {{ bucket.month }} | {{ bucket.count }} |
{% endfor %}
## Keyword Clouds

**Positive Reviews (4-5)**

{% if report.positive_terms -%}
{% for term in report.positive_terms %}{{ term.term }} ({{ term.count }}){% if not loop.last %}, {% endif %}{% endfor %}
{%- else -%}
No positive review text available for the current filters.
{%- endif %}

**Negative Reviews (1-2)**

{% if report.negative_terms -%}
{% for term in report.negative_terms %}{{ term.term }} ({{ term.count }}){% if not loop.last %}, {% endif %}{% endfor %}
{%- else -%}
No negative review text available for the current filters.
{%- endif %}

## Recent Reviews

| Date | Platform | Type | Rating | Title | Text | Votes |
| --- | --- | --- | --- | --- | --- | --- |
{% for row in report.recent -%}
| {{ row.published }} | {{ row.platform }} | {{ row.review_type }} | {{ row.rating }} | {{ row.title }} | {{ row.excerpt }} | {{ row.helpful_votes }} |
{% endfor %}
{%- endif %}
";

/// Renders the report to Markdown.
///
/// # Errors
///
/// Returns [`PulseError::Template`] when template rendering fails.
pub fn render_markdown(report: &Report) -> Result<String, PulseError> {
    let mut environment = Environment::new();
    environment
        .add_template("report", REPORT_TEMPLATE)
        .map_err(template_error)?;
    let template = environment.get_template("report").map_err(template_error)?;
    template
        .render(context! { report => report })
        .map_err(template_error)
}

/// Writes the Markdown report to the given writer.
///
/// # Errors
///
/// Returns [`PulseError::Template`] when rendering fails and
/// [`PulseError::Io`] when writing fails.
pub fn write_markdown<W: Write>(writer: &mut W, report: &Report) -> Result<(), PulseError> {
    let rendered = render_markdown(report)?;
    writer
        .write_all(rendered.as_bytes())
        .map_err(|error| PulseError::io(&error))
}

/// Converts a template engine error to a [`PulseError::Template`].
fn template_error(error: minijinja::Error) -> PulseError {
    PulseError::Template {
        message: error.to_string(),
    }
}
