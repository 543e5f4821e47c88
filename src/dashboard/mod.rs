//! Dashboard composition
//!
//! Builds dashboard documents from an ordered list of options. Construction
//! seeds a trailing 3-hour time window, the standard refresh-interval and
//! zoom-range ladders, and a shared crosshair; caller options are applied
//! after the seeds, so any of them can be overridden.

use crate::options::{apply_all, ConfigOption};
use crate::rows::{self, RowOption};
use crate::schema::{Annotation, Board, TimePicker, TimeRange};

/// A deferred mutation over a dashboard under construction.
pub type DashboardOption = ConfigOption<Board>;

const DEFAULT_REFRESH_INTERVALS: &[&str] =
    &["5s", "10s", "30s", "1m", "5m", "15m", "30m", "1h", "2h", "1d"];
const DEFAULT_TIME_OPTIONS: &[&str] =
    &["5m", "15m", "1h", "6h", "12h", "24h", "2d", "7d", "30d"];

/// An annotation source backed by a tag query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagAnnotation {
    pub name: String,
    pub datasource: String,
    pub icon_color: String,
    pub tags: Vec<String>,
}

/// Composes a dashboard document from named options.
pub struct DashboardBuilder {
    board: Board,
}

impl DashboardBuilder {
    /// Build a dashboard: seed the defaults, then apply `options` in order.
    pub fn new(title: impl Into<String>, options: Vec<DashboardOption>) -> Self {
        let mut board = Board::new(title);
        apply_all(&mut board, defaults(), options);

        tracing::debug!(
            title = %board.title,
            rows = board.rows.len(),
            annotations = board.annotations.list.len(),
            "dashboard composed"
        );

        Self { board }
    }

    /// The built dashboard document.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consume the builder, returning the dashboard document.
    pub fn into_board(self) -> Board {
        self.board
    }
}

fn defaults() -> Vec<DashboardOption> {
    vec![default_timepicker(), default_time(), shared_crosshair()]
}

fn default_time() -> DashboardOption {
    with_time("now-3h", "now")
}

fn default_timepicker() -> DashboardOption {
    with_timepicker(DEFAULT_REFRESH_INTERVALS, DEFAULT_TIME_OPTIONS)
}

fn with_timepicker(refresh_intervals: &[&str], time_options: &[&str]) -> DashboardOption {
    let timepicker = TimePicker {
        refresh_intervals: refresh_intervals.iter().map(|s| s.to_string()).collect(),
        time_options: time_options.iter().map(|s| s.to_string()).collect(),
    };
    DashboardOption::new(move |board| board.timepicker = timepicker)
}

/// Add a row to the dashboard; the row attaches itself. Rows accumulate in
/// call order.
pub fn with_row(title: impl Into<String>, options: Vec<RowOption>) -> DashboardOption {
    let title = title.into();
    DashboardOption::new(move |board| rows::attach(board, title, options))
}

/// Add a tag-query annotation source. Sources accumulate.
pub fn with_tag_annotation(annotation: TagAnnotation) -> DashboardOption {
    DashboardOption::new(move |board| {
        board.annotations.list.push(Annotation {
            name: annotation.name,
            datasource: annotation.datasource,
            icon_color: annotation.icon_color,
            enable: true,
            tags: annotation.tags,
            kind: "tags".to_string(),
        });
    })
}

/// Mark the dashboard as editable.
pub fn editable() -> DashboardOption {
    DashboardOption::new(|board| board.editable = true)
}

/// Mark the dashboard as read-only.
pub fn read_only() -> DashboardOption {
    DashboardOption::new(|board| board.editable = false)
}

/// Share the crosshair across panels.
pub fn shared_crosshair() -> DashboardOption {
    DashboardOption::new(|board| board.shared_crosshair = true)
}

/// Keep the crosshair local to each panel.
pub fn without_shared_crosshair() -> DashboardOption {
    DashboardOption::new(|board| board.shared_crosshair = false)
}

/// Set the dashboard tag list, replacing any previous one.
pub fn with_tags<I, S>(tags: I) -> DashboardOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
    DashboardOption::new(move |board| board.tags = tags)
}

/// Set the displayed time window, e.g. `now-6h` to `now`.
pub fn with_time(from: impl Into<String>, to: impl Into<String>) -> DashboardOption {
    let time = TimeRange::new(from, to);
    DashboardOption::new(move |board| board.time = time)
}

/// Replace the refresh-interval choices offered by the time picker.
pub fn with_refresh_intervals<I, S>(intervals: I) -> DashboardOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let intervals: Vec<String> = intervals.into_iter().map(Into::into).collect();
    DashboardOption::new(move |board| board.timepicker.refresh_intervals = intervals)
}

/// Replace the zoom-range choices offered by the time picker.
pub fn with_time_options<I, S>(options: I) -> DashboardOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let options: Vec<String> = options.into_iter().map(Into::into).collect();
    DashboardOption::new(move |board| board.timepicker.time_options = options)
}
