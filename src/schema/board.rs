//! Dashboard document types
//!
//! Owned value types mirroring the field names the visualization platform
//! expects. No validation happens here: whatever the builders wrote is
//! serialized verbatim.

use serde::{Deserialize, Serialize};

/// A complete dashboard document.
///
/// `id`, `uid` and `url` are assigned by the platform on submission and stay
/// zero-valued at build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: u64,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub timezone: String,
    pub editable: bool,
    #[serde(rename = "sharedCrosshair")]
    pub shared_crosshair: bool,
    pub tags: Vec<String>,
    pub time: TimeRange,
    pub timepicker: TimePicker,
    pub annotations: Annotations,
    pub rows: Vec<RowSpec>,
}

impl Board {
    /// Create an empty board with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            uid: String::new(),
            url: String::new(),
            title: title.into(),
            timezone: String::new(),
            editable: false,
            shared_crosshair: false,
            tags: Vec::new(),
            time: TimeRange::default(),
            timepicker: TimePicker::default(),
            annotations: Annotations::default(),
            rows: Vec::new(),
        }
    }
}

/// Trailing time window displayed by the dashboard, e.g. `now-3h` to `now`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
}

impl TimeRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Refresh-interval and zoom-range choices offered by the time picker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimePicker {
    pub refresh_intervals: Vec<String>,
    pub time_options: Vec<String>,
}

/// Annotation sources attached to the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotations {
    pub list: Vec<Annotation>,
}

/// A single annotation source. This crate only emits tag-query annotations,
/// so `kind` is always `"tags"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    pub datasource: String,
    #[serde(rename = "iconColor")]
    pub icon_color: String,
    pub enable: bool,
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A row within the dashboard. Panel layout belongs to the row collaborator;
/// panel payloads are carried opaquely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowSpec {
    pub title: String,
    #[serde(rename = "showTitle")]
    pub show_title: bool,
    pub collapse: bool,
    pub editable: bool,
    pub height: String,
    pub panels: Vec<serde_json::Value>,
}

impl RowSpec {
    /// Create an empty row with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            show_title: false,
            collapse: false,
            editable: false,
            height: String::new(),
            panels: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_zero_valued() {
        let board = Board::new("svc");
        assert_eq!(board.title, "svc");
        assert_eq!(board.id, 0);
        assert_eq!(board.uid, "");
        assert_eq!(board.url, "");
        assert!(board.tags.is_empty());
        assert!(board.rows.is_empty());
        assert!(board.annotations.list.is_empty());
    }

    #[test]
    fn test_board_serializes_platform_field_names() {
        let mut board = Board::new("svc");
        board.shared_crosshair = true;
        board.time = TimeRange::new("now-3h", "now");

        let value = serde_json::to_value(&board).unwrap();
        assert_eq!(value["sharedCrosshair"], true);
        assert_eq!(value["time"]["from"], "now-3h");
        assert_eq!(value["time"]["to"], "now");
        assert!(value["timepicker"]["refresh_intervals"].is_array());
        assert!(value["annotations"]["list"].is_array());
    }

    #[test]
    fn test_annotation_serializes_icon_color() {
        let annotation = Annotation {
            name: "deploys".to_string(),
            datasource: "-- Grafana --".to_string(),
            icon_color: "#5794F2".to_string(),
            enable: true,
            tags: vec!["deploy".to_string()],
            kind: "tags".to_string(),
        };

        let value = serde_json::to_value(&annotation).unwrap();
        assert_eq!(value["iconColor"], "#5794F2");
        assert_eq!(value["type"], "tags");
    }

    #[test]
    fn test_row_spec_serializes_show_title() {
        let row = RowSpec::new("latency");
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["showTitle"], false);
        assert_eq!(value["title"], "latency");
    }
}
