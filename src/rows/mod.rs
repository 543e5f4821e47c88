//! Row collaborator
//!
//! Rows attach themselves to a dashboard: the dashboard hands over its
//! document, a title, and the row's own options, and the row appends itself
//! once built. Panel layout is entirely the row's concern; panel payloads
//! are stored as opaque JSON values produced elsewhere.

use crate::options::{apply_all, ConfigOption};
use crate::schema::{Board, RowSpec};

/// A deferred mutation over a row under construction.
pub type RowOption = ConfigOption<RowSpec>;

const DEFAULT_HEIGHT: &str = "250px";

/// Build a row from its options and attach it to the board. Rows accumulate
/// on the board in call order.
pub fn attach(board: &mut Board, title: impl Into<String>, options: Vec<RowOption>) {
    let mut row = RowSpec::new(title);
    apply_all(&mut row, defaults(), options);
    board.rows.push(row);
}

fn defaults() -> Vec<RowOption> {
    vec![show_title(), with_height(DEFAULT_HEIGHT)]
}

/// Display the row title.
pub fn show_title() -> RowOption {
    RowOption::new(|row| row.show_title = true)
}

/// Hide the row title.
pub fn hide_title() -> RowOption {
    RowOption::new(|row| row.show_title = false)
}

/// Start the row collapsed.
pub fn collapsed() -> RowOption {
    RowOption::new(|row| row.collapse = true)
}

/// Set the row height, e.g. `250px`.
pub fn with_height(height: impl Into<String>) -> RowOption {
    let height = height.into();
    RowOption::new(move |row| row.height = height)
}

/// Append an opaque panel payload to the row. Panels accumulate.
pub fn with_panel(panel: serde_json::Value) -> RowOption {
    RowOption::new(move |row| row.panels.push(panel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attach_appends_row_with_defaults() {
        let mut board = Board::new("svc");
        attach(&mut board, "latency", vec![]);

        assert_eq!(board.rows.len(), 1);
        let row = &board.rows[0];
        assert_eq!(row.title, "latency");
        assert!(row.show_title);
        assert_eq!(row.height, "250px");
        assert!(!row.collapse);
        assert!(row.panels.is_empty());
    }

    #[test]
    fn test_rows_accumulate_in_call_order() {
        let mut board = Board::new("svc");
        attach(&mut board, "first", vec![]);
        attach(&mut board, "second", vec![]);
        attach(&mut board, "first", vec![]);

        let titles: Vec<_> = board.rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "first"]);
    }

    #[test]
    fn test_options_override_defaults() {
        let mut board = Board::new("svc");
        attach(
            &mut board,
            "latency",
            vec![hide_title(), collapsed(), with_height("400px")],
        );

        let row = &board.rows[0];
        assert!(!row.show_title);
        assert!(row.collapse);
        assert_eq!(row.height, "400px");
    }

    #[test]
    fn test_panels_accumulate() {
        let mut board = Board::new("svc");
        attach(
            &mut board,
            "latency",
            vec![
                with_panel(json!({"title": "p99", "type": "graph"})),
                with_panel(json!({"title": "p50", "type": "graph"})),
            ],
        );

        let row = &board.rows[0];
        assert_eq!(row.panels.len(), 2);
        assert_eq!(row.panels[0]["title"], "p99");
        assert_eq!(row.panels[1]["title"], "p50");
    }
}
