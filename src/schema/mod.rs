//! Target document types and the serialization boundary
//!
//! The documents built by this crate are owned value types whose serde
//! attributes produce exactly the field names the external platform expects.
//! Building never validates; the only fallible surface is JSON encoding and
//! decoding at this boundary.

pub mod alert;
pub mod board;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use alert::{
    Alert, AlertCondition, AlertQuery, ConditionOperator, ErrorMode, Evaluator, EvaluatorKind,
    NoDataMode, Notification, Operator, Reducer, ReducerKind,
};
pub use board::{Annotation, Annotations, Board, RowSpec, TimePicker, TimeRange};

/// Serialization boundary errors.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("JSON encoding error: {0}")]
    Encode(serde_json::Error),

    #[error("JSON decoding error: {0}")]
    Decode(serde_json::Error),
}

/// Serialize a built document to the JSON the platform consumes.
pub fn to_json<T: Serialize>(document: &T) -> Result<String, SchemaError> {
    serde_json::to_string(document).map_err(SchemaError::Encode)
}

/// Parse a document back from its JSON form.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, SchemaError> {
    serde_json::from_str(json).map_err(SchemaError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_round_trip() {
        let mut board = Board::new("svc");
        board.tags = vec!["prod".to_string()];
        board.time = TimeRange::new("now-6h", "now");
        board.editable = true;

        let json = to_json(&board).unwrap();
        let parsed: Board = from_json(&json).unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_alert_round_trip() {
        let mut alert = Alert::new("cpu-high");
        alert.message = "CPU usage is too high".to_string();
        alert.notifications.push(Notification {
            id: 3,
            uid: "pager".to_string(),
        });
        alert.conditions.push(AlertCondition::new());

        let json = to_json(&alert).unwrap();
        let parsed: Alert = from_json(&json).unwrap();
        assert_eq!(parsed, alert);
    }

    #[test]
    fn test_decode_error_reported() {
        let result: Result<Board, _> = from_json("{not json");
        assert!(matches!(result, Err(SchemaError::Decode(_))));
    }
}
