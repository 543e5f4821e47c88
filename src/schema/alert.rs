//! Alert document types
//!
//! Owned value types for alert definitions, shaped for the alerting
//! platform's rule schema. Kind fields that the platform treats as optional
//! strings are modeled as closed enums wrapped in `Option`, omitted from the
//! JSON when unset.

use serde::{Deserialize, Serialize};

/// Behavior when alert evaluation itself fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorMode {
    #[serde(rename = "alerting")]
    Alerting,
    #[serde(rename = "keep_state")]
    KeepLastState,
}

/// Behavior when the alert query returns no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoDataMode {
    #[serde(rename = "no_data")]
    NoData,
    #[serde(rename = "alerting")]
    Alerting,
    #[serde(rename = "keep_state")]
    KeepLastState,
    #[serde(rename = "ok")]
    Ok,
}

/// Logical operator combining a condition with the other conditions of the
/// same alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    And,
    Or,
}

/// Aggregation applied to the queried series before evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReducerKind {
    Avg,
    Sum,
    Count,
    Last,
    Min,
    Max,
    Median,
    Diff,
    PercentDiff,
}

/// Threshold test applied to the reducer's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvaluatorKind {
    #[serde(rename = "no_value")]
    NoValue,
    #[serde(rename = "gt")]
    GreaterThan,
    #[serde(rename = "lt")]
    LessThan,
    #[serde(rename = "outside_range")]
    OutsideRange,
    #[serde(rename = "within_range")]
    WithinRange,
}

/// A complete alert definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub name: String,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "for", default)]
    pub pending_for: String,
    #[serde(default)]
    pub frequency: String,
    pub handler: u64,
    #[serde(rename = "executionErrorState")]
    pub execution_error_state: ErrorMode,
    #[serde(rename = "noDataState")]
    pub no_data_state: NoDataMode,
    pub notifications: Vec<Notification>,
    pub conditions: Vec<AlertCondition>,
}

impl Alert {
    /// Create an alert seeded with the platform-required defaults: both
    /// resilience policies set to keep the last known state, so transient
    /// evaluation failures do not fire the alert.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: String::new(),
            pending_for: String::new(),
            frequency: String::new(),
            handler: 1,
            execution_error_state: ErrorMode::KeepLastState,
            no_data_state: NoDataMode::KeepLastState,
            notifications: Vec::new(),
            conditions: Vec::new(),
        }
    }
}

/// Reference to a notification channel owned by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    #[serde(default)]
    pub uid: String,
}

/// One condition of an alert: query + reducer + evaluator, plus the operator
/// combining it with the alert's other conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertCondition {
    #[serde(rename = "type")]
    pub kind: String,
    pub query: AlertQuery,
    pub reducer: Reducer,
    pub evaluator: Evaluator,
    pub operator: ConditionOperator,
}

impl AlertCondition {
    /// Create an empty condition of the platform's `query` kind.
    pub fn new() -> Self {
        Self {
            kind: "query".to_string(),
            query: AlertQuery::default(),
            reducer: Reducer::default(),
            evaluator: Evaluator::default(),
            operator: ConditionOperator::default(),
        }
    }
}

impl Default for AlertCondition {
    fn default() -> Self {
        Self::new()
    }
}

/// Series reference and time range the condition evaluates, as positional
/// params: `[ref_id, from, to]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertQuery {
    pub params: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reducer {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ReducerKind>,
    pub params: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluator {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EvaluatorKind>,
    pub params: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionOperator {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<Operator>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_alert_seeds_resilience_defaults() {
        let alert = Alert::new("cpu-high");
        assert_eq!(alert.execution_error_state, ErrorMode::KeepLastState);
        assert_eq!(alert.no_data_state, NoDataMode::KeepLastState);
        assert_eq!(alert.handler, 1);
        assert!(alert.conditions.is_empty());
        assert!(alert.notifications.is_empty());
    }

    #[test]
    fn test_alert_serializes_platform_field_names() {
        let mut alert = Alert::new("cpu-high");
        alert.pending_for = "5m".to_string();

        let value = serde_json::to_value(&alert).unwrap();
        assert_eq!(value["executionErrorState"], "keep_state");
        assert_eq!(value["noDataState"], "keep_state");
        assert_eq!(value["for"], "5m");
        assert_eq!(value["handler"], 1);
    }

    #[test]
    fn test_mode_wire_values() {
        assert_eq!(serde_json::to_value(ErrorMode::Alerting).unwrap(), "alerting");
        assert_eq!(serde_json::to_value(NoDataMode::NoData).unwrap(), "no_data");
        assert_eq!(serde_json::to_value(NoDataMode::Ok).unwrap(), "ok");
        assert_eq!(serde_json::to_value(Operator::And).unwrap(), "and");
        assert_eq!(serde_json::to_value(Operator::Or).unwrap(), "or");
        assert_eq!(serde_json::to_value(ReducerKind::PercentDiff).unwrap(), "percent_diff");
        assert_eq!(serde_json::to_value(EvaluatorKind::GreaterThan).unwrap(), "gt");
        assert_eq!(serde_json::to_value(EvaluatorKind::NoValue).unwrap(), "no_value");
    }

    #[test]
    fn test_empty_condition_omits_unset_kinds() {
        let condition = AlertCondition::new();
        let value = serde_json::to_value(&condition).unwrap();

        assert_eq!(value["type"], "query");
        assert!(value["evaluator"].get("type").is_none());
        assert!(value["reducer"].get("type").is_none());
        assert!(value["operator"].get("type").is_none());
    }
}
