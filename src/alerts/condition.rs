//! Alert condition composition
//!
//! A condition is assembled from two independent groups of options: one
//! query+reducer option naming the series and aggregation, and one evaluator
//! option naming the threshold test. The groups are exclusive only by
//! convention: applying a second option from the same group overwrites the
//! first. A condition built with no evaluator option keeps its evaluator kind
//! unset, which the document schema accepts.

use crate::options::{apply_all, ConfigOption};
use crate::schema::{AlertCondition, AlertQuery, Evaluator, EvaluatorKind, Reducer, ReducerKind};

/// A deferred mutation over a condition under construction.
pub type ConditionOption = ConfigOption<AlertCondition>;

/// Build one condition from its options. The combination operator is stamped
/// afterwards by the enclosing alert's `when` option.
pub(crate) fn build(options: Vec<ConditionOption>) -> AlertCondition {
    let mut condition = AlertCondition::new();
    apply_all(&mut condition, Vec::new(), options);
    condition
}

fn query_with_reducer(
    kind: ReducerKind,
    ref_id: impl Into<String>,
    from: impl Into<String>,
    to: impl Into<String>,
) -> ConditionOption {
    let params = vec![ref_id.into(), from.into(), to.into()];
    ConditionOption::new(move |condition| {
        condition.query = AlertQuery { params };
        condition.reducer = Reducer {
            kind: Some(kind),
            params: Vec::new(),
        };
    })
}

fn evaluator(kind: EvaluatorKind, params: Vec<f64>) -> ConditionOption {
    ConditionOption::new(move |condition| {
        condition.evaluator = Evaluator {
            kind: Some(kind),
            params,
        };
    })
}

/// Evaluate the average of the series over the given window.
pub fn avg(
    ref_id: impl Into<String>,
    from: impl Into<String>,
    to: impl Into<String>,
) -> ConditionOption {
    query_with_reducer(ReducerKind::Avg, ref_id, from, to)
}

/// Evaluate the sum of the series over the given window.
pub fn sum(
    ref_id: impl Into<String>,
    from: impl Into<String>,
    to: impl Into<String>,
) -> ConditionOption {
    query_with_reducer(ReducerKind::Sum, ref_id, from, to)
}

/// Evaluate the sample count of the series over the given window.
pub fn count(
    ref_id: impl Into<String>,
    from: impl Into<String>,
    to: impl Into<String>,
) -> ConditionOption {
    query_with_reducer(ReducerKind::Count, ref_id, from, to)
}

/// Evaluate the most recent value of the series in the given window.
pub fn last(
    ref_id: impl Into<String>,
    from: impl Into<String>,
    to: impl Into<String>,
) -> ConditionOption {
    query_with_reducer(ReducerKind::Last, ref_id, from, to)
}

/// Evaluate the minimum of the series over the given window.
pub fn min(
    ref_id: impl Into<String>,
    from: impl Into<String>,
    to: impl Into<String>,
) -> ConditionOption {
    query_with_reducer(ReducerKind::Min, ref_id, from, to)
}

/// Evaluate the maximum of the series over the given window.
pub fn max(
    ref_id: impl Into<String>,
    from: impl Into<String>,
    to: impl Into<String>,
) -> ConditionOption {
    query_with_reducer(ReducerKind::Max, ref_id, from, to)
}

/// Evaluate the median of the series over the given window.
pub fn median(
    ref_id: impl Into<String>,
    from: impl Into<String>,
    to: impl Into<String>,
) -> ConditionOption {
    query_with_reducer(ReducerKind::Median, ref_id, from, to)
}

/// Evaluate the first-to-last difference of the series over the given window.
pub fn diff(
    ref_id: impl Into<String>,
    from: impl Into<String>,
    to: impl Into<String>,
) -> ConditionOption {
    query_with_reducer(ReducerKind::Diff, ref_id, from, to)
}

/// Evaluate the percent difference of the series over the given window.
pub fn percent_diff(
    ref_id: impl Into<String>,
    from: impl Into<String>,
    to: impl Into<String>,
) -> ConditionOption {
    query_with_reducer(ReducerKind::PercentDiff, ref_id, from, to)
}

/// Trigger when the reduced series has no value at all.
pub fn has_no_value() -> ConditionOption {
    evaluator(EvaluatorKind::NoValue, Vec::new())
}

/// Trigger when the reduced value is above the threshold.
pub fn is_above(value: f64) -> ConditionOption {
    evaluator(EvaluatorKind::GreaterThan, vec![value])
}

/// Trigger when the reduced value is below the threshold.
pub fn is_below(value: f64) -> ConditionOption {
    evaluator(EvaluatorKind::LessThan, vec![value])
}

/// Trigger when the reduced value leaves the given range.
pub fn is_outside_range(min: f64, max: f64) -> ConditionOption {
    evaluator(EvaluatorKind::OutsideRange, vec![min, max])
}

/// Trigger when the reduced value stays within the given range.
pub fn is_within_range(min: f64, max: f64) -> ConditionOption {
    evaluator(EvaluatorKind::WithinRange, vec![min, max])
}
