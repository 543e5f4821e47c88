//! Alert composition
//!
//! Builds alert definitions from an ordered list of options: conditions,
//! notification bindings, evaluation timing, and resilience policies.
//! Construction seeds both resilience policies to keep the last known state,
//! so an alert never leaves those fields unset; caller options applied
//! afterwards supersede the seeds.

pub mod condition;

use crate::options::{apply_all, ConfigOption};
use crate::schema::{Alert, ConditionOperator, ErrorMode, NoDataMode, Notification, Operator};

pub use condition::ConditionOption;

/// A deferred mutation over an alert under construction.
pub type AlertOption = ConfigOption<Alert>;

/// Reference to a notification channel owned by the platform. Only the
/// reference is embedded in the alert; the channel itself lives remotely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Channel {
    pub id: u64,
    pub uid: String,
    pub name: String,
    pub kind: String,
}

impl Channel {
    pub fn new(
        id: u64,
        uid: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id,
            uid: uid.into(),
            name: name.into(),
            kind: kind.into(),
        }
    }
}

/// Composes an alert definition from named options.
pub struct AlertBuilder {
    alert: Alert,
}

impl AlertBuilder {
    /// Build an alert: seed the defaults, then apply `options` in order.
    pub fn new(name: impl Into<String>, options: Vec<AlertOption>) -> Self {
        let mut alert = Alert::new(name);
        apply_all(&mut alert, Vec::new(), options);

        tracing::debug!(
            name = %alert.name,
            conditions = alert.conditions.len(),
            notifications = alert.notifications.len(),
            "alert composed"
        );

        Self { alert }
    }

    /// The built alert document.
    pub fn alert(&self) -> &Alert {
        &self.alert
    }

    /// Consume the builder, returning the alert document.
    pub fn into_alert(self) -> Alert {
        self.alert
    }
}

/// Add a condition that can trigger the alert. The condition is built from
/// its own options and the combination `operator` is stamped onto it here;
/// conditions accumulate in call order.
pub fn when(operator: Operator, options: Vec<ConditionOption>) -> AlertOption {
    AlertOption::new(move |alert| {
        let mut condition = condition::build(options);
        condition.operator = ConditionOperator {
            kind: Some(operator),
        };
        alert.conditions.push(condition);
    })
}

/// Bind a notification channel to the alert. Bindings accumulate.
pub fn notification(channel: &Channel) -> AlertOption {
    let reference = Notification {
        id: channel.id,
        uid: channel.uid.clone(),
    };
    AlertOption::new(move |alert| alert.notifications.push(reference))
}

/// Set the message sent with the alert.
pub fn message(content: impl Into<String>) -> AlertOption {
    let content = content.into();
    AlertOption::new(move |alert| alert.message = content)
}

/// Set how long a breach must persist before the alert fires.
pub fn pending_for(duration: impl Into<String>) -> AlertOption {
    let duration = duration.into();
    AlertOption::new(move |alert| alert.pending_for = duration)
}

/// Set the evaluation interval.
pub fn evaluate_every(interval: impl Into<String>) -> AlertOption {
    let interval = interval.into();
    AlertOption::new(move |alert| alert.frequency = interval)
}

/// Set the behavior when evaluation itself fails.
pub fn on_execution_error(mode: ErrorMode) -> AlertOption {
    AlertOption::new(move |alert| alert.execution_error_state = mode)
}

/// Set the behavior when the query returns no data.
pub fn on_no_data(mode: NoDataMode) -> AlertOption {
    AlertOption::new(move |alert| alert.no_data_state = mode)
}
