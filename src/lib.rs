//! Gridfold: Declarative Dashboard and Alert Composition
//!
//! A configuration-composition layer for Grafana-style monitoring platforms:
//! describe a dashboard or alert as an ordered list of small named options,
//! and get back a single immutable, serializable document ready for a
//! transport layer to submit.
//!
//! # Features
//!
//! - **Ordered Options**: Defaults applied first, caller options after, each
//!   seeing the cumulative effect of the ones before it
//! - **Last-Write-Wins**: Overrides need no priority system, only position
//! - **Accumulating Lists**: Rows, conditions, notifications, and annotations
//!   append once per application
//! - **Seeded Defaults**: Dashboards always carry a time window and refresh
//!   ladder; alerts always carry both resilience policies
//! - **Owned Schema**: Document types serialize to the platform's exact
//!   field names, with lossless round-trips
//! - **No Internal Validation**: Options are total; the platform rejects bad
//!   input at submission time
//!
//! # Example
//!
//! ```
//! use gridfold::alerts::{self, condition, AlertBuilder};
//! use gridfold::dashboard::{self, DashboardBuilder};
//! use gridfold::schema::Operator;
//!
//! let board = DashboardBuilder::new(
//!     "service overview",
//!     vec![
//!         dashboard::with_tags(["prod"]),
//!         dashboard::editable(),
//!         dashboard::with_row("latency", vec![]),
//!     ],
//! )
//! .into_board();
//! assert_eq!(board.time.from, "now-3h");
//!
//! let alert = AlertBuilder::new(
//!     "cpu-high",
//!     vec![
//!         alerts::message("CPU usage is too high"),
//!         alerts::when(
//!             Operator::And,
//!             vec![condition::avg("A", "5m", "now"), condition::is_above(90.0)],
//!         ),
//!     ],
//! )
//! .into_alert();
//! assert_eq!(alert.conditions.len(), 1);
//! ```

pub mod alerts;
pub mod dashboard;
pub mod options;
pub mod rows;
pub mod schema;

// Re-export commonly used types
pub use alerts::{AlertBuilder, AlertOption, Channel, ConditionOption};
pub use dashboard::{DashboardBuilder, DashboardOption, TagAnnotation};
pub use options::ConfigOption;
pub use rows::RowOption;
pub use schema::{Alert, Board, ErrorMode, NoDataMode, Operator, SchemaError};
