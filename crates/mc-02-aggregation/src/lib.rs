//! # MC-02 Aggregation Engine
//!
//! Fan-out/fan-in snapshots over independent data sources.
//!
//! **Architecture:** Hexagonal (domain + engine service)
//!
//! ## Purpose
//!
//! Dashboards and analytics views read many independent sources at once. One
//! slow or broken source must never blank the whole view:
//! - all source calls are issued at once and all are awaited (a barrier, not
//!   a race);
//! - each source lands in the snapshot as fulfilled-with-value or
//!   failed-with-error;
//! - only when *every* source fails does the engine raise one aggregate
//!   error;
//! - derived metrics are computed only from fulfilled inputs and are
//!   explicitly `Unavailable` otherwise — never silently zero.
//!
//! ## Module Structure
//!
//! ```text
//! mc-02-aggregation/
//! ├── domain/          # Snapshot, SourceOutcome, Metric
//! ├── engine           # fan-out/fan-in barrier
//! └── dashboard        # the standard console dashboard batch
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dashboard;
pub mod domain;
pub mod engine;
pub mod error;

// Re-exports
pub use dashboard::{DashboardService, DashboardStats};
pub use domain::{Metric, Snapshot, SourceOutcome};
pub use engine::{AggregationEngine, SourceCall};
pub use error::AggregationError;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
