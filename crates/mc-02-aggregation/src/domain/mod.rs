//! # Aggregation Domain

mod metric;
mod snapshot;

pub use metric::Metric;
pub use snapshot::{Snapshot, SourceOutcome};
