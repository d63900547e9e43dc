//! # Gateway Domain
//!
//! The closed catalog of named sources the console may query.

mod sources;

pub use sources::{ListResource, MetricSource};
