//! # Aggregation Errors

use thiserror::Error;

/// Errors raised by the aggregation engine.
///
/// Per-source failures are not errors here; they are snapshot entries. The
/// engine only raises when the whole batch is unusable, and then as a single
/// error suitable for one banner, not N toasts.
#[derive(Debug, Clone, Error)]
pub enum AggregationError {
    /// Every requested source failed.
    #[error("all {} requested sources failed", failures.len())]
    AllSourcesFailed {
        /// Source name and its failure message, in request order.
        failures: Vec<(String, String)>,
    },

    /// The batch was empty; there is nothing to aggregate.
    #[error("no sources requested")]
    NothingRequested,
}
