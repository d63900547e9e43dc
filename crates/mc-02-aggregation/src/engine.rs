//! # Aggregation Engine
//!
//! The fan-out/fan-in barrier: issue every source call at once, wait for all
//! of them to settle regardless of individual outcome, then merge. This is a
//! deliberate concurrency primitive — not "first success" and not a stream
//! of partial results.

use futures::future::join_all;
use mc_01_source_gateway::{MetricSource, SourceGateway};
use shared_types::UnixTime;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::{Snapshot, SourceOutcome};
use crate::error::AggregationError;

/// One named source call in a batch.
#[derive(Clone, Debug)]
pub struct SourceCall {
    /// Which source to query.
    pub source: MetricSource,
    /// Query parameters for this source.
    pub params: Vec<(String, String)>,
}

impl SourceCall {
    /// A parameterless call.
    pub fn new(source: MetricSource) -> Self {
        Self {
            source,
            params: Vec::new(),
        }
    }

    /// A call with query parameters.
    pub fn with_params(source: MetricSource, params: Vec<(String, String)>) -> Self {
        Self { source, params }
    }
}

/// The Aggregation Engine.
///
/// Idempotent and side-effect-free: re-running a batch performs the same
/// fan-out again. There is no caching layer here.
pub struct AggregationEngine {
    gateway: Arc<SourceGateway>,
}

impl AggregationEngine {
    /// Create an engine over the given gateway.
    pub fn new(gateway: Arc<SourceGateway>) -> Self {
        Self { gateway }
    }

    /// Execute one batch and assemble the snapshot.
    ///
    /// The calls run concurrently with no ordering guarantee between them;
    /// the merge only proceeds after all have settled. A failed source
    /// becomes a snapshot entry, not an error — the engine raises only when
    /// every requested source failed, and then as a single
    /// [`AggregationError::AllSourcesFailed`].
    pub async fn snapshot(
        &self,
        calls: Vec<SourceCall>,
        now: UnixTime,
    ) -> Result<Snapshot, AggregationError> {
        if calls.is_empty() {
            return Err(AggregationError::NothingRequested);
        }
        let requested = calls.len();

        // Fan-out: every call is in flight before any is awaited.
        let futures = calls.into_iter().map(|call| {
            let gateway = Arc::clone(&self.gateway);
            async move {
                let outcome = match gateway.call(call.source, &call.params).await {
                    Ok(value) => SourceOutcome::Fulfilled(value),
                    Err(err) => {
                        warn!(source = %call.source, error = %err, "source failed");
                        SourceOutcome::Failed(err)
                    }
                };
                (call.source, outcome)
            }
        });

        // Fan-in: wait for all to settle, regardless of individual outcome.
        let outcomes = join_all(futures).await;

        if outcomes.iter().all(|(_, o)| !o.is_fulfilled()) {
            let failures = outcomes
                .iter()
                .filter_map(|(source, outcome)| {
                    outcome
                        .error()
                        .map(|e| (source.as_str().to_string(), e.message.clone()))
                })
                .collect();
            return Err(AggregationError::AllSourcesFailed { failures });
        }

        let snapshot = Snapshot::new(outcomes, now);
        info!(
            requested,
            fulfilled = snapshot.fulfilled_count(),
            failed = snapshot.failed_count(),
            "snapshot assembled"
        );
        Ok(snapshot)
    }
}
