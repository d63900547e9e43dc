//! # Aggregation Snapshot
//!
//! The merged result of one fan-out: per-source success/failure detail plus
//! the assembly timestamp. Ephemeral — rebuilt on demand, never persisted.

use mc_01_source_gateway::MetricSource;
use shared_types::{SourceError, SourceValue, UnixTime};
use std::collections::HashMap;

/// What one source contributed to a snapshot.
#[derive(Clone, Debug)]
pub enum SourceOutcome {
    /// The source answered.
    Fulfilled(SourceValue),
    /// The source failed; the rest of the snapshot is unaffected.
    Failed(SourceError),
}

impl SourceOutcome {
    /// Whether this source answered.
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, SourceOutcome::Fulfilled(_))
    }

    /// The value, if fulfilled.
    pub fn value(&self) -> Option<&SourceValue> {
        match self {
            SourceOutcome::Fulfilled(v) => Some(v),
            SourceOutcome::Failed(_) => None,
        }
    }

    /// The error, if failed.
    pub fn error(&self) -> Option<&SourceError> {
        match self {
            SourceOutcome::Fulfilled(_) => None,
            SourceOutcome::Failed(e) => Some(e),
        }
    }
}

/// One assembled snapshot.
#[derive(Clone, Debug)]
pub struct Snapshot {
    sources: HashMap<MetricSource, SourceOutcome>,
    /// When the fan-in completed.
    pub fetched_at: UnixTime,
}

impl Snapshot {
    /// Assemble a snapshot from settled outcomes.
    pub fn new(outcomes: Vec<(MetricSource, SourceOutcome)>, fetched_at: UnixTime) -> Self {
        Self {
            sources: outcomes.into_iter().collect(),
            fetched_at,
        }
    }

    /// Outcome for one source, if it was part of the batch.
    pub fn outcome(&self, source: MetricSource) -> Option<&SourceOutcome> {
        self.sources.get(&source)
    }

    /// Fulfilled value for one source.
    pub fn value(&self, source: MetricSource) -> Option<&SourceValue> {
        self.outcome(source).and_then(SourceOutcome::value)
    }

    /// Numeric field of a fulfilled source's JSON payload.
    ///
    /// `None` for failed sources, missing fields, and `NoContent` — a widget
    /// reading this directly renders its empty state; derived computations
    /// must check every input this way.
    pub fn number(&self, source: MetricSource, field: &str) -> Option<f64> {
        self.value(source)?.number(field)
    }

    /// Whether the source was requested but failed.
    pub fn is_unavailable(&self, source: MetricSource) -> bool {
        matches!(self.outcome(source), Some(SourceOutcome::Failed(_)))
    }

    /// Number of sources that answered.
    pub fn fulfilled_count(&self) -> usize {
        self.sources.values().filter(|o| o.is_fulfilled()).count()
    }

    /// Number of sources that failed.
    pub fn failed_count(&self) -> usize {
        self.sources.len() - self.fulfilled_count()
    }

    /// The failed sources and their errors.
    pub fn failed_sources(&self) -> Vec<(MetricSource, &SourceError)> {
        let mut failed: Vec<_> = self
            .sources
            .iter()
            .filter_map(|(source, outcome)| outcome.error().map(|e| (*source, e)))
            .collect();
        failed.sort_by_key(|(source, _)| source.as_str());
        failed
    }

    /// Total sources in the batch.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the batch was empty.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
