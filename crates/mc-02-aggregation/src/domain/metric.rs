//! # Derived Metrics
//!
//! A derived value is either available or explicitly not. "Unavailable" is a
//! first-class state shown to the operator; it is never rendered as `0`.

use serde::{Deserialize, Serialize};

/// A derived dashboard metric.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Metric {
    /// The metric was computed from fulfilled inputs.
    Available(f64),
    /// At least one input failed, was missing, or the computation was
    /// undefined (zero denominator).
    Unavailable,
}

impl Metric {
    /// A ratio metric.
    ///
    /// `Unavailable` when either input is missing or the denominator is
    /// zero — never a divide-by-zero, never `NaN`.
    pub fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> Self {
        match (numerator, denominator) {
            (Some(_), Some(d)) if d == 0.0 => Metric::Unavailable,
            (Some(n), Some(d)) => Metric::Available(n / d),
            _ => Metric::Unavailable,
        }
    }

    /// The value, if available.
    pub fn value(&self) -> Option<f64> {
        match self {
            Metric::Available(v) => Some(*v),
            Metric::Unavailable => None,
        }
    }

    /// Whether the metric was computed.
    pub fn is_available(&self) -> bool {
        matches!(self, Metric::Available(_))
    }
}

impl From<Option<f64>> for Metric {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => Metric::Available(v),
            None => Metric::Unavailable,
        }
    }
}
