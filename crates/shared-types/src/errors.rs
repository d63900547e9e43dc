//! # Source Error Taxonomy
//!
//! The closed set of transport/backend failure kinds shared by every
//! subsystem that talks to a remote data source.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of a source failure. Closed set; there is no "other".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceErrorKind {
    /// Transport-level failure (connect, timeout, DNS). Retryable.
    Network,
    /// Backend rejected the credentials (401/403).
    Unauthorized,
    /// Backend reported an internal failure (5xx). Retryable.
    ServerError,
    /// Response body did not match the expected envelope, or the request
    /// itself was rejected as malformed (other 4xx).
    Malformed,
}

/// A failed call against one named remote source.
///
/// Carries a human-readable message extracted from the response body when
/// the backend provided one, and a generic fallback otherwise.
#[derive(Clone, Debug, Error, Serialize, Deserialize)]
#[error("{kind:?}: {message}")]
pub struct SourceError {
    /// Failure classification.
    pub kind: SourceErrorKind,
    /// Operator-facing message.
    pub message: String,
}

impl SourceError {
    /// Build an error of the given kind.
    pub fn new(kind: SourceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Transport-level failure.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Network, message)
    }

    /// Credential rejection.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Unauthorized, message)
    }

    /// Backend-side failure.
    pub fn server(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::ServerError, message)
    }

    /// Unexpected response shape or rejected request.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Malformed, message)
    }

    /// Whether re-invoking the operation may succeed without operator action.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            SourceErrorKind::Network | SourceErrorKind::ServerError
        )
    }
}

/// A successful value from a remote source.
///
/// A 204/no-body success is an explicit `NoContent`, distinct from a body
/// whose `data` field is JSON `null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SourceValue {
    /// Decoded `data` field of the response envelope.
    Json(serde_json::Value),
    /// Success with no body (HTTP 204).
    NoContent,
}

impl SourceValue {
    /// The JSON payload, if any. `NoContent` yields `None`.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            SourceValue::Json(v) => Some(v),
            SourceValue::NoContent => None,
        }
    }

    /// Read a numeric field from a JSON object payload.
    pub fn number(&self, field: &str) -> Option<f64> {
        self.as_json()?.get(field)?.as_f64()
    }
}
