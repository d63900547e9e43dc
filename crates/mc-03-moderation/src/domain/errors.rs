//! # Moderation Errors
//!
//! The moderation slice of the console taxonomy. `InvalidTransition` and
//! `Validation` are operator-actionable and not retryable; `Source` wraps a
//! transport/backend failure and is retryable without losing the operator's
//! typed note (the service never consumes input on failure).

use shared_types::{EntityKind, SourceError};
use thiserror::Error;

/// Errors from the moderation state machine and the account side channel.
#[derive(Debug, Clone, Error)]
pub enum ModerationError {
    /// The entity is already terminal, or the transition is not legal.
    #[error("invalid transition for {kind}: {from} -> {to}")]
    InvalidTransition {
        /// Which entity kind.
        kind: EntityKind,
        /// Current status.
        from: String,
        /// Attempted status.
        to: String,
    },

    /// A required input is missing or empty after trimming.
    #[error("{field} is required: {message}")]
    Validation {
        /// The offending input.
        field: &'static str,
        /// What the operator must correct.
        message: String,
    },

    /// The write-through or a read failed at the source.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl ModerationError {
    /// Whether re-invoking the operation may succeed without operator action.
    pub fn is_retryable(&self) -> bool {
        match self {
            ModerationError::Source(e) => e.is_retryable(),
            _ => false,
        }
    }

    pub(crate) fn missing(field: &'static str) -> Self {
        ModerationError::Validation {
            field,
            message: "must not be empty".to_string(),
        }
    }
}
