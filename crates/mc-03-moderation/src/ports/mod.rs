//! # Moderation Ports

pub mod outbound;

pub use outbound::{CommittedDecision, DecidedEntity, EntityStore, SideEffect};
