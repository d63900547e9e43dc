//! # MC-03 Moderation
//!
//! The moderation state machine, the typed entity store, and the account
//! side channel.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Drive KYC submissions, product listings, and disputes from pending to a
//! terminal decision:
//! - one uniform transition algorithm across the three kinds (terminal
//!   check, note validation, write-through, side effect);
//! - a decided entity and its side effect are committed as one unit — no
//!   caller observes one without the other;
//! - suspension is its own two-state machine on the account, with a counter
//!   that increments exactly once per suspend.
//!
//! ## State machines
//!
//! | Entity | Transitions | Required input |
//! |--------|-------------|----------------|
//! | KYC submission | pending → approved / rejected | note on reject |
//! | Product listing | pending → approved / rejected | note on reject |
//! | Dispute | open → settled / rejected | resolution on both |
//! | Account | active ⇄ suspended | reason on suspend |
//!
//! ## Module Structure
//!
//! ```text
//! mc-03-moderation/
//! ├── domain/          # statuses, entities, errors
//! ├── ports/           # EntityStore (outbound)
//! ├── adapters/        # in-memory store, gateway-backed store
//! └── service/         # ModerationService, AccountService
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{
    Account, AccountStatus, Decision, Dispute, DisputeBreakdown, DisputeDecision, DisputePriority,
    DisputeStatus, KycDocument, KycStatus, KycSubmission, ModerationError, ProductListing,
    ProductStatus,
};
pub use ports::{CommittedDecision, DecidedEntity, EntityStore, SideEffect};
pub use service::{AccountService, ModerationService};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
