//! # MC-04 Listing
//!
//! List, filter, and paginate the console's entity collections.
//!
//! **Architecture:** Hexagonal (Ports/Adapters)
//!
//! ## Purpose
//!
//! One controller shape for every collection view:
//! - closed, per-kind filter structs serialized to query pairs (unset and
//!   empty fields are omitted, never sent as empty strings);
//! - 1-indexed pages; changing the filter always resets to page 1;
//! - server ordering is preserved as-is unless a sort is explicitly
//!   requested;
//! - every query carries a generation token, and a result that arrives
//!   after a newer query began is reported `Superseded`, never rendered.
//!
//! ## Module Structure
//!
//! ```text
//! mc-04-listing/
//! ├── domain/          # QueryFilter trait, per-kind filters, SortKey
//! ├── ports/           # ListBackend (outbound), mock backend
//! ├── adapters/        # gateway-backed list backend
//! └── controller       # ListController: state + supersession gate
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod controller;
pub mod domain;
pub mod ports;

// Re-exports
pub use controller::{ListController, QueryOutcome};
pub use domain::{
    BusinessType, DisputeFilter, KycFilter, ProductFilter, QueryFilter, SellerFilter, SortKey,
};
pub use ports::{ListBackend, MockListBackend};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
