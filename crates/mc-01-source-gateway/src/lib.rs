//! # MC-01 DataSource Gateway
//!
//! One named remote query per call, one envelope boundary for the whole
//! console.
//!
//! **Architecture:** Hexagonal (Ports/Adapters)
//!
//! ## Purpose
//!
//! Every dashboard metric and every entity operation the console consumes is
//! a single, independent remote call:
//! - no shared transaction, no implicit retry;
//! - typed success (`SourceValue`) or typed failure (`SourceError`);
//! - the `{data, meta?}` envelope is decoded exactly once, here.
//!
//! ## Module Structure
//!
//! ```text
//! mc-01-source-gateway/
//! ├── domain/          # MetricSource catalog, list resources
//! ├── ports/           # BackendTransport (outbound), mock transport
//! ├── adapters/        # reqwest HTTP transport
//! └── service          # SourceGateway: decode + error mapping
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{ListResource, MetricSource};
pub use ports::{BackendTransport, HttpReply, MockTransport};
pub use service::SourceGateway;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
