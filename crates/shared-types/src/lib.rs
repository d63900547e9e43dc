//! # Shared Types Crate
//!
//! Cross-subsystem types for the Mercato console core.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Envelope Integrity**: `ApiEnvelope<T>` is the sole decoded response
//!   shape; callers never branch on the shape of a backend response.
//! - **Closed Error Surface**: Every transport/backend failure is a
//!   `SourceError` with one of four kinds. There is no untyped error path.

pub mod entities;
pub mod envelope;
pub mod errors;

pub use entities::*;
pub use envelope::{ApiEnvelope, Page, PageMeta};
pub use errors::*;
