//! # Listing Ports

mod outbound;

pub use outbound::{ListBackend, MockListBackend};
