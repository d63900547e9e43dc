//! # Gateway Ports

pub mod outbound;

pub use outbound::{BackendTransport, HttpReply, MockTransport};
