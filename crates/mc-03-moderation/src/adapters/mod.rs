//! # Moderation Adapters

pub mod gateway_store;
pub mod memory_store;

pub use gateway_store::GatewayStore;
pub use memory_store::MemoryStore;
