//! # Listing Adapters

mod gateway_list;

pub use gateway_list::GatewayList;
