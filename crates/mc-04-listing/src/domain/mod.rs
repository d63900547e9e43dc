//! # Listing Domain

mod filters;
mod sort;

pub use filters::{
    BusinessType, DisputeFilter, KycFilter, ProductFilter, QueryFilter, SellerFilter,
};
pub use sort::SortKey;
