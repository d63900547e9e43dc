//! # Moderation Domain

mod entities;
mod errors;
mod status;

pub use entities::{
    Account, Dispute, DisputeBreakdown, KycDocument, KycSubmission, ProductListing,
};
pub use errors::ModerationError;
pub use status::{
    AccountStatus, Decision, DisputeDecision, DisputePriority, DisputeStatus, KycStatus,
    ProductStatus,
};
