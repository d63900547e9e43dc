//! # Status State Machines
//!
//! Per-kind status sets with one shared shape: a non-terminal starting
//! state, a terminal approve-like and reject-like outcome, and no way back
//! out of a terminal state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// KYC submission status.
///
/// Absence of a submission is the explicit `NotSubmitted` status; it is
/// never inferred from a null reference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    /// Seller has not submitted identity documents yet.
    #[default]
    NotSubmitted,
    /// Awaiting operator review.
    Pending,
    /// Verified; the seller may list products.
    Approved,
    /// Rejected with a note.
    Rejected,
}

impl KycStatus {
    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: KycStatus) -> bool {
        match (self, next) {
            (Self::NotSubmitted, Self::Pending) => true, // upstream submission
            (Self::Pending, Self::Approved) => true,
            (Self::Pending, Self::Rejected) => true,
            _ => false,
        }
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            KycStatus::NotSubmitted => "not_submitted",
            KycStatus::Pending => "pending",
            KycStatus::Approved => "approved",
            KycStatus::Rejected => "rejected",
        }
    }
}

/// Product listing status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    /// Awaiting operator review.
    #[default]
    Pending,
    /// Pulled back for a second look. Advisory only; decisions are legal
    /// from here exactly as from `Pending`.
    UnderReview,
    /// Approved and published.
    Approved,
    /// Rejected with a note.
    Rejected,
}

impl ProductStatus {
    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: ProductStatus) -> bool {
        match (self, next) {
            (Self::Pending, Self::UnderReview) => true,
            (Self::Pending | Self::UnderReview, Self::Approved) => true,
            (Self::Pending | Self::UnderReview, Self::Rejected) => true,
            _ => false,
        }
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Pending => "pending",
            ProductStatus::UnderReview => "under_review",
            ProductStatus::Approved => "approved",
            ProductStatus::Rejected => "rejected",
        }
    }
}

/// Dispute status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeStatus {
    /// Awaiting resolution.
    #[default]
    Open,
    /// Settled in the buyer's or seller's favor, with a resolution text.
    Settled,
    /// Rejected with a resolution text.
    Rejected,
}

impl DisputeStatus {
    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: DisputeStatus) -> bool {
        matches!(
            (self, next),
            (Self::Open, Self::Settled) | (Self::Open, Self::Rejected)
        )
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Settled | Self::Rejected)
    }

    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisputeStatus::Open => "open",
            DisputeStatus::Settled => "settled",
            DisputeStatus::Rejected => "rejected",
        }
    }
}

/// Dispute priority, set by the backend's triage rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputePriority {
    /// Routine complaint.
    Low,
    /// Standard queue.
    #[default]
    Medium,
    /// Escalated; surfaced first in triage views.
    High,
}

impl DisputePriority {
    /// Wire name of the priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisputePriority::Low => "low",
            DisputePriority::Medium => "medium",
            DisputePriority::High => "high",
        }
    }
}

/// Account status — the side channel's own two-state machine.
///
/// Bidirectional and independent of the three moderation entities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    /// Normal operation.
    #[default]
    Active,
    /// Suspended by an operator, with a reason.
    Suspended,
}

impl AccountStatus {
    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Suspended => "suspended",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator decision on a KYC submission or product listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Approve; note optional.
    Approve,
    /// Reject; note required.
    Reject,
}

impl Decision {
    /// Whether this decision requires a note.
    pub fn requires_note(&self) -> bool {
        matches!(self, Decision::Reject)
    }

    /// Wire name of the decision.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Approve => "approve",
            Decision::Reject => "reject",
        }
    }
}

/// Operator decision on a dispute. Resolution text is required on both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeDecision {
    /// Settle the dispute.
    Settle,
    /// Reject the dispute.
    Reject,
}

impl DisputeDecision {
    /// Wire name of the decision.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisputeDecision::Settle => "settle",
            DisputeDecision::Reject => "reject",
        }
    }

    /// Target status of this decision.
    pub fn target(&self) -> DisputeStatus {
        match self {
            DisputeDecision::Settle => DisputeStatus::Settled,
            DisputeDecision::Reject => DisputeStatus::Rejected,
        }
    }
}

impl Decision {
    /// Target KYC status of this decision.
    pub fn kyc_target(&self) -> KycStatus {
        match self {
            Decision::Approve => KycStatus::Approved,
            Decision::Reject => KycStatus::Rejected,
        }
    }

    /// Target product status of this decision.
    pub fn product_target(&self) -> ProductStatus {
        match self {
            Decision::Approve => ProductStatus::Approved,
            Decision::Reject => ProductStatus::Rejected,
        }
    }
}
