//! # Moderation Entities
//!
//! The three moderated entity kinds plus the account record they reference.
//! Entities are created upstream in a non-terminal status and mutated only
//! through the state machine; `subject_ref` is a reference, never mutated by
//! moderation itself.

use serde::{Deserialize, Serialize};
use shared_types::{AccountId, EntityId, UnixTime};

use super::status::{AccountStatus, DisputePriority, DisputeStatus, KycStatus, ProductStatus};

/// One identity/business document attached to a KYC submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycDocument {
    /// Document kind (id card, business registration, ...).
    pub kind: String,
    /// Where the document is stored.
    pub url: String,
}

/// A seller identity verification submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KycSubmission {
    /// Immutable identifier.
    pub id: EntityId,
    /// Current status.
    pub status: KycStatus,
    /// Set at creation, immutable.
    pub submitted_at: UnixTime,
    /// Set by the terminal transition, null until then.
    pub decided_at: Option<UnixTime>,
    /// Required on reject, optional on approve.
    pub decision_note: Option<String>,
    /// The seller this submission concerns.
    pub subject_ref: AccountId,
    /// Submitted document set.
    pub documents: Vec<KycDocument>,
}

impl KycSubmission {
    /// A decided copy of this submission.
    pub fn with_decision(
        &self,
        status: KycStatus,
        note: Option<String>,
        decided_at: UnixTime,
    ) -> Self {
        Self {
            status,
            decided_at: Some(decided_at),
            decision_note: note,
            ..self.clone()
        }
    }
}

/// A product listing awaiting publication review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductListing {
    /// Immutable identifier.
    pub id: EntityId,
    /// Current status.
    pub status: ProductStatus,
    /// Set at creation, immutable.
    pub created_at: UnixTime,
    /// Set by the terminal transition, null until then.
    pub decided_at: Option<UnixTime>,
    /// Required on reject, optional on approve.
    pub decision_note: Option<String>,
    /// The seller this listing concerns.
    pub subject_ref: AccountId,
    /// Price in minor units.
    pub price_cents: u64,
    /// Units in stock.
    pub stock: u32,
    /// Media URLs.
    pub media: Vec<String>,
    /// Whether the listing is live. Set by approval.
    pub published: bool,
}

impl ProductListing {
    /// A decided copy of this listing. Approval publishes it.
    pub fn with_decision(
        &self,
        status: ProductStatus,
        note: Option<String>,
        decided_at: UnixTime,
    ) -> Self {
        Self {
            status,
            decided_at: Some(decided_at),
            decision_note: note,
            published: status == ProductStatus::Approved,
            ..self.clone()
        }
    }
}

/// Financial breakdown of a dispute, in minor units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeBreakdown {
    /// Total of the disputed order.
    pub order_total_cents: u64,
    /// Refund the buyer is asking for.
    pub refund_requested_cents: u64,
    /// Platform commission on the order.
    pub commission_cents: u64,
}

/// A buyer/seller dispute.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    /// Immutable identifier.
    pub id: EntityId,
    /// Current status.
    pub status: DisputeStatus,
    /// Set at creation, immutable.
    pub created_at: UnixTime,
    /// Set by the terminal transition, null until then.
    pub decided_at: Option<UnixTime>,
    /// Resolution text; required on both settle and reject.
    pub decision_note: Option<String>,
    /// The account the dispute concerns.
    pub subject_ref: AccountId,
    /// Why the dispute was opened.
    pub reason: String,
    /// Triage priority. Set by the backend, never by moderation.
    #[serde(default)]
    pub priority: DisputePriority,
    /// The money involved.
    pub breakdown: DisputeBreakdown,
}

impl Dispute {
    /// A resolved copy of this dispute.
    pub fn with_resolution(
        &self,
        status: DisputeStatus,
        resolution: String,
        decided_at: UnixTime,
    ) -> Self {
        Self {
            status,
            decided_at: Some(decided_at),
            decision_note: Some(resolution),
            ..self.clone()
        }
    }
}

/// The account record referenced by `subject_ref` — the side channel.
///
/// Invariant: `status == Suspended` implies at least one prior suspend, so
/// `suspension_count >= 1`. Unsuspending never resets the counter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Immutable identifier.
    pub id: AccountId,
    /// Active or suspended.
    pub status: AccountStatus,
    /// Incremented exactly once per suspend, never decremented.
    pub suspension_count: u32,
    /// Whether the seller may list products. Granted by KYC approval.
    pub can_list_products: bool,
}

impl Account {
    /// A fresh active account.
    pub fn new(id: AccountId) -> Self {
        Self {
            id,
            status: AccountStatus::Active,
            suspension_count: 0,
            can_list_products: false,
        }
    }
}
