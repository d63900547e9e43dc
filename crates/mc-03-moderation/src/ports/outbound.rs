//! # Outbound Ports
//!
//! The entity store the moderation services drive. Typed read accessors per
//! entity kind, one commit operation that carries a decision and its side
//! effect as a single unit, and the account side-channel write.

use async_trait::async_trait;
use shared_types::{AccountId, EntityId, SourceError};

use crate::domain::{Account, AccountStatus, Dispute, KycSubmission, ProductListing};

/// A decided entity ready to be written through.
#[derive(Clone, Debug)]
pub enum DecidedEntity {
    /// A decided KYC submission.
    Kyc(KycSubmission),
    /// A decided product listing.
    Product(ProductListing),
    /// A resolved dispute.
    Dispute(Dispute),
}

impl DecidedEntity {
    /// The entity's identifier.
    pub fn id(&self) -> &EntityId {
        match self {
            DecidedEntity::Kyc(e) => &e.id,
            DecidedEntity::Product(e) => &e.id,
            DecidedEntity::Dispute(e) => &e.id,
        }
    }
}

/// The side effect a decision triggers on the referenced account.
///
/// Product publication rides inside the product entity itself; dispute
/// resolution has no account side effect (suspension stays a separate,
/// explicit action).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SideEffect {
    /// No account change.
    None,
    /// KYC approval: the seller becomes eligible to list products.
    GrantListingEligibility(AccountId),
}

/// A decision and its side effect, committed as one unit.
///
/// The store must apply both or neither: the console never shows a decided
/// entity without its side effect, or the side effect without the decision.
#[derive(Clone, Debug)]
pub struct CommittedDecision {
    /// The decided entity.
    pub entity: DecidedEntity,
    /// The account side effect, if any.
    pub side_effect: SideEffect,
}

/// Moderation entity store - outbound port.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Fetch one KYC submission.
    async fn get_kyc(&self, id: &EntityId) -> Result<KycSubmission, SourceError>;

    /// Fetch one product listing.
    async fn get_product(&self, id: &EntityId) -> Result<ProductListing, SourceError>;

    /// Fetch one dispute.
    async fn get_dispute(&self, id: &EntityId) -> Result<Dispute, SourceError>;

    /// Write a decided entity and its side effect atomically.
    ///
    /// On failure nothing is applied; the entity's prior state stays
    /// observable.
    async fn commit_decision(&self, decision: &CommittedDecision) -> Result<(), SourceError>;

    /// Fetch one account record.
    async fn get_account(&self, id: &AccountId) -> Result<Account, SourceError>;

    /// The side-channel status write. This operation owns the suspension
    /// counter rule: the counter increments exactly once per
    /// active→suspended edge and never otherwise. The edge check and the
    /// write are one unit — concurrent suspends cannot double-increment.
    async fn set_account_status(
        &self,
        id: &AccountId,
        status: AccountStatus,
        reason: Option<&str>,
    ) -> Result<Account, SourceError>;
}
