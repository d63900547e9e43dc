//! # Gateway-Backed Entity Store
//!
//! Store adapter over the DataSource Gateway's typed entity operations. The
//! backend applies a decision and its side effect in one `decideEntity`
//! call, which is what makes the commit atomic from the console's
//! perspective.

use async_trait::async_trait;
use mc_01_source_gateway::SourceGateway;
use serde::de::DeserializeOwned;
use shared_types::{AccountId, EntityId, EntityKind, SourceError};
use std::sync::Arc;

use crate::domain::{Account, AccountStatus, Dispute, KycSubmission, ProductListing};
use crate::ports::{CommittedDecision, DecidedEntity, EntityStore};

/// Entity store over the remote backend.
pub struct GatewayStore {
    gateway: Arc<SourceGateway>,
}

impl GatewayStore {
    /// Create a store over the given gateway.
    pub fn new(gateway: Arc<SourceGateway>) -> Self {
        Self { gateway }
    }

    fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, SourceError> {
        serde_json::from_value(value)
            .map_err(|e| SourceError::malformed(format!("unexpected entity shape: {e}")))
    }

    fn decision_name(entity: &DecidedEntity) -> &'static str {
        match entity {
            DecidedEntity::Kyc(e) => match e.status {
                crate::domain::KycStatus::Approved => "approve",
                _ => "reject",
            },
            DecidedEntity::Product(e) => match e.status {
                crate::domain::ProductStatus::Approved => "approve",
                _ => "reject",
            },
            DecidedEntity::Dispute(e) => match e.status {
                crate::domain::DisputeStatus::Settled => "settle",
                _ => "reject",
            },
        }
    }

    fn kind(entity: &DecidedEntity) -> EntityKind {
        match entity {
            DecidedEntity::Kyc(_) => EntityKind::Kyc,
            DecidedEntity::Product(_) => EntityKind::Product,
            DecidedEntity::Dispute(_) => EntityKind::Dispute,
        }
    }

    fn note(entity: &DecidedEntity) -> Option<&str> {
        match entity {
            DecidedEntity::Kyc(e) => e.decision_note.as_deref(),
            DecidedEntity::Product(e) => e.decision_note.as_deref(),
            DecidedEntity::Dispute(e) => e.decision_note.as_deref(),
        }
    }
}

#[async_trait]
impl EntityStore for GatewayStore {
    async fn get_kyc(&self, id: &EntityId) -> Result<KycSubmission, SourceError> {
        Self::decode(self.gateway.get_entity(EntityKind::Kyc, id).await?)
    }

    async fn get_product(&self, id: &EntityId) -> Result<ProductListing, SourceError> {
        Self::decode(self.gateway.get_entity(EntityKind::Product, id).await?)
    }

    async fn get_dispute(&self, id: &EntityId) -> Result<Dispute, SourceError> {
        Self::decode(self.gateway.get_entity(EntityKind::Dispute, id).await?)
    }

    async fn commit_decision(&self, decision: &CommittedDecision) -> Result<(), SourceError> {
        let entity = &decision.entity;
        self.gateway
            .decide_entity(
                Self::kind(entity),
                entity.id(),
                Self::decision_name(entity),
                Self::note(entity),
            )
            .await?;
        Ok(())
    }

    async fn get_account(&self, id: &AccountId) -> Result<Account, SourceError> {
        Self::decode(self.gateway.get_account(id).await?)
    }

    async fn set_account_status(
        &self,
        id: &AccountId,
        status: AccountStatus,
        reason: Option<&str>,
    ) -> Result<Account, SourceError> {
        Self::decode(
            self.gateway
                .set_account_status(id, status.as_str(), reason)
                .await?,
        )
    }
}
