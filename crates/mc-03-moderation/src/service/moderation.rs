//! # Moderation State Machine Service
//!
//! One transition algorithm across the three entity kinds:
//!
//! 1. reject if the entity is already terminal (`InvalidTransition`);
//! 2. reject if a required note is missing or empty after trimming
//!    (`Validation`);
//! 3. build the decided copy (status, `decided_at`, `decision_note`);
//! 4. commit it with its side effect as one unit through the store;
//! 5. on any failure the prior state stays untouched.
//!
//! Validation always completes before the write-through begins; a `Source`
//! failure surfaces as retryable without consuming the operator's note.

use shared_types::{EntityId, EntityKind, UnixTime};
use std::sync::Arc;
use tracing::info;

use crate::domain::{
    Decision, Dispute, DisputeDecision, KycSubmission, ModerationError, ProductListing,
};
use crate::ports::{CommittedDecision, DecidedEntity, EntityStore, SideEffect};

/// The moderation state machine.
pub struct ModerationService {
    store: Arc<dyn EntityStore>,
}

impl ModerationService {
    /// Create the service over an entity store.
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Decide a KYC submission.
    ///
    /// Approval grants the referenced seller listing eligibility in the
    /// same commit.
    pub async fn decide_kyc(
        &self,
        id: &EntityId,
        decision: Decision,
        note: Option<&str>,
        now: UnixTime,
    ) -> Result<KycSubmission, ModerationError> {
        let current = self.store.get_kyc(id).await?;
        let target = decision.kyc_target();

        if current.status.is_terminal() {
            return Err(ModerationError::InvalidTransition {
                kind: EntityKind::Kyc,
                from: current.status.as_str().to_string(),
                to: target.as_str().to_string(),
            });
        }
        let note = Self::validate_note(decision, note)?;

        let decided = current.with_decision(target, note, now);
        let side_effect = match decision {
            Decision::Approve => {
                SideEffect::GrantListingEligibility(decided.subject_ref.clone())
            }
            Decision::Reject => SideEffect::None,
        };
        self.store
            .commit_decision(&CommittedDecision {
                entity: DecidedEntity::Kyc(decided.clone()),
                side_effect,
            })
            .await?;

        info!(id = %id, decision = decision.as_str(), "kyc submission decided");
        Ok(decided)
    }

    /// Decide a product listing. Approval publishes it.
    pub async fn decide_product(
        &self,
        id: &EntityId,
        decision: Decision,
        note: Option<&str>,
        now: UnixTime,
    ) -> Result<ProductListing, ModerationError> {
        let current = self.store.get_product(id).await?;
        let target = decision.product_target();

        if current.status.is_terminal() {
            return Err(ModerationError::InvalidTransition {
                kind: EntityKind::Product,
                from: current.status.as_str().to_string(),
                to: target.as_str().to_string(),
            });
        }
        let note = Self::validate_note(decision, note)?;

        let decided = current.with_decision(target, note, now);
        self.store
            .commit_decision(&CommittedDecision {
                entity: DecidedEntity::Product(decided.clone()),
                side_effect: SideEffect::None,
            })
            .await?;

        info!(id = %id, decision = decision.as_str(), "product listing decided");
        Ok(decided)
    }

    /// Resolve a dispute. The resolution text is required on both outcomes,
    /// and neither outcome touches the account's status.
    pub async fn resolve_dispute(
        &self,
        id: &EntityId,
        decision: DisputeDecision,
        resolution: &str,
        now: UnixTime,
    ) -> Result<Dispute, ModerationError> {
        let current = self.store.get_dispute(id).await?;
        let target = decision.target();

        if current.status.is_terminal() {
            return Err(ModerationError::InvalidTransition {
                kind: EntityKind::Dispute,
                from: current.status.as_str().to_string(),
                to: target.as_str().to_string(),
            });
        }
        let resolution = resolution.trim();
        if resolution.is_empty() {
            return Err(ModerationError::missing("resolution"));
        }

        let resolved = current.with_resolution(target, resolution.to_string(), now);
        self.store
            .commit_decision(&CommittedDecision {
                entity: DecidedEntity::Dispute(resolved.clone()),
                side_effect: SideEffect::None,
            })
            .await?;

        info!(id = %id, decision = decision.as_str(), "dispute resolved");
        Ok(resolved)
    }

    /// Note rule shared by KYC and product decisions: required and
    /// non-empty after trimming on reject, optional on approve. A present
    /// note is kept (trimmed) either way.
    fn validate_note(
        decision: Decision,
        note: Option<&str>,
    ) -> Result<Option<String>, ModerationError> {
        let trimmed = note.map(str::trim).filter(|n| !n.is_empty());
        if decision.requires_note() && trimmed.is_none() {
            return Err(ModerationError::missing("decision note"));
        }
        Ok(trimmed.map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use crate::domain::{Account, KycStatus, ProductStatus};
    use shared_types::{AccountId, SourceError};

    fn pending_kyc(id: &str, seller: &str) -> KycSubmission {
        KycSubmission {
            id: EntityId::from(id),
            status: KycStatus::Pending,
            submitted_at: 1_700_000_000,
            decided_at: None,
            decision_note: None,
            subject_ref: AccountId::from(seller),
            documents: vec![],
        }
    }

    fn pending_product(id: &str, seller: &str) -> ProductListing {
        ProductListing {
            id: EntityId::from(id),
            status: ProductStatus::Pending,
            created_at: 1_700_000_000,
            decided_at: None,
            decision_note: None,
            subject_ref: AccountId::from(seller),
            price_cents: 2_500,
            stock: 3,
            media: vec![],
            published: false,
        }
    }

    fn open_dispute(id: &str, seller: &str) -> Dispute {
        Dispute {
            id: EntityId::from(id),
            status: crate::domain::DisputeStatus::Open,
            created_at: 1_700_000_000,
            decided_at: None,
            decision_note: None,
            subject_ref: AccountId::from(seller),
            reason: "item not received".to_string(),
            priority: crate::domain::DisputePriority::Medium,
            breakdown: crate::domain::DisputeBreakdown {
                order_total_cents: 5_000,
                refund_requested_cents: 5_000,
                commission_cents: 500,
            },
        }
    }

    fn service_with_store() -> (Arc<MemoryStore>, ModerationService) {
        let store = Arc::new(MemoryStore::new());
        let service = ModerationService::new(store.clone());
        (store, service)
    }

    #[tokio::test]
    async fn test_approve_kyc_sets_decision_fields_and_side_effect() {
        let (store, service) = service_with_store();
        store.insert_kyc(pending_kyc("kyc-1", "seller-1"));
        store.insert_account(Account::new(AccountId::from("seller-1")));

        let decided = service
            .decide_kyc(
                &EntityId::from("kyc-1"),
                Decision::Approve,
                Some("docs verified"),
                1_700_000_500,
            )
            .await
            .unwrap();

        assert_eq!(decided.status, KycStatus::Approved);
        assert_eq!(decided.decided_at, Some(1_700_000_500));
        assert_eq!(decided.decision_note.as_deref(), Some("docs verified"));

        let account = store.get_account(&AccountId::from("seller-1")).await.unwrap();
        assert!(account.can_list_products);
    }

    #[tokio::test]
    async fn test_terminal_entity_rejects_further_transitions() {
        let (store, service) = service_with_store();
        let mut kyc = pending_kyc("kyc-2", "seller-2");
        kyc.status = KycStatus::Rejected;
        kyc.decided_at = Some(1_700_000_001);
        store.insert_kyc(kyc);

        let err = service
            .decide_kyc(&EntityId::from("kyc-2"), Decision::Approve, None, 2)
            .await
            .unwrap_err();
        assert!(matches!(err, ModerationError::InvalidTransition { .. }));

        // Prior state untouched.
        let unchanged = store.get_kyc(&EntityId::from("kyc-2")).await.unwrap();
        assert_eq!(unchanged.status, KycStatus::Rejected);
        assert_eq!(unchanged.decided_at, Some(1_700_000_001));
    }

    #[tokio::test]
    async fn test_reject_requires_non_whitespace_note() {
        let (store, service) = service_with_store();
        store.insert_kyc(pending_kyc("kyc-3", "seller-3"));

        for bad_note in [None, Some(""), Some("   \t")] {
            let err = service
                .decide_kyc(&EntityId::from("kyc-3"), Decision::Reject, bad_note, 2)
                .await
                .unwrap_err();
            assert!(matches!(err, ModerationError::Validation { .. }));
        }

        // No write happened.
        let unchanged = store.get_kyc(&EntityId::from("kyc-3")).await.unwrap();
        assert_eq!(unchanged.status, KycStatus::Pending);
        assert!(unchanged.decided_at.is_none());
    }

    #[tokio::test]
    async fn test_approve_without_note_is_fine() {
        let (store, service) = service_with_store();
        store.insert_product(pending_product("prod-1", "seller-1"));

        let decided = service
            .decide_product(&EntityId::from("prod-1"), Decision::Approve, None, 9)
            .await
            .unwrap();
        assert_eq!(decided.status, ProductStatus::Approved);
        assert!(decided.published);
        assert!(decided.decision_note.is_none());
    }

    #[tokio::test]
    async fn test_product_rejection_stays_unpublished() {
        let (store, service) = service_with_store();
        store.insert_product(pending_product("prod-2", "seller-1"));

        let decided = service
            .decide_product(
                &EntityId::from("prod-2"),
                Decision::Reject,
                Some("prohibited item"),
                9,
            )
            .await
            .unwrap();
        assert_eq!(decided.status, ProductStatus::Rejected);
        assert!(!decided.published);
    }

    #[tokio::test]
    async fn test_settle_dispute_records_resolution() {
        let (store, service) = service_with_store();
        store.insert_dispute(open_dispute("disp-1", "seller-1"));

        let resolved = service
            .resolve_dispute(
                &EntityId::from("disp-1"),
                DisputeDecision::Settle,
                "refund issued",
                1_700_000_900,
            )
            .await
            .unwrap();
        assert_eq!(resolved.status, crate::domain::DisputeStatus::Settled);
        assert_eq!(resolved.decided_at, Some(1_700_000_900));
        assert_eq!(resolved.decision_note.as_deref(), Some("refund issued"));
    }

    #[tokio::test]
    async fn test_dispute_resolution_text_required_on_both_outcomes() {
        let (store, service) = service_with_store();
        store.insert_dispute(open_dispute("disp-2", "seller-2"));

        for decision in [DisputeDecision::Settle, DisputeDecision::Reject] {
            let err = service
                .resolve_dispute(&EntityId::from("disp-2"), decision, "  ", 2)
                .await
                .unwrap_err();
            assert!(matches!(err, ModerationError::Validation { .. }));
        }
    }

    #[tokio::test]
    async fn test_settled_dispute_is_terminal() {
        let (store, service) = service_with_store();
        let mut dispute = open_dispute("disp-3", "seller-3");
        dispute.status = crate::domain::DisputeStatus::Settled;
        dispute.decided_at = Some(5);
        store.insert_dispute(dispute);

        let err = service
            .resolve_dispute(
                &EntityId::from("disp-3"),
                DisputeDecision::Reject,
                "changed my mind",
                6,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ModerationError::InvalidTransition { .. }));
    }

    #[tokio::test]
    async fn test_failed_commit_leaves_prior_state() {
        let (store, service) = service_with_store();
        store.insert_kyc(pending_kyc("kyc-4", "seller-4"));
        store.fail_next_commit(SourceError::server("backend down"));

        let err = service
            .decide_kyc(
                &EntityId::from("kyc-4"),
                Decision::Approve,
                Some("docs fine"),
                7,
            )
            .await
            .unwrap_err();
        assert!(err.is_retryable());

        let unchanged = store.get_kyc(&EntityId::from("kyc-4")).await.unwrap();
        assert_eq!(unchanged.status, KycStatus::Pending);
        assert!(unchanged.decided_at.is_none());
    }
}
