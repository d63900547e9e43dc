//! # In-Memory Entity Store
//!
//! Store adapter backed by process memory. Used by the test suites and as
//! the reference implementation of the commit/side-channel semantics: each
//! operation is one critical section, so a commit is all-or-nothing and the
//! suspension counter cannot double-increment.

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::{AccountId, EntityId, SourceError};
use std::collections::HashMap;

use crate::domain::{Account, AccountStatus, Dispute, KycSubmission, ProductListing};
use crate::ports::{CommittedDecision, DecidedEntity, EntityStore, SideEffect};

#[derive(Default)]
struct Inner {
    kyc: HashMap<EntityId, KycSubmission>,
    products: HashMap<EntityId, ProductListing>,
    disputes: HashMap<EntityId, Dispute>,
    accounts: HashMap<AccountId, Account>,
    suspension_reasons: Vec<(AccountId, String)>,
    fail_next_commit: Option<SourceError>,
}

/// In-memory store adapter.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a KYC submission.
    pub fn insert_kyc(&self, entity: KycSubmission) {
        self.inner.lock().kyc.insert(entity.id.clone(), entity);
    }

    /// Seed a product listing.
    pub fn insert_product(&self, entity: ProductListing) {
        self.inner.lock().products.insert(entity.id.clone(), entity);
    }

    /// Seed a dispute.
    pub fn insert_dispute(&self, entity: Dispute) {
        self.inner.lock().disputes.insert(entity.id.clone(), entity);
    }

    /// Seed an account.
    pub fn insert_account(&self, account: Account) {
        self.inner.lock().accounts.insert(account.id.clone(), account);
    }

    /// Make the next commit fail with the given error.
    pub fn fail_next_commit(&self, err: SourceError) {
        self.inner.lock().fail_next_commit = Some(err);
    }

    /// Reasons recorded by suspend writes, in order.
    pub fn suspension_reasons(&self) -> Vec<(AccountId, String)> {
        self.inner.lock().suspension_reasons.clone()
    }

    fn not_found(what: &str, id: &str) -> SourceError {
        SourceError::malformed(format!("{what} not found: {id}"))
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn get_kyc(&self, id: &EntityId) -> Result<KycSubmission, SourceError> {
        self.inner
            .lock()
            .kyc
            .get(id)
            .cloned()
            .ok_or_else(|| Self::not_found("kyc submission", id.as_str()))
    }

    async fn get_product(&self, id: &EntityId) -> Result<ProductListing, SourceError> {
        self.inner
            .lock()
            .products
            .get(id)
            .cloned()
            .ok_or_else(|| Self::not_found("product", id.as_str()))
    }

    async fn get_dispute(&self, id: &EntityId) -> Result<Dispute, SourceError> {
        self.inner
            .lock()
            .disputes
            .get(id)
            .cloned()
            .ok_or_else(|| Self::not_found("dispute", id.as_str()))
    }

    async fn commit_decision(&self, decision: &CommittedDecision) -> Result<(), SourceError> {
        let mut inner = self.inner.lock();
        if let Some(err) = inner.fail_next_commit.take() {
            return Err(err);
        }

        // Entity write and side effect inside one critical section.
        match &decision.entity {
            DecidedEntity::Kyc(e) => {
                inner.kyc.insert(e.id.clone(), e.clone());
            }
            DecidedEntity::Product(e) => {
                inner.products.insert(e.id.clone(), e.clone());
            }
            DecidedEntity::Dispute(e) => {
                inner.disputes.insert(e.id.clone(), e.clone());
            }
        }
        match &decision.side_effect {
            SideEffect::None => {}
            SideEffect::GrantListingEligibility(account_id) => {
                if let Some(account) = inner.accounts.get_mut(account_id) {
                    account.can_list_products = true;
                }
            }
        }
        Ok(())
    }

    async fn get_account(&self, id: &AccountId) -> Result<Account, SourceError> {
        self.inner
            .lock()
            .accounts
            .get(id)
            .cloned()
            .ok_or_else(|| Self::not_found("account", id.as_str()))
    }

    async fn set_account_status(
        &self,
        id: &AccountId,
        status: AccountStatus,
        reason: Option<&str>,
    ) -> Result<Account, SourceError> {
        let mut inner = self.inner.lock();
        let account = inner
            .accounts
            .get(id)
            .cloned()
            .ok_or_else(|| Self::not_found("account", id.as_str()))?;

        let updated = match (account.status, status) {
            // The only edge that touches the counter.
            (AccountStatus::Active, AccountStatus::Suspended) => Account {
                status: AccountStatus::Suspended,
                suspension_count: account.suspension_count + 1,
                ..account
            },
            (AccountStatus::Suspended, AccountStatus::Active) => Account {
                status: AccountStatus::Active,
                ..account
            },
            // Same-status writes are no-ops.
            _ => account,
        };

        if updated.status == AccountStatus::Suspended {
            if let Some(reason) = reason {
                inner
                    .suspension_reasons
                    .push((id.clone(), reason.to_string()));
            }
        }
        inner.accounts.insert(id.clone(), updated.clone());
        Ok(updated)
    }
}
