//! # Account Side-Channel Service
//!
//! Suspension as its own two-state machine, decoupled from the three
//! moderation entities. All callers go through this service; the store's
//! `set_account_status` is the single owner of the counter increment rule.

use shared_types::{AccountId, UnixTime};
use std::sync::Arc;
use tracing::info;

use crate::domain::{Account, AccountStatus, ModerationError};
use crate::ports::EntityStore;

/// The account side channel.
pub struct AccountService {
    store: Arc<dyn EntityStore>,
}

impl AccountService {
    /// Create the service over an entity store.
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Suspend an account.
    ///
    /// Requires a non-empty reason. Suspending an already-suspended account
    /// is a no-op success: the counter does not move. The status read
    /// immediately precedes the guarded write, and the store applies the
    /// increment only on the active→suspended edge.
    pub async fn suspend(
        &self,
        id: &AccountId,
        reason: &str,
        _now: UnixTime,
    ) -> Result<Account, ModerationError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ModerationError::missing("suspension reason"));
        }

        let current = self.store.get_account(id).await?;
        if current.status == AccountStatus::Suspended {
            return Ok(current);
        }

        let updated = self
            .store
            .set_account_status(id, AccountStatus::Suspended, Some(reason))
            .await?;
        info!(account = %id, count = updated.suspension_count, "account suspended");
        Ok(updated)
    }

    /// Reactivate a suspended account.
    ///
    /// No reason required; the suspension counter is never reset.
    /// Unsuspending an active account is a no-op success.
    pub async fn unsuspend(
        &self,
        id: &AccountId,
        _now: UnixTime,
    ) -> Result<Account, ModerationError> {
        let current = self.store.get_account(id).await?;
        if current.status == AccountStatus::Active {
            return Ok(current);
        }

        let updated = self
            .store
            .set_account_status(id, AccountStatus::Active, None)
            .await?;
        info!(account = %id, "account reactivated");
        Ok(updated)
    }
}
