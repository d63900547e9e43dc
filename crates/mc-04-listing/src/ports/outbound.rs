//! # Outbound Ports
//!
//! The collection backend the controller queries. The port returns raw item
//! objects plus the backend's page metadata; typing the items is the
//! controller's job, and clamping out-of-range pages is the caller's.

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::{PageMeta, SourceError};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Notify;

/// Collection backend - outbound port.
#[async_trait]
pub trait ListBackend: Send + Sync {
    /// Fetch one page of a collection with the given filter pairs.
    async fn fetch_page(
        &self,
        query: &[(String, String)],
        page: u32,
    ) -> Result<(Vec<serde_json::Value>, PageMeta), SourceError>;
}

// =============================================================================
// Mock Implementation for Testing
// =============================================================================

/// Mock list backend for testing.
///
/// Pages are registered per page number; unregistered pages answer an empty
/// page. A hold can be armed so that exactly one fetch blocks until
/// released, which lets tests interleave an in-flight query with a newer
/// one. All issued fetches are recorded for assertion.
#[derive(Default)]
pub struct MockListBackend {
    pages: Mutex<HashMap<u32, (Vec<serde_json::Value>, PageMeta)>>,
    hold: Mutex<Option<Arc<Notify>>>,
    calls: Mutex<Vec<(Vec<(String, String)>, u32)>>,
}

impl MockListBackend {
    /// Empty mock; every page answers empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page of items.
    pub fn page_with(&self, page: u32, items: Vec<serde_json::Value>, meta: PageMeta) {
        self.pages.lock().insert(page, (items, meta));
    }

    /// Arm a hold: the next fetch blocks until the returned handle is
    /// notified.
    pub fn hold_next_fetch(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.hold.lock() = Some(notify.clone());
        notify
    }

    /// Fetches issued so far, as (query, page) pairs.
    pub fn recorded(&self) -> Vec<(Vec<(String, String)>, u32)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl ListBackend for MockListBackend {
    async fn fetch_page(
        &self,
        query: &[(String, String)],
        page: u32,
    ) -> Result<(Vec<serde_json::Value>, PageMeta), SourceError> {
        self.calls.lock().push((query.to_vec(), page));

        let held = self.hold.lock().take();
        if let Some(notify) = held {
            notify.notified().await;
        }

        Ok(self.pages.lock().get(&page).cloned().unwrap_or((
            Vec::new(),
            PageMeta {
                current_page: page,
                total_pages: 0,
                total_count: 0,
            },
        )))
    }
}
