//! # List Controller
//!
//! Holds the view state for one collection: the current filter, the
//! 1-indexed page, and an optional explicit sort. Every query stamps a
//! generation token; any state change or newer query moves the generation
//! forward, and a result carrying a stale token is reported `Superseded`
//! so rapid filter changes can never paint an older result over a newer
//! one.

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use shared_types::{Page, SourceError};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::domain::{QueryFilter, SortKey};
use crate::ports::ListBackend;

/// Outcome of one list query.
#[derive(Debug)]
pub enum QueryOutcome<T> {
    /// The result is current and may be rendered.
    Fresh(Page<T>),
    /// A newer query or state change started while this one was in
    /// flight; the result was discarded.
    Superseded,
}

impl<T> QueryOutcome<T> {
    /// The page, if the result was fresh.
    pub fn into_page(self) -> Option<Page<T>> {
        match self {
            QueryOutcome::Fresh(page) => Some(page),
            QueryOutcome::Superseded => None,
        }
    }

    /// Whether the result was discarded as stale.
    pub fn is_superseded(&self) -> bool {
        matches!(self, QueryOutcome::Superseded)
    }
}

struct ViewState<F> {
    filter: F,
    page: u32,
    sort: Option<SortKey>,
}

/// View state and supersession gate for one collection.
pub struct ListController<F: QueryFilter> {
    state: Mutex<ViewState<F>>,
    generation: AtomicU64,
}

impl<F: QueryFilter> ListController<F> {
    /// A controller starting on page 1 with the given filter.
    pub fn new(filter: F) -> Self {
        Self {
            state: Mutex::new(ViewState {
                filter,
                page: 1,
                sort: None,
            }),
            generation: AtomicU64::new(0),
        }
    }

    /// The current filter.
    pub fn filter(&self) -> F {
        self.state.lock().filter.clone()
    }

    /// The current 1-indexed page.
    pub fn page(&self) -> u32 {
        self.state.lock().page
    }

    /// Replace the filter.
    ///
    /// A changed filter always resets to page 1 and invalidates in-flight
    /// queries. Re-applying an equal filter changes nothing.
    pub fn apply_filter(&self, filter: F) {
        let mut state = self.state.lock();
        if state.filter == filter {
            return;
        }
        state.filter = filter;
        state.page = 1;
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Move to a page. Pages are 1-indexed; clamping against `total_pages`
    /// is the caller's call, via `PageMeta::clamp`.
    pub fn set_page(&self, page: u32) {
        let mut state = self.state.lock();
        let page = page.max(1);
        if state.page == page {
            return;
        }
        state.page = page;
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Request or clear an explicit sort. Applies to subsequent queries
    /// only; without one, server order is preserved untouched.
    pub fn request_sort(&self, sort: Option<SortKey>) {
        self.state.lock().sort = sort;
    }

    /// Run one query against the backend with the current view state.
    ///
    /// The result is typed on the way out; an item that does not decode as
    /// `T` makes the whole page malformed. A result that comes back after
    /// the generation moved on is discarded, errors included.
    pub async fn query<T: DeserializeOwned>(
        &self,
        backend: &dyn ListBackend,
    ) -> Result<QueryOutcome<T>, SourceError> {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let (pairs, page, sort) = {
            let state = self.state.lock();
            (state.filter.query_pairs(), state.page, state.sort.clone())
        };

        let fetched = backend.fetch_page(&pairs, page).await;
        if self.generation.load(Ordering::SeqCst) != token {
            debug!(page, "discarding superseded list result");
            return Ok(QueryOutcome::Superseded);
        }

        let (mut items, meta) = fetched?;
        if let Some(sort) = sort {
            sort.apply(&mut items);
        }
        let typed = items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()
            .map_err(|e| SourceError::malformed(format!("unexpected item shape: {e}")))?;
        Ok(QueryOutcome::Fresh(Page::new(typed, meta)))
    }
}
