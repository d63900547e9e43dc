//! # `ApiEnvelope` Response Shape
//!
//! The universal decoded shape for backend responses.
//!
//! The backend wraps every payload in `{data, meta?}`. The gateway decodes
//! this envelope exactly once at its boundary; no caller ever inspects a raw
//! response body or branches on nested `data.data` shapes.

use serde::{Deserialize, Serialize};

/// The universal response envelope for all backend payloads.
///
/// - `data` carries the typed payload.
/// - `meta` is present only on paginated list responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// The actual payload (generic over resource type).
    pub data: T,
    /// Pagination metadata, present on list responses.
    #[serde(default = "none_meta", skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

fn none_meta() -> Option<PageMeta> {
    None
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page, 1-indexed.
    pub current_page: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of items across all pages.
    pub total_count: u64,
}

impl PageMeta {
    /// Clamp a requested page into `[1, total_pages]`.
    ///
    /// The list controller always honors the page it is given; clamping a
    /// page beyond `total_pages` is the caller's responsibility. This helper
    /// exists for those callers.
    pub fn clamp(&self, requested: u32) -> u32 {
        requested.max(1).min(self.total_pages.max(1))
    }
}

/// One page of results.
///
/// `items` preserve the server-defined ordering; they are never re-sorted
/// here unless the caller explicitly requested a different sort key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items in server order.
    pub items: Vec<T>,
    /// Page position and totals.
    pub meta: PageMeta,
}

impl<T> Page<T> {
    /// Assemble a page from decoded items and envelope metadata.
    pub fn new(items: Vec<T>, meta: PageMeta) -> Self {
        Self { items, meta }
    }

    /// Whether this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
