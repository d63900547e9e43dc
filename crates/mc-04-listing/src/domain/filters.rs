//! # Closed Filter Vocabulary
//!
//! One filter struct per collection, fields fixed at compile time. A filter
//! serializes to query pairs; unset fields and fields that trim to empty are
//! omitted entirely, so the backend never sees `status=` or `search=`.

use mc_03_moderation::{
    AccountStatus, DisputePriority, DisputeStatus, KycStatus, ProductStatus,
};
use serde::{Deserialize, Serialize};

/// A filter that serializes itself to query-string pairs.
///
/// Equality drives the page-reset rule: re-applying an equal filter keeps
/// the current page, applying a different one resets to page 1.
pub trait QueryFilter: Clone + PartialEq + Send + Sync {
    /// The query pairs this filter contributes, set fields only.
    fn query_pairs(&self) -> Vec<(String, String)>;
}

fn push_search(pairs: &mut Vec<(String, String)>, search: &Option<String>) {
    if let Some(s) = search {
        let s = s.trim();
        if !s.is_empty() {
            pairs.push(("search".to_string(), s.to_string()));
        }
    }
}

/// Legal form of a seller's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    /// Sole trader.
    Individual,
    /// Registered company.
    Company,
}

impl BusinessType {
    /// Wire name of the business type.
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessType::Individual => "individual",
            BusinessType::Company => "company",
        }
    }
}

/// Filter over the seller collection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SellerFilter {
    /// Free-text search over name and email.
    pub search: Option<String>,
    /// Account status.
    pub status: Option<AccountStatus>,
    /// Business type.
    pub business_type: Option<BusinessType>,
}

impl QueryFilter for SellerFilter {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_search(&mut pairs, &self.search);
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(bt) = self.business_type {
            pairs.push(("business_type".to_string(), bt.as_str().to_string()));
        }
        pairs
    }
}

/// Filter over the KYC submission queue.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KycFilter {
    /// Free-text search over the subject seller.
    pub search: Option<String>,
    /// Submission status.
    pub status: Option<KycStatus>,
}

impl QueryFilter for KycFilter {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_search(&mut pairs, &self.search);
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.as_str().to_string()));
        }
        pairs
    }
}

/// Filter over the product review queue.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductFilter {
    /// Free-text search over title and description.
    pub search: Option<String>,
    /// Listing status.
    pub status: Option<ProductStatus>,
    /// Category slug, backend-defined.
    pub category: Option<String>,
}

impl QueryFilter for ProductFilter {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_search(&mut pairs, &self.search);
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(category) = &self.category {
            let category = category.trim();
            if !category.is_empty() {
                pairs.push(("category".to_string(), category.to_string()));
            }
        }
        pairs
    }
}

/// Filter over the dispute queue.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisputeFilter {
    /// Free-text search over reason and parties.
    pub search: Option<String>,
    /// Dispute status.
    pub status: Option<DisputeStatus>,
    /// Triage priority.
    pub priority: Option<DisputePriority>,
}

impl QueryFilter for DisputeFilter {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_search(&mut pairs, &self.search);
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(priority) = self.priority {
            pairs.push(("priority".to_string(), priority.as_str().to_string()));
        }
        pairs
    }
}
