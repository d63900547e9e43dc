//! # Shared Identifiers
//!
//! Opaque identifier newtypes and the timestamp alias used across subsystems.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unix timestamp in seconds since epoch.
pub type UnixTime = u64;

/// Opaque identifier of a moderated entity (KYC submission, product
/// listing, or dispute). Assigned by the backend, immutable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub String);

impl EntityId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Opaque identifier of a user/seller account. Referenced by moderated
/// entities via `subject_ref`; never owned by them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl AccountId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The three moderated entity kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Seller identity/business verification submission.
    Kyc,
    /// Product listing awaiting publication review.
    Product,
    /// Buyer/seller dispute.
    Dispute,
}

impl EntityKind {
    /// Backend resource segment for this kind.
    pub fn resource(&self) -> &'static str {
        match self {
            EntityKind::Kyc => "kyc-submissions",
            EntityKind::Product => "products",
            EntityKind::Dispute => "disputes",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Kyc => "kyc",
            EntityKind::Product => "product",
            EntityKind::Dispute => "dispute",
        };
        f.write_str(name)
    }
}
