//! # Source Gateway Service
//!
//! Implements the gateway contract: one named remote query per call,
//! classified against the source error taxonomy, with the response envelope
//! decoded exactly once at this boundary.
//!
//! Each call is independent. There is no shared transaction and no implicit
//! retry; retrying is the operator's decision, surfaced through
//! `SourceError::is_retryable`.

use shared_types::{
    AccountId, ApiEnvelope, EntityId, EntityKind, PageMeta, SourceError, SourceValue,
};
use std::sync::Arc;
use tracing::debug;

use crate::domain::{ListResource, MetricSource};
use crate::ports::{BackendTransport, HttpReply};

/// The DataSource Gateway.
///
/// Wraps a transport and maps every reply onto the closed taxonomy:
/// 2xx with envelope → `SourceValue::Json`, 204/no body →
/// `SourceValue::NoContent`, 401/403 → `Unauthorized`, 5xx → `ServerError`,
/// anything else → `Malformed`.
pub struct SourceGateway {
    transport: Arc<dyn BackendTransport>,
}

impl SourceGateway {
    /// Create a gateway over the given transport.
    pub fn new(transport: Arc<dyn BackendTransport>) -> Self {
        Self { transport }
    }

    /// Query one named metric source.
    pub async fn call(
        &self,
        source: MetricSource,
        params: &[(String, String)],
    ) -> Result<SourceValue, SourceError> {
        debug!(source = %source, "querying metric source");
        let reply = self.transport.get(&source.path(), params).await?;
        Self::classify(reply).map(|(value, _)| value)
    }

    /// Fetch one moderated entity by id.
    pub async fn get_entity(
        &self,
        kind: EntityKind,
        id: &EntityId,
    ) -> Result<serde_json::Value, SourceError> {
        debug!(kind = %kind, id = %id, "fetching entity");
        let path = format!("/admin/{}/{}", kind.resource(), id);
        let reply = self.transport.get(&path, &[]).await?;
        Self::expect_json(Self::classify(reply)?.0)
    }

    /// Fetch one page of a listable collection.
    ///
    /// Returns the raw items in server order plus the page metadata. A list
    /// response without metadata is malformed.
    pub async fn list(
        &self,
        resource: ListResource,
        query: &[(String, String)],
        page: u32,
    ) -> Result<(Vec<serde_json::Value>, PageMeta), SourceError> {
        let mut pairs = query.to_vec();
        pairs.push(("page".to_string(), page.to_string()));
        debug!(path = resource.path(), page, "listing collection");

        let reply = self.transport.get(resource.path(), &pairs).await?;
        let (value, meta) = Self::classify(reply)?;
        let meta =
            meta.ok_or_else(|| SourceError::malformed("list response missing page metadata"))?;
        let items = match value {
            SourceValue::Json(serde_json::Value::Array(items)) => items,
            other => {
                return Err(SourceError::malformed(format!(
                    "expected list data to be an array, got {other:?}"
                )))
            }
        };
        Ok((items, meta))
    }

    /// Commit a moderation decision on an entity.
    ///
    /// The backend applies the status write and its side effect as one
    /// unit and answers with the updated entity.
    pub async fn decide_entity(
        &self,
        kind: EntityKind,
        id: &EntityId,
        decision: &str,
        note: Option<&str>,
    ) -> Result<serde_json::Value, SourceError> {
        debug!(kind = %kind, id = %id, decision, "committing decision");
        let path = format!("/admin/{}/{}/decision", kind.resource(), id);
        let body = serde_json::json!({ "decision": decision, "note": note });
        let reply = self.transport.post(&path, &body).await?;
        Self::expect_json(Self::classify(reply)?.0)
    }

    /// Fetch one account record.
    pub async fn get_account(&self, account: &AccountId) -> Result<serde_json::Value, SourceError> {
        debug!(account = %account, "fetching account");
        let path = format!("/admin/accounts/{account}");
        let reply = self.transport.get(&path, &[]).await?;
        Self::expect_json(Self::classify(reply)?.0)
    }

    /// Set an account's status through the side-channel operation.
    pub async fn set_account_status(
        &self,
        account: &AccountId,
        status: &str,
        reason: Option<&str>,
    ) -> Result<serde_json::Value, SourceError> {
        debug!(account = %account, status, "setting account status");
        let path = format!("/admin/accounts/{account}/status");
        let body = serde_json::json!({ "status": status, "reason": reason });
        let reply = self.transport.post(&path, &body).await?;
        Self::expect_json(Self::classify(reply)?.0)
    }

    // =========================================================================
    // Reply classification
    // =========================================================================

    /// Classify one reply against the taxonomy and decode the envelope.
    ///
    /// A 204 or bodyless success is `NoContent`, distinct from a response
    /// whose `data` field is JSON `null`.
    pub fn classify(reply: HttpReply) -> Result<(SourceValue, Option<PageMeta>), SourceError> {
        match reply.status {
            204 => Ok((SourceValue::NoContent, None)),
            status if (200..300).contains(&status) => match reply.body {
                None => Ok((SourceValue::NoContent, None)),
                Some(body) => {
                    let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_value(body)
                        .map_err(|e| {
                            SourceError::malformed(format!("unexpected response shape: {e}"))
                        })?;
                    Ok((SourceValue::Json(envelope.data), envelope.meta))
                }
            },
            401 | 403 => Err(SourceError::unauthorized(Self::extract_message(&reply))),
            status if status >= 500 => Err(SourceError::server(Self::extract_message(&reply))),
            _ => Err(SourceError::malformed(Self::extract_message(&reply))),
        }
    }

    /// Pull a human-readable message out of an error body, with a generic
    /// fallback when the backend gave none.
    fn extract_message(reply: &HttpReply) -> String {
        reply
            .body
            .as_ref()
            .and_then(|body| {
                body.get("message")
                    .or_else(|| body.get("error"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("request failed with status {}", reply.status))
    }

    fn expect_json(value: SourceValue) -> Result<serde_json::Value, SourceError> {
        match value {
            SourceValue::Json(v) => Ok(v),
            SourceValue::NoContent => {
                Err(SourceError::malformed("expected a body, got no content"))
            }
        }
    }
}
