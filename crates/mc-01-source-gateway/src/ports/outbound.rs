//! # Outbound Ports
//!
//! The transport the gateway drives. Adapters own the wire; the port speaks
//! in statuses and decoded JSON bodies. Only transport-level failures
//! (connect, timeout) surface as errors here; HTTP error statuses come back
//! as replies for the gateway to classify.

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::SourceError;
use std::collections::HashMap;

/// A backend HTTP reply, stripped to what the gateway classifies.
#[derive(Clone, Debug)]
pub struct HttpReply {
    /// HTTP status code.
    pub status: u16,
    /// Decoded JSON body, if the response had one.
    pub body: Option<serde_json::Value>,
}

impl HttpReply {
    /// A reply with a JSON body.
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    /// A bodyless reply.
    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }
}

/// Backend transport - outbound port.
#[async_trait]
pub trait BackendTransport: Send + Sync {
    /// Issue a GET with the given query pairs.
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<HttpReply, SourceError>;

    /// Issue a POST with a JSON body.
    async fn post(&self, path: &str, body: &serde_json::Value) -> Result<HttpReply, SourceError>;
}

// =============================================================================
// Mock Implementation for Testing
// =============================================================================

/// Mock transport for testing.
///
/// Replies are registered per path; unregistered paths answer 404. All
/// issued requests are recorded for assertion.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<HashMap<String, Result<HttpReply, SourceError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

/// One request the mock saw.
#[derive(Clone, Debug)]
pub struct RecordedCall {
    /// Request path.
    pub path: String,
    /// Query pairs (GET) — empty for POST.
    pub query: Vec<(String, String)>,
    /// JSON body (POST) — `None` for GET.
    pub body: Option<serde_json::Value>,
}

impl MockTransport {
    /// Empty mock; every path answers 404.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reply for a path.
    pub fn reply_with(&self, path: &str, reply: HttpReply) {
        self.replies
            .lock()
            .insert(path.to_string(), Ok(reply));
    }

    /// Register a transport failure for a path.
    pub fn fail_with(&self, path: &str, err: SourceError) {
        self.replies.lock().insert(path.to_string(), Err(err));
    }

    /// Requests issued so far.
    pub fn recorded(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    fn lookup(&self, path: &str) -> Result<HttpReply, SourceError> {
        self.replies
            .lock()
            .get(path)
            .cloned()
            .unwrap_or_else(|| Ok(HttpReply::empty(404)))
    }
}

#[async_trait]
impl BackendTransport for MockTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<HttpReply, SourceError> {
        self.calls.lock().push(RecordedCall {
            path: path.to_string(),
            query: query.to_vec(),
            body: None,
        });
        self.lookup(path)
    }

    async fn post(&self, path: &str, body: &serde_json::Value) -> Result<HttpReply, SourceError> {
        self.calls.lock().push(RecordedCall {
            path: path.to_string(),
            query: Vec::new(),
            body: Some(body.clone()),
        });
        self.lookup(path)
    }
}
