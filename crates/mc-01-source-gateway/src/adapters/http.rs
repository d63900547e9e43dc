//! # HTTP Transport Adapter
//!
//! `reqwest`-backed implementation of the `BackendTransport` port.
//!
//! Only transport-level failures become `SourceError::Network` here; HTTP
//! error statuses are returned as replies so the gateway service can
//! classify them against the taxonomy in one place.

use async_trait::async_trait;
use shared_types::SourceError;
use std::time::Duration;

use crate::ports::{BackendTransport, HttpReply};

/// Backend transport over HTTP.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport against the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| SourceError::network(format!("failed to build client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn into_reply(response: reqwest::Response) -> HttpReply {
        let status = response.status().as_u16();
        // A body that is not valid JSON is carried as None; the service
        // classifies the status first and only then inspects the body.
        let body = response.json::<serde_json::Value>().await.ok();
        HttpReply { status, body }
    }
}

#[async_trait]
impl BackendTransport for HttpTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<HttpReply, SourceError> {
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| SourceError::network(e.to_string()))?;
        Ok(Self::into_reply(response).await)
    }

    async fn post(&self, path: &str, body: &serde_json::Value) -> Result<HttpReply, SourceError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| SourceError::network(e.to_string()))?;
        Ok(Self::into_reply(response).await)
    }
}
