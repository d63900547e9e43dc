//! # Gateway-Backed List Backend
//!
//! Binds the list port to one collection resource on the DataSource
//! Gateway. One adapter instance per collection view.

use async_trait::async_trait;
use mc_01_source_gateway::{ListResource, SourceGateway};
use shared_types::{PageMeta, SourceError};
use std::sync::Arc;

use crate::ports::ListBackend;

/// List backend over the remote backend, fixed to one resource.
pub struct GatewayList {
    gateway: Arc<SourceGateway>,
    resource: ListResource,
}

impl GatewayList {
    /// Create a backend for the given collection resource.
    pub fn new(gateway: Arc<SourceGateway>, resource: ListResource) -> Self {
        Self { gateway, resource }
    }
}

#[async_trait]
impl ListBackend for GatewayList {
    async fn fetch_page(
        &self,
        query: &[(String, String)],
        page: u32,
    ) -> Result<(Vec<serde_json::Value>, PageMeta), SourceError> {
        self.gateway.list(self.resource, query, page).await
    }
}
