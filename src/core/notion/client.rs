//! Notion blocks API client
//!
//! reqwest-backed implementation of [`DocumentClient`]. Every request carries
//! the bearer token and the `Notion-Version` header as client defaults.

use super::traits::DocumentClient;
use super::types::{AppendResponse, ArchiveResponse, FetchResponse, ListResponse};
use crate::config::NotionConfig;
use crate::core::blocks::BlockId;
use crate::utils::error::{RelayError, Result};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder, StatusCode};
use serde_json::{Value, json};
use tracing::debug;

const NOTION_VERSION_HEADER: &str = "notion-version";

/// HTTP client for the Notion blocks endpoints
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: Client,
    api_base: String,
}

impl NotionClient {
    /// Build a client from configuration
    pub fn new(config: &NotionConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|e| RelayError::config(format!("Invalid Notion token: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        headers.insert(
            HeaderName::from_static(NOTION_VERSION_HEADER),
            HeaderValue::from_str(&config.version)
                .map_err(|e| RelayError::config(format!("Invalid Notion version: {}", e)))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = ClientBuilder::new()
            .timeout(config.timeout_duration())
            .user_agent(concat!("notion-relay/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| RelayError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn block_url(&self, id: &BlockId) -> String {
        format!("{}/blocks/{}", self.api_base, id)
    }

    fn children_url(&self, parent: &BlockId) -> String {
        format!("{}/blocks/{}/children", self.api_base, parent)
    }
}

/// Parse a body as JSON, keeping non-JSON text as a string value
fn lenient_json(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

#[async_trait]
impl DocumentClient for NotionClient {
    async fn fetch_block(&self, id: &BlockId) -> Result<FetchResponse> {
        let response = self.http.get(self.block_url(id)).send().await?;
        let status = response.status();
        let body = lenient_json(response.text().await?);

        debug!(block_id = %id, status = status.as_u16(), "Fetched block");
        Ok(FetchResponse {
            found: status != StatusCode::NOT_FOUND,
            status: status.as_u16(),
            body,
        })
    }

    async fn append_children(
        &self,
        parent: &BlockId,
        children: Vec<Value>,
    ) -> Result<AppendResponse> {
        let response = self
            .http
            .patch(self.children_url(parent))
            .json(&json!({ "children": children }))
            .send()
            .await?;
        let status = response.status();
        let body: Value = response.json().await?;

        debug!(parent = %parent, status = status.as_u16(), "Appended children");
        Ok(AppendResponse {
            ok: status.is_success(),
            status: status.as_u16(),
            body,
        })
    }

    async fn archive_block(&self, id: &BlockId) -> Result<ArchiveResponse> {
        let response = self
            .http
            .patch(self.block_url(id))
            .json(&json!({ "archived": true }))
            .send()
            .await?;
        let status = response.status();
        let body_text = response.text().await?;

        debug!(block_id = %id, status = status.as_u16(), "Archived block");
        Ok(ArchiveResponse {
            ok: status.is_success(),
            status: status.as_u16(),
            body_text,
        })
    }

    async fn list_children(&self, parent: &BlockId, page_size: u32) -> Result<ListResponse> {
        let response = self
            .http
            .get(self.children_url(parent))
            .query(&[("page_size", page_size)])
            .send()
            .await?;
        let status = response.status();
        let body = lenient_json(response.text().await?);

        Ok(ListResponse {
            status: status.as_u16(),
            body,
        })
    }
}
