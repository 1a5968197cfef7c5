//! Notion API configuration

use super::*;
use crate::core::blocks::BlockId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Connection settings for the Notion API
#[derive(Clone, Serialize, Deserialize)]
pub struct NotionConfig {
    /// Integration token sent as a bearer credential
    #[serde(default)]
    pub token: String,
    /// Page whose children are read and written
    #[serde(default)]
    pub page_id: String,
    /// Value of the `Notion-Version` header
    #[serde(default = "default_notion_version")]
    pub version: String,
    /// API base URL, without a trailing slash
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            page_id: String::new(),
            version: default_notion_version(),
            api_base: default_api_base(),
            timeout: default_timeout(),
        }
    }
}

// Keep the token out of logs
impl fmt::Debug for NotionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotionConfig")
            .field("token", &if self.token.is_empty() { "" } else { "[REDACTED]" })
            .field("page_id", &self.page_id)
            .field("version", &self.version)
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl NotionConfig {
    /// Request timeout as a duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// The configured page id, normalized
    pub fn page_block_id(&self) -> Result<BlockId, String> {
        BlockId::parse(&self.page_id).map_err(|e| format!("page_id: {}", e))
    }

    /// Validate Notion configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.token.trim().is_empty() {
            return Err("Notion token is required".to_string());
        }

        self.page_block_id()?;

        if self.version.trim().is_empty() {
            return Err("Notion version cannot be empty".to_string());
        }

        url::Url::parse(&self.api_base)
            .map_err(|e| format!("Invalid api_base '{}': {}", self.api_base, e))?;

        if self.timeout == 0 {
            return Err("Timeout cannot be 0".to_string());
        }

        Ok(())
    }
}
