//! Configuration management for the relay
//!
//! This module handles loading, validation, and management of all relay configuration.
//! Values come from a YAML file and are then overridden by environment variables
//! (a `.env` file is honored).

pub mod models;

pub use models::*;

use crate::utils::error::{RelayError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the relay
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Notion API settings
    #[serde(default)]
    pub notion: NotionConfig,
    /// Batch engine settings
    #[serde(default)]
    pub batch: BatchConfig,
    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file, without environment overrides
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| RelayError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| RelayError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load the full configuration: file (if present), then `.env` and
    /// process environment, then validation.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let mut config = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::from_file(path).await?
        } else {
            info!(
                "Configuration file {:?} not found, using defaults and environment",
                path
            );
            Self::default()
        };

        if let Ok(env_file) = dotenvy::dotenv() {
            debug!("Loaded environment from {:?}", env_file);
        }
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Override values from environment-style lookups.
    ///
    /// Recognized keys: `NOTION_TOKEN`, `NOTION_PAGE_ID`, `NOTION_VERSION`,
    /// `NOTION_API_BASE`, `RELAY_MAX_PAYLOAD`, `RELAY_HOST`, `RELAY_PORT`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("NOTION_TOKEN") {
            self.notion.token = token;
        }
        if let Some(page_id) = lookup("NOTION_PAGE_ID") {
            self.notion.page_id = page_id;
        }
        if let Some(version) = lookup("NOTION_VERSION") {
            self.notion.version = version;
        }
        if let Some(api_base) = lookup("NOTION_API_BASE") {
            self.notion.api_base = api_base.trim_end_matches('/').to_string();
        }
        if let Some(max_payload) = lookup("RELAY_MAX_PAYLOAD") {
            self.batch.max_payload = max_payload
                .parse()
                .map_err(|e| RelayError::Config(format!("Invalid RELAY_MAX_PAYLOAD: {}", e)))?;
        }
        if let Some(host) = lookup("RELAY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("RELAY_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| RelayError::Config(format!("Invalid RELAY_PORT: {}", e)))?;
        }
        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Get Notion configuration
    pub fn notion(&self) -> &NotionConfig {
        &self.notion
    }

    /// Get batch configuration
    pub fn batch(&self) -> &BatchConfig {
        &self.batch
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| RelayError::Config(format!("Server config error: {}", e)))?;

        self.notion
            .validate()
            .map_err(|e| RelayError::Config(format!("Notion config error: {}", e)))?;

        self.batch
            .validate()
            .map_err(|e| RelayError::Config(format!("Batch config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| RelayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
