//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::config::Config;
use crate::core::batch::{BatchExecutor, ExecutorConfig};
use crate::core::blocks::BlockId;
use crate::core::notion::{DocumentClient, NotionClient};
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for cheap sharing across worker threads.
#[derive(Clone)]
pub struct AppState {
    /// Relay configuration (shared read-only)
    pub config: Arc<Config>,
    /// Transport to the Notion API
    pub client: Arc<dyn DocumentClient>,
    /// Batch engine bound to the configured page
    pub executor: Arc<BatchExecutor>,
}

impl AppState {
    /// Create state around an existing document client
    pub fn new(config: Config, client: Arc<dyn DocumentClient>) -> Result<Self> {
        let executor_config = ExecutorConfig::from_config(&config)?;
        let executor = BatchExecutor::new(Arc::clone(&client), executor_config);
        Ok(Self {
            config: Arc::new(config),
            client,
            executor: Arc::new(executor),
        })
    }

    /// Create state backed by the Notion HTTP client
    pub fn from_config(config: Config) -> Result<Self> {
        let client = NotionClient::new(&config.notion)?;
        Self::new(config, Arc::new(client))
    }

    /// Page that the relay reads from and writes to
    pub fn page_id(&self) -> &BlockId {
        &self.executor.config().page_id
    }

    /// Get relay configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
