//! # notion-relay
//!
//! A small HTTP relay that edits one Notion page on behalf of clients that
//! cannot talk to the Notion API directly.
//!
//! ## Features
//!
//! - **Batch execution**: ordered append and delete actions, each outcome reported
//! - **Idempotent deletes**: missing or already archived blocks count as success
//! - **Payload splitting**: oversized text is appended as several paragraphs
//! - **Single-block endpoints**: read, append and delete one block at a time
//!
//! ## Running the relay
//!
//! ```rust,no_run
//! use notion_relay::{Config, Relay};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/relay.yaml").await?;
//!     let relay = Relay::new(config)?;
//!     relay.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Executing a batch directly
//!
//! ```rust,no_run
//! use notion_relay::core::batch::{BatchExecutor, BatchRequest, ExecutorConfig};
//! use notion_relay::core::notion::NotionClient;
//! use notion_relay::Config;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/relay.yaml").await?;
//!     let client = Arc::new(NotionClient::new(&config.notion)?);
//!     let executor = BatchExecutor::new(client, ExecutorConfig::from_config(&config)?);
//!
//!     let request: BatchRequest = serde_json::from_str(
//!         r#"{"actions": [{"op": "append", "block": {"text": "hello"}}]}"#,
//!     )?;
//!     let report = executor.execute(&request.parse_actions()).await;
//!     println!("{}", serde_json::to_string_pretty(&report)?);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{RelayError, Result};

use tracing::{debug, info};

/// The relay: configuration plus a ready HTTP server
pub struct Relay {
    config: Config,
    server: server::HttpServer,
}

impl Relay {
    /// Create a relay talking to the Notion API
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new relay instance");

        let server = server::HttpServer::new(&config)?;

        Ok(Self { config, server })
    }

    /// Get relay configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the relay server
    pub async fn run(self) -> Result<()> {
        info!("Starting Notion relay");
        debug!("Configuration: {:#?}", self.config);

        self.server.start().await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Relay build information
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            git_hash: env!("RELAY_GIT_HASH"),
            rust_version: env!("RELAY_RUST_VERSION"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
