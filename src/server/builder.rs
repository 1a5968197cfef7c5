//! Server builder and run_with_config function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_with_config entry point used by the binary.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::utils::error::{RelayError, Result};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    state: Option<AppState>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use prepared state instead of building a Notion client
    pub fn with_state(mut self, state: AppState) -> Self {
        self.state = Some(state);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        match (self.config, self.state) {
            (_, Some(state)) => {
                let server_config = state.config().server.clone();
                Ok(HttpServer::with_state(server_config, state))
            }
            (Some(config), None) => HttpServer::new(&config),
            (None, None) => Err(RelayError::Config("Configuration is required".to_string())),
        }
    }
}

/// Run the server with an already loaded configuration
pub async fn run_with_config(config: Config) -> Result<()> {
    info!("Starting Notion relay {}", crate::VERSION);

    let server = ServerBuilder::new().with_config(config.clone()).build()?;
    info!(
        "Server starting at: http://{}:{}",
        config.server().host,
        config.server().port
    );
    info!("API Endpoints:");
    info!("   GET    /health  - Health check");
    info!("   GET    /read    - List page children");
    info!("   POST   /append  - Append one block");
    info!("   DELETE /delete  - Archive one block");
    info!("   POST   /execute - Run a batch of actions");

    server.start().await
}
