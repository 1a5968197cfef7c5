//! notion-relay - HTTP relay for editing a Notion page
//!
//! Loads configuration, sets up tracing and serves the relay endpoints.

#![allow(missing_docs)]

use clap::Parser;
use notion_relay::utils::logging::init_tracing;
use notion_relay::{Config, server};
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line interface
#[derive(Debug, Parser)]
#[command(name = "notion-relay", version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "RELAY_CONFIG", default_value = "config/relay.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(&cli.config).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging);

    match server::run_with_config(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
