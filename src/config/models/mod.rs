//! Configuration data models
//!
//! This module defines all configuration structures used throughout the relay.

#![allow(missing_docs)]

pub mod batch;
pub mod logging;
pub mod notion;
pub mod server;

pub use batch::*;
pub use logging::*;
pub use notion::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8787
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    2 * 1024 * 1024 // 2MB
}

/// Default Notion API base URL
pub fn default_api_base() -> String {
    "https://api.notion.com/v1".to_string()
}

/// Default Notion-Version header value
pub fn default_notion_version() -> String {
    "2025-09-03".to_string()
}

/// Default per-request character budget for block content
pub fn default_max_payload() -> usize {
    1800
}

/// Default page size for listing children
pub fn default_read_page_size() -> u32 {
    100
}

pub fn default_log_level() -> String {
    "info".to_string()
}
