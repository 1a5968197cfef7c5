//! Batch execution settings

use super::*;
use serde::{Deserialize, Serialize};

/// Settings for the batch executor and the append endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Character budget for a single block's content
    #[serde(default = "default_max_payload")]
    pub max_payload: usize,
    /// Emit an error entry for actions that are neither append nor delete
    #[serde(default)]
    pub report_unknown_actions: bool,
    /// Page size used by the read endpoint
    #[serde(default = "default_read_page_size")]
    pub read_page_size: u32,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_payload: default_max_payload(),
            report_unknown_actions: false,
            read_page_size: default_read_page_size(),
        }
    }
}

impl BatchConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_payload == 0 {
            return Err("max_payload must be greater than 0".to_string());
        }
        if !(1..=100).contains(&self.read_page_size) {
            return Err("read_page_size must be between 1 and 100".to_string());
        }
        Ok(())
    }
}
