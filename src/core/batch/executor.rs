//! Sequential batch execution
//!
//! Actions run strictly one after another, each remote call awaited before
//! the next starts. A failing action never stops the batch.

use super::append::AppendOperation;
use super::delete::DeleteOperation;
use super::types::{Action, ErrorEntry, ExecutionReport};
use crate::config::Config;
use crate::core::blocks::BlockId;
use crate::core::notion::DocumentClient;
use crate::utils::error::{RelayError, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

pub const UNSUPPORTED_ACTION_ERROR: &str = "Unsupported action";

/// Settings the executor needs, resolved from [`Config`]
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Page that receives appended blocks
    pub page_id: BlockId,
    /// Character budget per appended block
    pub max_payload: usize,
    /// Emit an error entry for actions that are skipped
    pub report_unknown_actions: bool,
}

impl ExecutorConfig {
    pub fn new(page_id: BlockId) -> Self {
        Self {
            page_id,
            max_payload: crate::config::default_max_payload(),
            report_unknown_actions: false,
        }
    }

    /// Set the character budget
    pub fn with_max_payload(mut self, max_payload: usize) -> Self {
        self.max_payload = max_payload.max(1);
        self
    }

    /// Set whether unsupported actions are reported
    pub fn with_report_unknown_actions(mut self, report: bool) -> Self {
        self.report_unknown_actions = report;
        self
    }

    /// Resolve from the relay configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let page_id = config.notion.page_block_id().map_err(RelayError::Config)?;
        Ok(Self::new(page_id)
            .with_max_payload(config.batch.max_payload)
            .with_report_unknown_actions(config.batch.report_unknown_actions))
    }
}

/// Runs batches of append and delete actions against one page
pub struct BatchExecutor {
    client: Arc<dyn DocumentClient>,
    config: ExecutorConfig,
}

impl BatchExecutor {
    pub fn new(client: Arc<dyn DocumentClient>, config: ExecutorConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Execute `actions` in order and collect every outcome.
    pub async fn execute(&self, actions: &[Action]) -> ExecutionReport {
        let started = Instant::now();
        let mut report = ExecutionReport::new();

        let deleter = DeleteOperation::new(self.client.as_ref());
        let appender = AppendOperation::new(
            self.client.as_ref(),
            &self.config.page_id,
            self.config.max_payload,
        );

        for (index, action) in actions.iter().enumerate() {
            debug!(index, op = action.kind().as_str(), "Running action");
            match action {
                Action::Delete { id } => report.record(deleter.run(id).await),
                Action::Append { block } => report.extend(appender.run(block).await),
                Action::Unsupported { .. } if self.config.report_unknown_actions => {
                    report.record(Err(ErrorEntry::new(action.kind())
                        .with_error(UNSUPPORTED_ACTION_ERROR)))
                }
                Action::Unsupported { .. } => {
                    debug!(index, "Skipping unsupported action");
                }
            }
        }

        info!(
            actions = actions.len(),
            executed = report.executed.len(),
            errors = report.errors.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Batch finished"
        );
        report
    }
}
