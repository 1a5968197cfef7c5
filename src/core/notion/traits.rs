//! Transport seam between the batch engine and Notion

use super::types::{AppendResponse, ArchiveResponse, FetchResponse, ListResponse};
use crate::core::blocks::BlockId;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Error text Notion returns when patching a block that is already archived
pub const ALREADY_ARCHIVED_MARKER: &str = "Can't edit block that is archived";

/// Operations the relay needs from a hierarchical document store.
///
/// Non-success HTTP statuses are reported through the response structs.
/// `Err` is reserved for transport failures: connection errors, timeouts and
/// unreadable bodies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentClient: Send + Sync {
    /// Look up a block to check that it exists
    async fn fetch_block(&self, id: &BlockId) -> Result<FetchResponse>;

    /// Append `children` under `parent`
    async fn append_children(
        &self,
        parent: &BlockId,
        children: Vec<Value>,
    ) -> Result<AppendResponse>;

    /// Archive (soft delete) a block
    async fn archive_block(&self, id: &BlockId) -> Result<ArchiveResponse>;

    /// List the direct children of `parent`
    async fn list_children(&self, parent: &BlockId, page_size: u32) -> Result<ListResponse>;

    /// Whether a failed archive body means the block was archived already
    fn is_already_archived(&self, body: &str) -> bool {
        body.contains(ALREADY_ARCHIVED_MARKER)
    }
}
