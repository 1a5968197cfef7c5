//! Idempotent block deletion
//!
//! Notion never hard-deletes: a delete is an archive. Deleting a block that is
//! missing or already archived counts as success.

use super::types::{ErrorEntry, OpKind, Outcome, ResultEntry};
use crate::core::blocks::BlockId;
use crate::core::notion::DocumentClient;
use crate::utils::error::Result;
use tracing::{debug, info, warn};

pub const NOT_FOUND_NOTE: &str = "Block already deleted or not found";
pub const ALREADY_ARCHIVED_NOTE: &str = "Block was already archived, skipped";
pub const INVALID_ID_ERROR: &str = "Invalid block ID format";

/// How an archive attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteDisposition {
    /// Lookup returned 404
    NotFound,
    /// Archive call succeeded
    Archived { status: u16, body: String },
    /// Archive call failed because the block was archived before
    AlreadyArchived,
    /// Archive call failed for another reason
    Rejected { status: u16, body: String },
}

/// Look the block up, then archive it, folding the idempotent cases in.
///
/// Shared by the batch engine and the single-block delete endpoint.
pub async fn archive_idempotent(
    client: &dyn DocumentClient,
    id: &BlockId,
) -> Result<DeleteDisposition> {
    let lookup = client.fetch_block(id).await?;
    if !lookup.found {
        debug!(block_id = %id, "Block not found, nothing to delete");
        return Ok(DeleteDisposition::NotFound);
    }

    let archived = client.archive_block(id).await?;
    if archived.ok {
        return Ok(DeleteDisposition::Archived {
            status: archived.status,
            body: archived.body_text,
        });
    }

    if client.is_already_archived(&archived.body_text) {
        debug!(block_id = %id, "Block was already archived");
        return Ok(DeleteDisposition::AlreadyArchived);
    }

    Ok(DeleteDisposition::Rejected {
        status: archived.status,
        body: archived.body_text,
    })
}

/// Delete step of a batch
pub struct DeleteOperation<'a> {
    client: &'a dyn DocumentClient,
}

impl<'a> DeleteOperation<'a> {
    pub fn new(client: &'a dyn DocumentClient) -> Self {
        Self { client }
    }

    /// Delete the block named by `raw_id`; every failure becomes an entry.
    pub async fn run(&self, raw_id: &str) -> Outcome {
        let id = match BlockId::parse(raw_id) {
            Ok(id) => id,
            Err(e) => {
                warn!(raw_id, "Rejecting delete: {}", e);
                return Err(ErrorEntry::new(OpKind::Delete)
                    .with_id(raw_id)
                    .with_error(INVALID_ID_ERROR));
            }
        };

        let disposition = match archive_idempotent(self.client, &id).await {
            Ok(disposition) => disposition,
            Err(e) => {
                warn!(block_id = %id, error = %e, "Delete failed in transport");
                return Err(ErrorEntry::new(OpKind::Delete)
                    .with_id(raw_id)
                    .with_error(e.to_string()));
            }
        };

        let entry = ResultEntry::new(OpKind::Delete).with_id(id.as_str());
        match disposition {
            DeleteDisposition::NotFound => Ok(entry.with_note(NOT_FOUND_NOTE)),
            DeleteDisposition::AlreadyArchived => Ok(entry.with_note(ALREADY_ARCHIVED_NOTE)),
            DeleteDisposition::Archived { status, .. } => {
                info!(block_id = %id, "Archived block");
                Ok(entry.with_status(status))
            }
            DeleteDisposition::Rejected { status, body } => {
                warn!(block_id = %id, status, "Notion rejected archive");
                Err(ErrorEntry::new(OpKind::Delete)
                    .with_id(id.into_inner())
                    .with_status(status)
                    .with_response(body))
            }
        }
    }
}
