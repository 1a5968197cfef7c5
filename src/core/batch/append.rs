//! Split-aware block appending
//!
//! Text over the character budget is cut into paragraph-sized chunks that are
//! appended one request at a time, in reading order. Chunks that were written
//! stay written if a later chunk fails.

use super::types::{ErrorEntry, OpKind, Outcome, ResultEntry};
use crate::core::blocks::{BlockId, ContentBlock, TextChunk, paragraph, preview, split_text};
use crate::core::notion::{AppendResponse, DocumentClient};
use crate::utils::error::Result;
use tracing::{debug, info, warn};

const NO_TEXT: &str = "(no text)";

/// Append step of a batch
pub struct AppendOperation<'a> {
    client: &'a dyn DocumentClient,
    page_id: &'a BlockId,
    max_payload: usize,
}

impl<'a> AppendOperation<'a> {
    pub fn new(client: &'a dyn DocumentClient, page_id: &'a BlockId, max_payload: usize) -> Self {
        Self {
            client,
            page_id,
            max_payload,
        }
    }

    /// Append `block` to the page. Yields one outcome per remote write.
    pub async fn run(&self, block: &ContentBlock) -> Vec<Outcome> {
        let chunks = split_text(block.text(), self.max_payload);
        if chunks.len() == 1 {
            return vec![self.append_whole(block).await];
        }

        info!(
            chunks = chunks.len(),
            max_payload = self.max_payload,
            "Splitting oversized block"
        );

        let mut outcomes = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            outcomes.push(self.append_chunk(chunk).await);
        }
        outcomes
    }

    async fn append_whole(&self, block: &ContentBlock) -> Outcome {
        let label = if block.text().is_empty() {
            NO_TEXT.to_string()
        } else {
            preview(block.text())
        };

        match self.send(block.to_node()).await {
            Ok(response) if response.ok => Ok(created(&response, label)),
            Ok(response) => {
                warn!(status = response.status, "Notion rejected append");
                Err(ErrorEntry::new(OpKind::Append)
                    .with_text(label)
                    .with_status(response.status)
                    .with_response(response.body.to_string()))
            }
            Err(e) => {
                warn!(error = %e, "Append failed in transport");
                Err(ErrorEntry::new(OpKind::Append)
                    .with_text(label)
                    .with_error(e.to_string()))
            }
        }
    }

    async fn append_chunk(&self, chunk: &TextChunk<'_>) -> Outcome {
        let label = format!("{}...", chunk.preview());

        match self.send(paragraph(chunk.content)).await {
            Ok(response) if response.ok => {
                debug!(chunk = chunk.index, "Appended chunk");
                Ok(created(&response, label))
            }
            Ok(response) => {
                warn!(chunk = chunk.index, status = response.status, "Notion rejected chunk");
                Err(ErrorEntry::new(OpKind::Append)
                    .with_text(label)
                    .with_status(response.status)
                    .with_response(response.body.to_string()))
            }
            Err(e) => {
                warn!(chunk = chunk.index, error = %e, "Chunk failed in transport");
                Err(ErrorEntry::new(OpKind::Append)
                    .with_text(label)
                    .with_error(e.to_string()))
            }
        }
    }

    async fn send(&self, node: serde_json::Value) -> Result<AppendResponse> {
        self.client.append_children(self.page_id, vec![node]).await
    }
}

fn created(response: &AppendResponse, label: String) -> ResultEntry {
    let entry = ResultEntry::new(OpKind::Append)
        .with_text(label)
        .with_status(response.status);
    match response.created_block_id() {
        Some(id) => entry.with_id(id),
        None => entry,
    }
}
