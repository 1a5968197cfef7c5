//! Notion transport
//!
//! The [`DocumentClient`] trait is the seam the batch engine and the HTTP
//! routes talk to; [`NotionClient`] is the production implementation.

mod client;
mod traits;
mod types;

pub use client::NotionClient;
#[cfg(test)]
pub use traits::MockDocumentClient;
pub use traits::{ALREADY_ARCHIVED_MARKER, DocumentClient};
pub use types::{AppendResponse, ArchiveResponse, FetchResponse, ListResponse};
