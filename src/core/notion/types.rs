//! Responses returned by the Notion transport

use serde_json::Value;

/// Result of looking up a single block
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    /// False when Notion answered 404
    pub found: bool,
    pub status: u16,
    pub body: Value,
}

/// Result of appending children to a block
#[derive(Debug, Clone, PartialEq)]
pub struct AppendResponse {
    pub ok: bool,
    pub status: u16,
    pub body: Value,
}

impl AppendResponse {
    /// Id of the first block Notion created
    pub fn created_block_id(&self) -> Option<String> {
        self.body
            .get("results")
            .and_then(|results| results.get(0))
            .and_then(|block| block.get("id"))
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// Result of archiving a block
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveResponse {
    pub ok: bool,
    pub status: u16,
    /// Raw response body, inspected for the already-archived marker
    pub body_text: String,
}

/// Result of listing a block's children
#[derive(Debug, Clone, PartialEq)]
pub struct ListResponse {
    pub status: u16,
    pub body: Value,
}
