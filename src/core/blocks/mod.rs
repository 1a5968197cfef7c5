//! Notion block primitives
//!
//! Identifier normalization, content classification and text splitting shared
//! by the batch engine and the single-block endpoints.

mod content;
mod id;
mod splitter;

pub use content::{ContentBlock, ContentKind, extract_text, paragraph};
pub use id::{BlockId, BlockIdError};
pub use splitter::{PREVIEW_CHARS, TextChunk, head, preview, split_text};
