//! Content blocks submitted for appending

use serde_json::{Value, json};

/// Block types whose first rich text run is used as the block's text
const TEXT_BEARING_TYPES: &[&str] = &["paragraph", "heading_3"];

/// How a submitted block is sent to Notion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Caller-supplied Notion block, sent verbatim
    Rich,
    /// Bare text, wrapped into a paragraph block
    PlainText,
}

/// A block to append, as submitted by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    kind: ContentKind,
    text: String,
    raw: Value,
}

impl ContentBlock {
    /// Plain text to be wrapped as a paragraph
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            kind: ContentKind::PlainText,
            raw: Value::String(text.clone()),
            text,
        }
    }

    /// Caller-supplied block structure
    pub fn rich(raw: Value) -> Self {
        Self {
            kind: ContentKind::Rich,
            text: extract_text(&raw),
            raw,
        }
    }

    /// Classify a submitted JSON value.
    ///
    /// Strings and `{"text": "..."}` objects are plain text. Any other value
    /// is treated as a Notion block and forwarded untouched.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => Self::plain(text),
            Value::Object(map) => {
                let text = match map.get("text") {
                    Some(Value::String(text)) if map.len() == 1 => Some(text.clone()),
                    _ => None,
                };
                match text {
                    Some(text) => Self::plain(text),
                    None => Self::rich(Value::Object(map)),
                }
            }
            other => Self::rich(other),
        }
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn is_rich(&self) -> bool {
        self.kind == ContentKind::Rich
    }

    /// Text carried by the block, empty for unrecognized shapes
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The value as originally submitted
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Notion block to send for this content
    pub fn to_node(&self) -> Value {
        match self.kind {
            ContentKind::Rich => self.raw.clone(),
            ContentKind::PlainText => paragraph(&self.text),
        }
    }
}

/// Build a paragraph block holding a single text run
pub fn paragraph(content: &str) -> Value {
    json!({
        "object": "block",
        "type": "paragraph",
        "paragraph": {
            "rich_text": [{ "type": "text", "text": { "content": content } }]
        }
    })
}

/// Pull the text out of a block.
///
/// Looks at the first rich text run of paragraph and heading_3 blocks, then
/// at a top-level `text` string. Empty values fall through to the next shape.
pub fn extract_text(block: &Value) -> String {
    TEXT_BEARING_TYPES
        .iter()
        .filter_map(|kind| {
            block
                .get(kind)
                .and_then(|b| b.get("rich_text"))
                .and_then(|runs| runs.get(0))
                .and_then(|run| run.get("text"))
                .and_then(|t| t.get("content"))
                .and_then(Value::as_str)
        })
        .chain(block.get("text").and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}
