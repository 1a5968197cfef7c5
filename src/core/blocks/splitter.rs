//! Character-budget text splitting
//!
//! Notion rejects rich text content above a fixed size, so long text is cut
//! into contiguous slices that are appended one request at a time.

/// Number of characters kept in a chunk preview
pub const PREVIEW_CHARS: usize = 50;

/// One contiguous slice of the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk<'a> {
    /// Position of this chunk in the split, starting at 0
    pub index: usize,
    /// The chunk content, borrowed from the source text
    pub content: &'a str,
}

impl<'a> TextChunk<'a> {
    /// First [`PREVIEW_CHARS`] characters of the chunk
    pub fn preview(&self) -> &'a str {
        head(self.content, PREVIEW_CHARS)
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}

/// Split `text` into slices of at most `max_len` characters.
///
/// Text that already fits yields a single chunk (an empty string included).
/// Slices are taken left to right on character boundaries and concatenate back
/// to the original text. A `max_len` of zero is treated as one.
pub fn split_text(text: &str, max_len: usize) -> Vec<TextChunk<'_>> {
    let max_len = max_len.max(1);
    let mut chunks = Vec::new();
    let mut rest = text;

    loop {
        let (content, tail) = rest.split_at(byte_offset(rest, max_len));
        chunks.push(TextChunk {
            index: chunks.len(),
            content,
        });
        if tail.is_empty() {
            break;
        }
        rest = tail;
    }

    chunks
}

/// Leading `max_chars` characters of `text`
pub fn head(text: &str, max_chars: usize) -> &str {
    &text[..byte_offset(text, max_chars)]
}

/// Short preview of `text`, marked with an ellipsis when truncated
pub fn preview(text: &str) -> String {
    let prefix = head(text, PREVIEW_CHARS);
    if prefix.len() < text.len() {
        format!("{}...", prefix)
    } else {
        prefix.to_string()
    }
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}
