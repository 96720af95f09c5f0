//! The todo item and its on-disk encoding.

use crate::ids::TodoId;

/// A single todo: an id and the text stored under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub content: String,
}

impl TodoItem {
    /// Creates a todo with a fresh id.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: TodoId::new(),
            content: content.into(),
        }
    }

    /// Creates a todo from a known id and its stored bytes.
    pub fn from_stored(id: TodoId, bytes: &[u8]) -> Self {
        Self {
            id,
            content: decode_content(bytes),
        }
    }

    /// The line shown to users when listing: `<id>: <content>`.
    pub fn line(&self) -> String {
        format!("{}: {}", self.id, self.content)
    }

    /// The bytes written to disk for this todo.
    pub fn to_bytes(&self) -> Vec<u8> {
        encode_content(&self.content)
    }
}

/// Encodes todo text as ASCII. Anything outside 7-bit ASCII becomes `?`.
pub fn encode_content(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
        .collect()
}

/// Decodes stored bytes, replacing invalid sequences.
pub fn decode_content(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
