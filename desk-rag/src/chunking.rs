//! Corpus chunking.
//!
//! Chunking works on the raw corpus text, independently of the structured FAQ
//! parse. Block boundaries here follow the literal `"\n\n"` delimiter and keep
//! the `Q:`/`K:`/`A:` markers, so a chunk is not guaranteed to line up with a
//! parsed FAQ record.

use std::collections::HashMap;

use crate::document::Chunk;

/// A strategy for splitting corpus text into chunks.
///
/// Implementations produce [`Chunk`]s with text and metadata but no embeddings.
/// Embeddings are attached later by the index.
pub trait Chunker: Send + Sync {
    /// Split raw corpus text into chunks. Returns an empty `Vec` for blank text.
    fn chunk(&self, text: &str) -> Vec<Chunk>;
}

/// Splits text on blank lines (`"\n\n"` after CRLF normalisation), trimming each
/// block and dropping empty ones.
///
/// Chunk IDs are generated as `block-{index}`, counting only kept blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankLineChunker;

impl BlankLineChunker {
    /// Create a new `BlankLineChunker`.
    pub fn new() -> Self {
        Self
    }
}

impl Chunker for BlankLineChunker {
    fn chunk(&self, text: &str) -> Vec<Chunk> {
        text.replace("\r\n", "\n")
            .split("\n\n")
            .map(str::trim)
            .filter(|block| !block.is_empty())
            .enumerate()
            .map(|(index, block)| Chunk {
                id: format!("block-{index}"),
                text: block.to_string(),
                embedding: Vec::new(),
                metadata: HashMap::from([("block_index".to_string(), index.to_string())]),
            })
            .collect()
    }
}
