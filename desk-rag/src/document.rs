//! Data types for chunks, search results and the persisted index.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One block of corpus text with its vector embedding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    /// Stable identifier derived from the block position (`block-{index}`).
    pub id: String,
    /// The text content of the chunk.
    pub text: String,
    /// The vector embedding for this chunk's text. Empty until embedded.
    pub embedding: Vec<f32>,
    /// Chunk metadata (currently `block_index`).
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// A retrieved [`Chunk`] paired with a relevance score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The retrieved chunk.
    pub chunk: Chunk,
    /// Cosine similarity to the query (higher is more relevant).
    pub score: f32,
}

/// The complete persisted index. A rebuild always replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexSnapshot {
    /// Name of the embedding provider that produced the vectors.
    pub provider: String,
    /// Dimensionality shared by every chunk embedding.
    pub dimensions: usize,
    /// When the snapshot was built.
    pub built_at: DateTime<Utc>,
    /// All embedded chunks, in corpus order.
    pub chunks: Vec<Chunk>,
}

impl IndexSnapshot {
    /// Create a snapshot stamped with the current time.
    pub fn new(provider: impl Into<String>, dimensions: usize, chunks: Vec<Chunk>) -> Self {
        Self { provider: provider.into(), dimensions, built_at: Utc::now(), chunks }
    }

    /// Number of chunks in the snapshot.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the snapshot holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
