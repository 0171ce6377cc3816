//! Vector store trait for persisting the FAQ index and searching it.

use async_trait::async_trait;

use crate::document::{IndexSnapshot, SearchResult};
use crate::error::{RagError, Result};

/// A storage backend holding exactly one [`IndexSnapshot`].
///
/// The index is only ever replaced as a whole. After [`replace`](VectorStore::replace)
/// returns, searches must see the new snapshot and nothing of the old one.
///
/// # Example
///
/// ```rust,ignore
/// use desk_rag::{FileVectorStore, VectorStore};
///
/// let store = FileVectorStore::new("vectorstore/index.json");
/// store.replace(snapshot).await?;
/// let results = store.search(&query_embedding, 3).await?;
/// ```
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Short backend name used in logs and errors.
    fn backend(&self) -> &str;

    /// Overwrite the stored index with `snapshot`.
    async fn replace(&self, snapshot: IndexSnapshot) -> Result<()>;

    /// Load the stored index, or `None` if it has never been built.
    async fn load(&self) -> Result<Option<IndexSnapshot>>;

    /// Search for the `top_k` chunks most similar to `embedding`.
    ///
    /// Returns results ordered by descending similarity score.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::IndexNotBuilt`] when nothing is stored and
    /// [`RagError::DimensionMismatch`] when `embedding` does not match the index.
    async fn search(&self, embedding: &[f32], top_k: usize) -> Result<Vec<SearchResult>> {
        let snapshot = self.load().await?.ok_or(RagError::IndexNotBuilt)?;
        rank(&snapshot, embedding, top_k)
    }
}

/// Score every chunk of `snapshot` against `embedding` and keep the best `top_k`.
pub(crate) fn rank(
    snapshot: &IndexSnapshot,
    embedding: &[f32],
    top_k: usize,
) -> Result<Vec<SearchResult>> {
    if !snapshot.is_empty() && snapshot.dimensions != embedding.len() {
        return Err(RagError::DimensionMismatch {
            expected: snapshot.dimensions,
            actual: embedding.len(),
        });
    }

    let mut scored: Vec<SearchResult> = snapshot
        .chunks
        .iter()
        .map(|chunk| SearchResult {
            chunk: chunk.clone(),
            score: cosine_similarity(&chunk.embedding, embedding),
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(top_k);
    Ok(scored)
}

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 if either vector has zero magnitude or the lengths differ.
pub(crate) fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
