//! The semantic FAQ index.
//!
//! [`SemanticIndex`] coordinates rebuild (read corpus → chunk → embed →
//! persist) and search (embed query → rank → filter). Construct one via
//! [`SemanticIndex::builder()`].
//!
//! # Example
//!
//! ```rust,ignore
//! use desk_rag::{FileVectorStore, RagConfig, Retriever, SemanticIndex};
//!
//! let index = SemanticIndex::builder()
//!     .config(RagConfig::default())
//!     .embedding_provider(Arc::new(my_embedder))
//!     .vector_store(Arc::new(FileVectorStore::new("vectorstore/index.json")))
//!     .build()?;
//!
//! let ok = index.rebuild("data/faqs.txt").await;
//! let texts = index.search("search query", 3).await;
//! ```

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::chunking::{BlankLineChunker, Chunker};
use crate::config::RagConfig;
use crate::document::{IndexSnapshot, SearchResult};
use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, Result};
use crate::vectorstore::VectorStore;

/// Looks up corpus text relevant to a query.
///
/// Implementations never fail: an unavailable backend or an unbuilt index
/// yields an empty result.
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Return the texts of up to `top_k` relevant chunks, most relevant first.
    async fn search(&self, query: &str, top_k: usize) -> Vec<String>;
}

/// Embedding-backed index over the FAQ corpus.
///
/// The embedding provider is optional: without one the index is a
/// capability-absent stub whose rebuild returns `false` and whose searches
/// return nothing.
pub struct SemanticIndex {
    config: RagConfig,
    embedding_provider: Option<Arc<dyn EmbeddingProvider>>,
    vector_store: Arc<dyn VectorStore>,
    chunker: Arc<dyn Chunker>,
}

impl SemanticIndex {
    /// Create a new [`SemanticIndexBuilder`].
    pub fn builder() -> SemanticIndexBuilder {
        SemanticIndexBuilder::default()
    }

    /// Return a reference to the index configuration.
    pub fn config(&self) -> &RagConfig {
        &self.config
    }

    /// Return a reference to the vector store.
    pub fn vector_store(&self) -> &Arc<dyn VectorStore> {
        &self.vector_store
    }

    /// Whether an embedding provider is configured.
    pub fn is_available(&self) -> bool {
        self.embedding_provider.is_some()
    }

    fn provider(&self) -> Result<&Arc<dyn EmbeddingProvider>> {
        self.embedding_provider
            .as_ref()
            .ok_or_else(|| RagError::Unavailable("no embedding provider configured".into()))
    }

    /// Rebuild the index from the corpus file at `corpus_path`.
    ///
    /// Returns `true` when the new index was persisted. Any failure (missing
    /// provider, unreadable corpus, embedding or storage error) is logged and
    /// reported as `false`; in that case the previously persisted index is
    /// left as it was.
    pub async fn rebuild(&self, corpus_path: impl AsRef<Path>) -> bool {
        let corpus_path = corpus_path.as_ref();
        match self.try_rebuild(corpus_path).await {
            Ok(chunk_count) => {
                info!(corpus = %corpus_path.display(), chunk_count, "index rebuilt");
                true
            }
            Err(e) => {
                warn!(corpus = %corpus_path.display(), error = %e, "index rebuild skipped");
                false
            }
        }
    }

    /// Rebuild the index, returning the number of chunks persisted.
    ///
    /// Every chunk is embedded before the store is touched.
    ///
    /// # Errors
    ///
    /// - [`RagError::Unavailable`] without an embedding provider
    /// - [`RagError::Io`] when the corpus cannot be read
    /// - [`RagError::EmbeddingError`] / [`RagError::VectorStoreError`] from the backends
    pub async fn try_rebuild(&self, corpus_path: impl AsRef<Path>) -> Result<usize> {
        let provider = self.provider()?;
        let text = tokio::fs::read_to_string(corpus_path.as_ref()).await?;

        let mut chunks = self.chunker.chunk(&text);
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        let embeddings = provider.embed_batch(&texts).await?;

        if embeddings.len() != chunks.len() {
            return Err(RagError::EmbeddingError {
                provider: provider.name().to_string(),
                message: format!(
                    "expected {} embeddings, received {}",
                    chunks.len(),
                    embeddings.len()
                ),
            });
        }

        let dimensions = embeddings.first().map_or(provider.dimensions(), Vec::len);
        if let Some(bad) = embeddings.iter().find(|e| e.len() != dimensions) {
            return Err(RagError::DimensionMismatch { expected: dimensions, actual: bad.len() });
        }

        for (chunk, embedding) in chunks.iter_mut().zip(embeddings) {
            chunk.embedding = embedding;
        }

        let chunk_count = chunks.len();
        let snapshot = IndexSnapshot::new(provider.name(), dimensions, chunks);
        self.vector_store.replace(snapshot).await?;
        Ok(chunk_count)
    }

    /// Search the persisted index: embed → rank → filter by threshold.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::Unavailable`] without a provider, [`RagError::IndexNotBuilt`]
    /// before the first rebuild, and embedding or store errors otherwise.
    pub async fn try_search(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>> {
        let provider = self.provider()?;
        if top_k == 0 {
            return Ok(Vec::new());
        }

        let query_embedding = provider.embed(query).await?;
        let results = self.vector_store.search(&query_embedding, top_k).await?;

        let threshold = self.config.similarity_threshold;
        let filtered: Vec<SearchResult> =
            results.into_iter().filter(|r| r.score >= threshold).collect();

        debug!(result_count = filtered.len(), top_k, "semantic search completed");
        Ok(filtered)
    }
}

#[async_trait]
impl Retriever for SemanticIndex {
    async fn search(&self, query: &str, top_k: usize) -> Vec<String> {
        match self.try_search(query, top_k).await {
            Ok(results) => results.into_iter().map(|r| r.chunk.text).collect(),
            Err(RagError::Unavailable(reason)) => {
                debug!(%reason, "semantic search unavailable");
                Vec::new()
            }
            Err(RagError::IndexNotBuilt) => {
                debug!("semantic search skipped, index not built");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "semantic search failed");
                Vec::new()
            }
        }
    }
}

/// Builder for constructing a [`SemanticIndex`].
///
/// Only the vector store is required. The chunker defaults to
/// [`BlankLineChunker`], the config to [`RagConfig::default()`], and a missing
/// embedding provider makes the index capability-absent.
#[derive(Default)]
pub struct SemanticIndexBuilder {
    config: Option<RagConfig>,
    embedding_provider: Option<Arc<dyn EmbeddingProvider>>,
    vector_store: Option<Arc<dyn VectorStore>>,
    chunker: Option<Arc<dyn Chunker>>,
}

impl SemanticIndexBuilder {
    /// Set the index configuration.
    pub fn config(mut self, config: RagConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the embedding provider.
    pub fn embedding_provider(mut self, provider: Arc<dyn EmbeddingProvider>) -> Self {
        self.embedding_provider = Some(provider);
        self
    }

    /// Set the embedding provider if one is available.
    pub fn maybe_embedding_provider(
        mut self,
        provider: Option<Arc<dyn EmbeddingProvider>>,
    ) -> Self {
        self.embedding_provider = provider;
        self
    }

    /// Set the vector store backend.
    pub fn vector_store(mut self, store: Arc<dyn VectorStore>) -> Self {
        self.vector_store = Some(store);
        self
    }

    /// Set the corpus chunker.
    pub fn chunker(mut self, chunker: Arc<dyn Chunker>) -> Self {
        self.chunker = Some(chunker);
        self
    }

    /// Build the [`SemanticIndex`].
    ///
    /// # Errors
    ///
    /// Returns [`RagError::ConfigError`] if no vector store was set.
    pub fn build(self) -> Result<SemanticIndex> {
        let vector_store = self
            .vector_store
            .ok_or_else(|| RagError::ConfigError("vector_store is required".to_string()))?;

        Ok(SemanticIndex {
            config: self.config.unwrap_or_default(),
            embedding_provider: self.embedding_provider,
            vector_store,
            chunker: self.chunker.unwrap_or_else(|| Arc::new(BlankLineChunker::new())),
        })
    }
}
