//! # desk-rag
//!
//! Semantic retrieval over the FAQ corpus.
//!
//! The corpus text is split into blank-line separated blocks by a [`Chunker`],
//! each block is embedded through an [`EmbeddingProvider`], and the result is
//! persisted as a single [`IndexSnapshot`] by a [`VectorStore`]. The
//! [`SemanticIndex`] ties these together: [`SemanticIndex::rebuild`] replaces
//! the whole index, and its [`Retriever`] implementation returns the texts of
//! the `top_k` nearest chunks for a query.
//!
//! Both operations report capability absence (no embedding credentials, no
//! index on disk, a failing backend) as `false` or an empty result, never as
//! an error.
//!
//! ## Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `openai` | [`OpenAIEmbeddingProvider`] via the OpenAI embeddings API |
//! | `gemini` | [`GeminiEmbeddingProvider`] via the Gemini REST API |
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use desk_rag::{FileVectorStore, OpenAIEmbeddingProvider, Retriever, SemanticIndex};
//!
//! let index = SemanticIndex::builder()
//!     .embedding_provider(Arc::new(OpenAIEmbeddingProvider::from_env()?))
//!     .vector_store(Arc::new(FileVectorStore::new("vectorstore/index.json")))
//!     .build()?;
//!
//! if index.rebuild("data/faqs.txt").await {
//!     let chunks = index.search("how do I reset my password", 3).await;
//! }
//! ```

pub mod chunking;
pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod file;
pub mod index;
pub mod inmemory;
pub mod vectorstore;

#[cfg(feature = "gemini")]
pub mod gemini;
#[cfg(feature = "openai")]
pub mod openai;

pub use chunking::{BlankLineChunker, Chunker};
pub use config::{RagConfig, RagConfigBuilder};
pub use document::{Chunk, IndexSnapshot, SearchResult};
pub use embedding::EmbeddingProvider;
pub use error::{RagError, Result};
pub use file::FileVectorStore;
pub use index::{Retriever, SemanticIndex, SemanticIndexBuilder};
pub use inmemory::InMemoryVectorStore;
pub use vectorstore::VectorStore;

#[cfg(feature = "gemini")]
pub use gemini::GeminiEmbeddingProvider;
#[cfg(feature = "openai")]
pub use openai::OpenAIEmbeddingProvider;
