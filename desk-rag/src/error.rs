//! Error types for the `desk-rag` crate.

use thiserror::Error;

/// Errors that can occur while building or querying the FAQ index.
#[derive(Debug, Error)]
pub enum RagError {
    /// An error occurred during embedding generation.
    #[error("Embedding error ({provider}): {message}")]
    EmbeddingError {
        /// The embedding provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// An error occurred in the vector store backend.
    #[error("Vector store error ({backend}): {message}")]
    VectorStoreError {
        /// The vector store backend that produced the error.
        backend: String,
        /// A description of the failure.
        message: String,
    },

    /// A required capability (embedding credentials, backend) is not configured.
    #[error("Capability unavailable: {0}")]
    Unavailable(String),

    /// Search was attempted before any index was persisted.
    #[error("Index has not been built")]
    IndexNotBuilt,

    /// The query embedding does not have the dimensionality of the stored index.
    #[error("Embedding dimension mismatch: index has {expected}, query has {actual}")]
    DimensionMismatch {
        /// Dimensionality recorded in the index.
        expected: usize,
        /// Dimensionality of the query embedding.
        actual: usize,
    },

    /// A configuration validation error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Reading the corpus failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience result type for RAG operations.
pub type Result<T> = std::result::Result<T, RagError>;
