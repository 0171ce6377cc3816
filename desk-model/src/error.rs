//! Error types for LLM providers.

use thiserror::Error;

/// Errors that can occur when calling an LLM provider.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The provider has no credentials or was not configured.
    #[error("{provider} is unavailable: {reason}")]
    Unavailable { provider: String, reason: String },

    /// The request could not be sent or timed out.
    #[error("{provider} request failed: {message}")]
    Request { provider: String, message: String },

    /// The provider answered with a non-success status.
    #[error("{provider} API returned {status}: {message}")]
    Api { provider: String, status: u16, message: String },

    /// The provider answered but produced no text.
    #[error("{provider} returned an empty response")]
    EmptyResponse { provider: String },
}

impl ModelError {
    /// Name of the provider that produced this error.
    pub fn provider(&self) -> &str {
        match self {
            Self::Unavailable { provider, .. }
            | Self::Request { provider, .. }
            | Self::Api { provider, .. }
            | Self::EmptyResponse { provider } => provider,
        }
    }

    /// Whether the error means the provider was never reachable.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

/// A convenience result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
