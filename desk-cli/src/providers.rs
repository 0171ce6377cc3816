//! Provider wiring from environment credentials.
//!
//! Missing credentials never abort startup: the embedder becomes absent and
//! chat providers become [`UnavailableLlm`] placeholders.

use std::sync::Arc;

use desk_model::{
    FallbackChain, GeminiClient, GeminiConfig, Llm, OpenAIClient, OpenAIConfig, UnavailableLlm,
};
use desk_rag::{
    EmbeddingProvider, FileVectorStore, GeminiEmbeddingProvider, OpenAIEmbeddingProvider,
    RagError, SemanticIndex,
};
use tracing::{info, warn};

use crate::cli::EmbedderKind;
use crate::config::DeskConfig;

/// Primary then secondary chat provider.
pub fn build_llms(config: &DeskConfig) -> FallbackChain {
    let openai: Arc<dyn Llm> = match OpenAIConfig::from_env(&config.openai_model)
        .and_then(|c| OpenAIClient::new(c.with_timeout(config.timeout)))
    {
        Ok(client) => Arc::new(client),
        Err(e) => {
            info!(error = %e, "primary provider disabled");
            Arc::new(UnavailableLlm::new("openai", e.to_string()))
        }
    };

    let gemini: Arc<dyn Llm> = match GeminiConfig::from_env(&config.gemini_model)
        .and_then(|c| GeminiClient::new(c.with_timeout(config.timeout)))
    {
        Ok(client) => Arc::new(client),
        Err(e) => {
            info!(error = %e, "secondary provider disabled");
            Arc::new(UnavailableLlm::new("gemini", e.to_string()))
        }
    };

    FallbackChain::new().with_provider(openai).with_provider(gemini)
}

/// The configured embedding provider, if its credentials are present.
pub fn build_embedder(config: &DeskConfig) -> Option<Arc<dyn EmbeddingProvider>> {
    let result: desk_rag::Result<Arc<dyn EmbeddingProvider>> = match config.embedder {
        EmbedderKind::Openai => env_key(&["OPENAI_API_KEY"])
            .and_then(|key| OpenAIEmbeddingProvider::with_timeout(key, config.timeout))
            .map(|p| Arc::new(p) as Arc<dyn EmbeddingProvider>),
        EmbedderKind::Gemini => env_key(&["GEMINI_API_KEY", "GOOGLE_API_KEY"])
            .and_then(|key| GeminiEmbeddingProvider::with_timeout(key, config.timeout))
            .map(|p| Arc::new(p) as Arc<dyn EmbeddingProvider>),
        EmbedderKind::Disabled => return None,
    };

    match result {
        Ok(provider) => Some(provider),
        Err(e) => {
            warn!(error = %e, "semantic index disabled");
            None
        }
    }
}

/// File-backed semantic index at the configured path.
pub fn build_index(config: &DeskConfig) -> anyhow::Result<SemanticIndex> {
    let index = SemanticIndex::builder()
        .maybe_embedding_provider(build_embedder(config))
        .vector_store(Arc::new(FileVectorStore::new(&config.index_path)))
        .build()?;
    Ok(index)
}

fn env_key(vars: &[&str]) -> desk_rag::Result<String> {
    vars.iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|key| !key.trim().is_empty())
        .ok_or_else(|| RagError::Unavailable(format!("{} not set", vars.join(" or "))))
}
