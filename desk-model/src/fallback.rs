//! Ordered provider fallback.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::llm::{Completion, Llm};

/// An ordered list of providers tried one after another.
///
/// The first provider that yields non-empty text wins; later providers are
/// not called. Unavailable and failing providers are skipped alike.
#[derive(Clone, Default)]
pub struct FallbackChain {
    providers: Vec<Arc<dyn Llm>>,
}

impl FallbackChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider to the end of the chain.
    pub fn with_provider(mut self, provider: Arc<dyn Llm>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn providers(&self) -> &[Arc<dyn Llm>] {
        &self.providers
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Send `prompt` down the chain.
    ///
    /// Returns the winning provider's name and its text, or `None` when every
    /// provider was unavailable or failed.
    pub async fn complete(&self, prompt: &str) -> Option<(String, String)> {
        for provider in &self.providers {
            match Completion::of(provider.as_ref(), prompt).await {
                Completion::Text(text) => {
                    info!(provider = provider.name(), "completion received");
                    return Some((provider.name().to_string(), text));
                }
                Completion::Unavailable { provider } => {
                    debug!(%provider, "provider unavailable, trying next");
                }
                Completion::Failed { provider, message } => {
                    warn!(%provider, error = %message, "provider failed, trying next");
                }
            }
        }
        None
    }
}

impl From<Vec<Arc<dyn Llm>>> for FallbackChain {
    fn from(providers: Vec<Arc<dyn Llm>>) -> Self {
        Self { providers }
    }
}

impl std::fmt::Debug for FallbackChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.providers.iter().map(|p| p.name()).collect();
        f.debug_struct("FallbackChain").field("providers", &names).finish()
    }
}
