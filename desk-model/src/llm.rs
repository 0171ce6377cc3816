//! The provider seam and its typed outcome.

use async_trait::async_trait;

use crate::error::{ModelError, Result};

/// A text completion provider.
///
/// Implementations send a single prompt and return the generated text.
/// Every failure, including a timeout, is reported as a [`ModelError`].
#[async_trait]
pub trait Llm: Send + Sync {
    /// Provider name used in logs and answer attribution.
    fn name(&self) -> &str;

    /// Generate a completion for `prompt`.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// The outcome of one provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The provider produced non-empty text.
    Text(String),
    /// The provider could not be used at all.
    Unavailable { provider: String },
    /// The provider was called and failed.
    Failed { provider: String, message: String },
}

impl Completion {
    /// Classify a provider result. Blank text counts as a failure.
    pub fn from_result(provider: &str, result: Result<String>) -> Self {
        match result {
            Ok(text) if text.trim().is_empty() => {
                Self::Failed { provider: provider.to_string(), message: "empty response".into() }
            }
            Ok(text) => Self::Text(text),
            Err(ModelError::Unavailable { .. }) => {
                Self::Unavailable { provider: provider.to_string() }
            }
            Err(e) => Self::Failed { provider: provider.to_string(), message: e.to_string() },
        }
    }

    /// Call `llm` and classify the outcome.
    pub async fn of(llm: &dyn Llm, prompt: &str) -> Self {
        Self::from_result(llm.name(), llm.complete(prompt).await)
    }
}

/// Stands in for a provider whose credentials are missing.
#[derive(Debug, Clone)]
pub struct UnavailableLlm {
    name: String,
    reason: String,
}

impl UnavailableLlm {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { name: name.into(), reason: reason.into() }
    }
}

#[async_trait]
impl Llm for UnavailableLlm {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, _prompt: &str) -> Result<String> {
        Err(ModelError::Unavailable { provider: self.name.clone(), reason: self.reason.clone() })
    }
}
