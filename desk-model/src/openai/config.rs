//! OpenAI provider configuration.

use std::time::Duration;

use crate::DEFAULT_TIMEOUT;
use crate::error::{ModelError, Result};

/// The default OpenAI API base URL.
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// The default chat model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Completion length cap sent with every request.
pub const DEFAULT_MAX_TOKENS: u32 = 250;

/// Configuration for [`OpenAIClient`](super::OpenAIClient).
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl OpenAIConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: OPENAI_API_BASE.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the API key from `OPENAI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Unavailable`] when the variable is unset or empty.
    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        match std::env::var("OPENAI_API_KEY") {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key, model)),
            _ => Err(ModelError::Unavailable {
                provider: "openai".into(),
                reason: "OPENAI_API_KEY not set".into(),
            }),
        }
    }

    /// Point the client at an OpenAI-compatible API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
