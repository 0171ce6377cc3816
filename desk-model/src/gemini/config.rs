//! Gemini provider configuration.

use std::time::Duration;

use crate::DEFAULT_TIMEOUT;
use crate::error::{ModelError, Result};

/// The default Gemini REST base URL.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// The default generation model.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Configuration for [`GeminiClient`](super::GeminiClient).
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: GEMINI_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the API key from `GEMINI_API_KEY`, falling back to `GOOGLE_API_KEY`.
    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let key = ["GEMINI_API_KEY", "GOOGLE_API_KEY"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|key| !key.trim().is_empty());
        match key {
            Some(key) => Ok(Self::new(key, model)),
            None => Err(ModelError::Unavailable {
                provider: "gemini".into(),
                reason: "GEMINI_API_KEY or GOOGLE_API_KEY not set".into(),
            }),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
