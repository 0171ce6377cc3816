//! # desk-model
//!
//! LLM providers for the support desk assistant.
//!
//! ## Overview
//!
//! - [`Llm`] - the provider seam: one prompt in, text or [`ModelError`] out
//! - [`OpenAIClient`] - OpenAI chat completions (`gpt-4o-mini` by default)
//! - [`GeminiClient`] - Gemini `generateContent` (`gemini-1.5-flash` by default)
//! - [`UnavailableLlm`] - placeholder for a provider without credentials
//! - [`FallbackChain`] - tries providers in order until one answers
//! - [`MockLlm`] - scripted provider for tests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use desk_model::{FallbackChain, GeminiClient, GeminiConfig, OpenAIClient, OpenAIConfig};
//!
//! let chain = FallbackChain::new()
//!     .with_provider(Arc::new(OpenAIClient::new(OpenAIConfig::from_env("gpt-4o-mini")?)?))
//!     .with_provider(Arc::new(GeminiClient::new(GeminiConfig::from_env("gemini-1.5-flash")?)?));
//!
//! if let Some((provider, text)) = chain.complete("What are your office hours?").await {
//!     println!("{provider}: {text}");
//! }
//! ```

use std::time::Duration;

pub mod error;
pub mod fallback;
#[cfg(feature = "gemini")]
pub mod gemini;
pub mod llm;
pub mod mock;
#[cfg(feature = "openai")]
pub mod openai;

pub use error::{ModelError, Result};
pub use fallback::FallbackChain;
#[cfg(feature = "gemini")]
pub use gemini::{GeminiClient, GeminiConfig};
pub use llm::{Completion, Llm, UnavailableLlm};
pub use mock::MockLlm;
#[cfg(feature = "openai")]
pub use openai::{OpenAIClient, OpenAIConfig};

/// Request timeout applied to every HTTP provider unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
