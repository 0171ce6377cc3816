//! OpenAI chat completions provider.
//!
//! # Example
//!
//! ```rust,ignore
//! use desk_model::openai::{OpenAIClient, OpenAIConfig};
//!
//! let llm = OpenAIClient::new(OpenAIConfig::new(
//!     std::env::var("OPENAI_API_KEY")?,
//!     "gpt-4o-mini",
//! ))?;
//! let text = llm.complete("What are your office hours?").await?;
//! ```

mod client;
mod config;

pub use client::OpenAIClient;
pub use config::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, OPENAI_API_BASE, OpenAIConfig};
