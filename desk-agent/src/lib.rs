//! # desk-agent
//!
//! Answer resolution for the support desk assistant.
//!
//! [`AnswerResolver`] tries, in order: a keyword match against the FAQ
//! corpus, a provider answer grounded in semantically retrieved corpus
//! chunks, a provider answer without context, and finally an escalation
//! message naming the support contact. [`ChatSession`] keeps the turns of
//! one console run.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use desk_agent::{AnswerResolver, ChatSession};
//!
//! let resolver = AnswerResolver::new(Arc::new(index), chain);
//! let mut session = ChatSession::new();
//!
//! let answer = resolver
//!     .resolve("What are your hours?", corpus.records(), "support@example.com")
//!     .await;
//! session.append("What are your hours?", answer);
//! ```

pub mod config;
pub mod error;
pub mod prompt;
pub mod resolver;
pub mod session;

pub use config::{DEFAULT_TOP_K, ResolverConfig, ResolverConfigBuilder};
pub use error::{AgentError, Result};
pub use prompt::{
    CONTEXT_SEPARATOR, escalation_message, grounded_prompt, keyword_answer, plain_prompt,
};
pub use resolver::{AnswerResolver, AnswerSource, Resolution};
pub use session::{ChatSession, ChatTurn};
