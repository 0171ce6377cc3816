//! Error types for the answer resolver.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    /// A resolver setting is out of range.
    #[error("invalid resolver configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, AgentError>;
