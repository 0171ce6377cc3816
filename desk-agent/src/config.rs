//! Resolver configuration.

use desk_faq::DEFAULT_MIN_SCORE;

use crate::error::{AgentError, Result};

/// Number of chunks requested from the semantic retriever.
pub const DEFAULT_TOP_K: usize = 3;

/// Tunables for [`AnswerResolver`](crate::AnswerResolver).
///
/// Construct via [`ResolverConfig::builder()`] or use [`Default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Lowest keyword score that counts as a match.
    pub min_score: u32,
    /// Chunks requested from the retriever.
    pub top_k: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { min_score: DEFAULT_MIN_SCORE, top_k: DEFAULT_TOP_K }
    }
}

impl ResolverConfig {
    pub fn builder() -> ResolverConfigBuilder {
        ResolverConfigBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResolverConfigBuilder {
    config: ResolverConfig,
}

impl ResolverConfigBuilder {
    pub fn min_score(mut self, min_score: u32) -> Self {
        self.config.min_score = min_score;
        self
    }

    pub fn top_k(mut self, top_k: usize) -> Self {
        self.config.top_k = top_k;
        self
    }

    /// # Errors
    ///
    /// Returns [`AgentError::InvalidConfig`] if `min_score` or `top_k` is zero.
    pub fn build(self) -> Result<ResolverConfig> {
        if self.config.min_score == 0 {
            return Err(AgentError::InvalidConfig("min_score must be greater than 0".into()));
        }
        if self.config.top_k == 0 {
            return Err(AgentError::InvalidConfig("top_k must be greater than 0".into()));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_matcher_and_retriever() {
        let config = ResolverConfig::default();
        assert_eq!(config.min_score, 1);
        assert_eq!(config.top_k, 3);
        assert_eq!(ResolverConfig::builder().build().unwrap(), config);
    }

    #[test]
    fn zero_values_are_rejected() {
        assert!(ResolverConfig::builder().top_k(0).build().is_err());
        assert!(ResolverConfig::builder().min_score(0).build().is_err());
        assert_eq!(ResolverConfig::builder().top_k(5).build().unwrap().top_k, 5);
    }
}
