//! Three-tier answer resolution.
//!
//! Keyword match first; then retrieval-grounded generation; then plain
//! generation; then escalation to a human contact. The first tier that
//! produces an answer wins and later tiers are never consulted.

use std::sync::Arc;

use desk_faq::{FaqRecord, keyword_match};
use desk_model::FallbackChain;
use desk_rag::Retriever;
use serde::Serialize;
use tracing::{info, instrument};

use crate::config::ResolverConfig;
use crate::prompt::{escalation_message, grounded_prompt, keyword_answer, plain_prompt};

/// Which tier produced an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tier", rename_all = "snake_case")]
pub enum AnswerSource {
    /// A curated FAQ record matched by keyword.
    Keyword { question: String, score: u32 },
    /// A provider answered with retrieved corpus context.
    Grounded { provider: String, chunks: usize },
    /// A provider answered without corpus context.
    Direct { provider: String },
    /// Nothing answered; the user was pointed to support.
    Escalated,
}

/// An answer together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub answer: String,
    pub source: AnswerSource,
}

/// Resolves user queries against the FAQ corpus, the semantic index and the
/// provider chain.
///
/// Resolution never fails: provider errors and absent capabilities only move
/// the query on to the next tier.
pub struct AnswerResolver {
    config: ResolverConfig,
    retriever: Arc<dyn Retriever>,
    llms: FallbackChain,
}

impl AnswerResolver {
    pub fn new(retriever: Arc<dyn Retriever>, llms: FallbackChain) -> Self {
        Self { config: ResolverConfig::default(), retriever, llms }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `query` to answer text.
    pub async fn resolve(
        &self,
        query: &str,
        records: &[FaqRecord],
        support_contact: &str,
    ) -> String {
        self.resolve_detailed(query, records, support_contact).await.answer
    }

    /// Resolve `query`, reporting which tier answered.
    ///
    /// The query reaches the prompts verbatim; trimming only decides whether
    /// it is blank.
    #[instrument(skip_all, fields(query_len = query.len()))]
    pub async fn resolve_detailed(
        &self,
        query: &str,
        records: &[FaqRecord],
        support_contact: &str,
    ) -> Resolution {
        if query.trim().is_empty() {
            info!("blank query, escalating");
            return escalated(support_contact);
        }

        if let Some(best) = keyword_match(query, records, self.config.min_score).into_iter().next()
        {
            info!(
                question = %best.record.question,
                score = best.score,
                "answered by keyword match"
            );
            return Resolution {
                answer: keyword_answer(&best.record),
                source: AnswerSource::Keyword { question: best.record.question, score: best.score },
            };
        }

        let chunks = self.retriever.search(query, self.config.top_k).await;
        if !chunks.is_empty() {
            let prompt = grounded_prompt(&chunks, query, support_contact);
            if let Some((provider, text)) = self.llms.complete(&prompt).await {
                info!(%provider, chunks = chunks.len(), "answered with retrieved context");
                return Resolution {
                    answer: text.trim().to_string(),
                    source: AnswerSource::Grounded { provider, chunks: chunks.len() },
                };
            }
        } else {
            let prompt = plain_prompt(query, support_contact);
            if let Some((provider, text)) = self.llms.complete(&prompt).await {
                info!(%provider, "answered without context");
                return Resolution {
                    answer: text.trim().to_string(),
                    source: AnswerSource::Direct { provider },
                };
            }
        }

        info!("no provider answered, escalating");
        escalated(support_contact)
    }
}

fn escalated(support_contact: &str) -> Resolution {
    Resolution { answer: escalation_message(support_contact), source: AnswerSource::Escalated }
}
