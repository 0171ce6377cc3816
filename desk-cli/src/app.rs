//! The assistant as seen by the console: corpus, index and resolver.

use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;

use anyhow::Context;
use desk_agent::{AnswerResolver, Resolution};
use desk_faq::{FaqCorpus, FaqRecord, load_corpus, replace_corpus};
use desk_model::FallbackChain;
use desk_rag::SemanticIndex;
use tracing::{debug, info, warn};

use crate::config::DeskConfig;

/// Owns the loaded corpus and keeps it in step with the corpus file.
pub struct DeskApp {
    config: DeskConfig,
    corpus: FaqCorpus,
    corpus_modified: Option<SystemTime>,
    index: Arc<SemanticIndex>,
    resolver: AnswerResolver,
}

impl DeskApp {
    pub fn new(config: DeskConfig, index: SemanticIndex, llms: FallbackChain) -> Self {
        let index = Arc::new(index);
        let resolver = AnswerResolver::new(index.clone(), llms);
        let mut app =
            Self { config, corpus: FaqCorpus::default(), corpus_modified: None, index, resolver };
        app.reload_corpus();
        app
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    pub fn corpus(&self) -> &FaqCorpus {
        &self.corpus
    }

    /// Whether semantic retrieval has an embedding provider.
    pub fn semantic_enabled(&self) -> bool {
        self.index.is_available()
    }

    fn reload_corpus(&mut self) {
        self.corpus_modified = modified_time(&self.config.corpus_path);
        self.corpus = match load_corpus(&self.config.corpus_path) {
            Ok(corpus) => corpus,
            Err(e) => {
                warn!(
                    path = %self.config.corpus_path.display(),
                    error = %e,
                    "corpus unreadable, using empty corpus"
                );
                FaqCorpus::default()
            }
        };
        info!(records = self.corpus.len(), "corpus loaded");
    }

    /// Reload the corpus if the file changed since the last load.
    pub fn refresh_corpus(&mut self) {
        let modified = modified_time(&self.config.corpus_path);
        if modified != self.corpus_modified {
            debug!("corpus file changed");
            self.reload_corpus();
        }
    }

    /// Answer one query against the current corpus.
    pub async fn ask(&mut self, query: &str) -> Resolution {
        self.refresh_corpus();
        self.resolver
            .resolve_detailed(query, self.corpus.records(), &self.config.support_contact)
            .await
    }

    /// Rebuild the semantic index from the corpus file.
    pub async fn rebuild(&self) -> bool {
        self.index.rebuild(&self.config.corpus_path).await
    }

    /// Replace the corpus with the contents of `source` and reload it.
    ///
    /// Returns the number of FAQ records in the new corpus. The semantic
    /// index is not rebuilt.
    pub fn upload(&mut self, source: &Path) -> anyhow::Result<usize> {
        let content = std::fs::read(source)
            .with_context(|| format!("failed to read {}", source.display()))?;
        replace_corpus(&self.config.corpus_path, &content)
            .with_context(|| format!("failed to replace {}", self.config.corpus_path.display()))?;
        info!(source = %source.display(), "corpus uploaded");
        self.reload_corpus();
        Ok(self.corpus.len())
    }

    /// The first `limit` records of the current corpus.
    pub fn preview(&mut self, limit: usize) -> &[FaqRecord] {
        self.refresh_corpus();
        self.corpus.preview(limit)
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}
