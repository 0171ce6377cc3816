//! Resolved console configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::{Cli, EmbedderKind};

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct DeskConfig {
    pub corpus_path: PathBuf,
    pub index_path: PathBuf,
    pub support_contact: String,
    pub embedder: EmbedderKind,
    pub openai_model: String,
    pub gemini_model: String,
    pub timeout: Duration,
}

impl DeskConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let support_contact = match cli.support_contact.trim() {
            "" => crate::DEFAULT_SUPPORT_CONTACT.to_string(),
            contact => contact.to_string(),
        };

        Self {
            corpus_path: cli.corpus.clone(),
            index_path: cli.index.clone(),
            support_contact,
            embedder: cli.embedder,
            openai_model: cli.openai_model.clone(),
            gemini_model: cli.gemini_model.clone(),
            timeout: Duration::from_secs(cli.timeout_secs.max(1)),
        }
    }
}
