//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use desk_faq::DEFAULT_PREVIEW_LIMIT;
use desk_telemetry::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "desk", version, about = "Support desk assistant console")]
pub struct Cli {
    /// FAQ corpus file
    #[arg(long, env = "DESK_CORPUS", default_value = "data/faqs.txt", global = true)]
    pub corpus: PathBuf,

    /// Persisted vector index file
    #[arg(long, env = "DESK_INDEX", default_value = "vectorstore/index.json", global = true)]
    pub index: PathBuf,

    /// Contact shown when no answer is found
    #[arg(
        long,
        env = "DESK_SUPPORT_CONTACT",
        default_value = "support@roomantech.com",
        global = true
    )]
    pub support_contact: String,

    /// Embedding backend for the semantic index
    #[arg(
        long,
        env = "DESK_EMBEDDER",
        value_enum,
        default_value_t = EmbedderKind::Openai,
        global = true
    )]
    pub embedder: EmbedderKind,

    /// Primary chat model
    #[arg(
        long,
        env = "DESK_OPENAI_MODEL",
        default_value = desk_model::openai::DEFAULT_MODEL,
        global = true
    )]
    pub openai_model: String,

    /// Secondary chat model
    #[arg(
        long,
        env = "DESK_GEMINI_MODEL",
        default_value = desk_model::gemini::DEFAULT_MODEL,
        global = true
    )]
    pub gemini_model: String,

    /// Per-request timeout for provider calls
    #[arg(long, env = "DESK_TIMEOUT_SECS", default_value_t = 30, global = true)]
    pub timeout_secs: u64,

    /// Log output format: pretty or json
    #[arg(long, env = "DESK_LOG_FORMAT", default_value = "pretty", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive chat (default)
    Chat,
    /// Answer a single question and exit
    Ask {
        /// The question
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Rebuild the semantic index from the corpus
    Rebuild,
    /// List the first FAQ entries
    Faqs {
        #[arg(long, default_value_t = DEFAULT_PREVIEW_LIMIT)]
        limit: usize,
    },
    /// Replace the FAQ corpus with the contents of a text file
    Upload { file: PathBuf },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedderKind {
    Openai,
    Gemini,
    /// No semantic index; answers come from keywords and providers only.
    #[value(name = "none")]
    Disabled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_chat_without_subcommand() {
        let cli = Cli::try_parse_from(["desk"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.embedder, EmbedderKind::Openai);
        assert_eq!(cli.openai_model, "gpt-4o-mini");
        assert_eq!(cli.log_format, LogFormat::Pretty);
    }

    #[test]
    fn log_format_is_parsed() {
        let cli = Cli::try_parse_from(["desk", "--log-format", "JSON", "rebuild"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(Cli::try_parse_from(["desk", "--log-format", "xml"]).is_err());
    }

    #[test]
    fn ask_joins_words() {
        let cli = Cli::try_parse_from(["desk", "ask", "office", "hours?", "--embedder", "none"])
            .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Ask { query: vec!["office".into(), "hours?".into()] })
        );
        assert_eq!(cli.embedder, EmbedderKind::Disabled);
    }

    #[test]
    fn faqs_limit_defaults_to_preview_size() {
        let cli = Cli::try_parse_from(["desk", "faqs"]).unwrap();
        assert_eq!(cli.command, Some(Command::Faqs { limit: 10 }));
    }
}
