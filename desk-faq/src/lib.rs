//! FAQ corpus support for the support desk assistant.
//!
//! This crate provides:
//! - Flat-text FAQ parsing (`Q:` / `K:` / `A:` blocks separated by blank lines)
//! - Corpus loading and atomic replacement on disk
//! - Deterministic keyword scoring against a user query

mod error;
mod model;
mod parser;
mod select;
mod store;

pub use error::{FaqError, FaqResult};
pub use model::{DEFAULT_PREVIEW_LIMIT, FaqCorpus, FaqRecord, ScoredMatch};
pub use parser::parse_faq_text;
pub use select::{DEFAULT_MIN_SCORE, KEYWORD_HIT_SCORE, keyword_match};
pub use store::{load_corpus, load_faqs, replace_corpus};
