//! Rebuild and search behaviour of the semantic index.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use desk_rag::{
    EmbeddingProvider, FileVectorStore, InMemoryVectorStore, RagConfig, RagError, Retriever,
    SemanticIndex, VectorStore,
};

const VOCABULARY: [&str; 6] = ["password", "hours", "fee", "refund", "course", "login"];

/// Bag-of-words embedder over a tiny vocabulary, so similarity follows shared words.
struct VocabularyEmbedder {
    calls: AtomicUsize,
}

impl VocabularyEmbedder {
    fn new() -> Self {
        Self { calls: AtomicUsize::new(0) }
    }
}

#[async_trait]
impl EmbeddingProvider for VocabularyEmbedder {
    fn name(&self) -> &str {
        "vocabulary"
    }

    async fn embed(&self, text: &str) -> desk_rag::Result<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let lower = text.to_lowercase();
        let mut v: Vec<f32> =
            VOCABULARY.iter().map(|w| lower.matches(w).count() as f32).collect();
        // constant component keeps every vector non-zero
        v.push(0.1);
        Ok(v)
    }

    fn dimensions(&self) -> usize {
        VOCABULARY.len() + 1
    }
}

struct FailingEmbedder;

#[async_trait]
impl EmbeddingProvider for FailingEmbedder {
    fn name(&self) -> &str {
        "failing"
    }

    async fn embed(&self, _text: &str) -> desk_rag::Result<Vec<f32>> {
        Err(RagError::EmbeddingError { provider: "failing".into(), message: "offline".into() })
    }

    fn dimensions(&self) -> usize {
        VOCABULARY.len() + 1
    }
}

const CORPUS: &str = "\
Q: How do I reset my password?
K: password, reset
A: Use the login page.

Q: Office hours?
K: hours
A: 9am-5pm.

Q: What is the course fee?
K: fee
A: 500 INR per course.
";

fn write_corpus(dir: &Path, text: &str) -> std::path::PathBuf {
    let path = dir.join("faqs.txt");
    std::fs::write(&path, text).unwrap();
    path
}

fn file_index(index_path: &Path, provider: Option<Arc<dyn EmbeddingProvider>>) -> SemanticIndex {
    SemanticIndex::builder()
        .maybe_embedding_provider(provider)
        .vector_store(Arc::new(FileVectorStore::new(index_path)))
        .build()
        .unwrap()
}

#[tokio::test]
async fn rebuild_then_search_returns_most_relevant_block_first() {
    let temp = tempfile::tempdir().unwrap();
    let corpus = write_corpus(temp.path(), CORPUS);
    let index =
        file_index(&temp.path().join("index.json"), Some(Arc::new(VocabularyEmbedder::new())));

    assert!(index.rebuild(&corpus).await);

    let results = index.search("how much is the fee for a course", 3).await;
    assert_eq!(results.len(), 3);
    assert!(results[0].starts_with("Q: What is the course fee?"));
    // chunks keep the raw block text, markers included
    assert!(results[0].contains("K: fee"));
}

#[tokio::test]
async fn search_respects_top_k() {
    let temp = tempfile::tempdir().unwrap();
    let corpus = write_corpus(temp.path(), CORPUS);
    let index =
        file_index(&temp.path().join("index.json"), Some(Arc::new(VocabularyEmbedder::new())));
    assert!(index.rebuild(&corpus).await);

    assert_eq!(index.search("password", 1).await.len(), 1);
    assert!(index.search("password", 0).await.is_empty());
}

#[tokio::test]
async fn failed_rebuild_leaves_previous_index_untouched() {
    let temp = tempfile::tempdir().unwrap();
    let corpus = write_corpus(temp.path(), CORPUS);
    let index_path = temp.path().join("index.json");

    let good = file_index(&index_path, Some(Arc::new(VocabularyEmbedder::new())));
    assert!(good.rebuild(&corpus).await);
    let before = std::fs::read(&index_path).unwrap();

    write_corpus(temp.path(), "Q: Replacement?\nK: refund\nA: New text.");
    let failing = file_index(&index_path, Some(Arc::new(FailingEmbedder)));
    assert!(!failing.rebuild(&corpus).await);

    let after = std::fs::read(&index_path).unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn rebuild_without_provider_is_false_and_writes_nothing() {
    let temp = tempfile::tempdir().unwrap();
    let corpus = write_corpus(temp.path(), CORPUS);
    let index_path = temp.path().join("index.json");
    let index = file_index(&index_path, None);

    assert!(!index.is_available());
    assert!(!index.rebuild(&corpus).await);
    assert!(!index_path.exists());
    assert!(matches!(index.try_rebuild(&corpus).await, Err(RagError::Unavailable(_))));
}

#[tokio::test]
async fn rebuild_with_missing_corpus_is_false() {
    let temp = tempfile::tempdir().unwrap();
    let index =
        file_index(&temp.path().join("index.json"), Some(Arc::new(VocabularyEmbedder::new())));
    assert!(!index.rebuild(temp.path().join("missing.txt")).await);
}

#[tokio::test]
async fn search_before_rebuild_is_empty_and_does_not_error() {
    let temp = tempfile::tempdir().unwrap();
    let index =
        file_index(&temp.path().join("index.json"), Some(Arc::new(VocabularyEmbedder::new())));
    assert!(index.search("password", 3).await.is_empty());
    assert!(matches!(index.try_search("password", 3).await, Err(RagError::IndexNotBuilt)));
}

#[tokio::test]
async fn rebuild_replaces_old_chunks_completely() {
    let temp = tempfile::tempdir().unwrap();
    let corpus = write_corpus(temp.path(), CORPUS);
    let index_path = temp.path().join("index.json");
    let index = file_index(&index_path, Some(Arc::new(VocabularyEmbedder::new())));
    assert!(index.rebuild(&corpus).await);

    write_corpus(temp.path(), "Q: Refunds?\nK: refund\nA: Within 7 days.");
    assert!(index.rebuild(&corpus).await);

    // a fresh handle reopens the file and sees only the new corpus
    let reopened = file_index(&index_path, Some(Arc::new(VocabularyEmbedder::new())));
    let results = reopened.search("password", 10).await;
    assert_eq!(results, vec!["Q: Refunds?\nK: refund\nA: Within 7 days.".to_string()]);
}

#[tokio::test]
async fn empty_corpus_builds_an_empty_index() {
    let temp = tempfile::tempdir().unwrap();
    let corpus = write_corpus(temp.path(), "\n\n");
    let store = Arc::new(InMemoryVectorStore::new());
    let index = SemanticIndex::builder()
        .embedding_provider(Arc::new(VocabularyEmbedder::new()))
        .vector_store(store.clone())
        .build()
        .unwrap();

    assert!(index.rebuild(&corpus).await);
    let snapshot = store.load().await.unwrap().unwrap();
    assert!(snapshot.is_empty());
    assert!(index.search("anything", 3).await.is_empty());
}

#[tokio::test]
async fn threshold_filters_weak_results() {
    let temp = tempfile::tempdir().unwrap();
    let corpus = write_corpus(temp.path(), CORPUS);
    let index = SemanticIndex::builder()
        .config(RagConfig::builder().similarity_threshold(0.9).build().unwrap())
        .embedding_provider(Arc::new(VocabularyEmbedder::new()))
        .vector_store(Arc::new(InMemoryVectorStore::new()))
        .build()
        .unwrap();
    assert!(index.rebuild(&corpus).await);

    let results = index.search("office hours", 3).await;
    assert_eq!(results.len(), 1);
    assert!(results[0].contains("Office hours?"));
}

#[tokio::test]
async fn index_records_provider_and_dimensions() {
    let temp = tempfile::tempdir().unwrap();
    let corpus = write_corpus(temp.path(), CORPUS);
    let store = Arc::new(InMemoryVectorStore::new());
    let embedder = Arc::new(VocabularyEmbedder::new());
    let index = SemanticIndex::builder()
        .embedding_provider(embedder.clone())
        .vector_store(store.clone())
        .build()
        .unwrap();

    assert_eq!(index.try_rebuild(&corpus).await.unwrap(), 3);
    let snapshot = store.load().await.unwrap().unwrap();
    assert_eq!(snapshot.provider, "vocabulary");
    assert_eq!(snapshot.dimensions, VOCABULARY.len() + 1);
    assert_eq!(embedder.calls.load(Ordering::SeqCst), 3);
}
