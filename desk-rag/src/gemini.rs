//! Gemini embedding provider using the Gemini REST API.
//!
//! This module is only available when the `gemini` feature is enabled.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::embedding::EmbeddingProvider;
use crate::error::{RagError, Result};

/// The default Gemini API base URL.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// The default embedding model.
const DEFAULT_MODEL: &str = "text-embedding-004";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Most texts `batchEmbedContents` accepts in one request.
pub const MAX_BATCH_SIZE: usize = 100;

/// An [`EmbeddingProvider`] backed by the Gemini embedding API.
///
/// # Configuration
///
/// - Single-text [`embed`](EmbeddingProvider::embed) calls are sent with the
///   `RETRIEVAL_QUERY` task type; [`embed_batch`](EmbeddingProvider::embed_batch)
///   uses `RETRIEVAL_DOCUMENT`, matching how the index embeds corpus chunks
///   and queries.
/// - `api_key` – from the constructor or `GEMINI_API_KEY` / `GOOGLE_API_KEY`.
///
/// # Example
///
/// ```rust,ignore
/// use desk_rag::gemini::GeminiEmbeddingProvider;
///
/// let provider = GeminiEmbeddingProvider::new("your-api-key")?;
/// let embedding = provider.embed("hello world").await?;
/// ```
pub struct GeminiEmbeddingProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    dimensions: usize,
}

impl GeminiEmbeddingProvider {
    /// Default embedding dimensions for `text-embedding-004`.
    const DEFAULT_DIMENSIONS: usize = 768;

    /// Create a new provider using the given API key and the default model.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    /// Create a new provider whose requests fail after `timeout`.
    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(RagError::Unavailable("Gemini API key must not be empty".into()));
        }

        let client = reqwest::Client::builder().timeout(timeout).build().map_err(|e| {
            RagError::EmbeddingError {
                provider: "Gemini".into(),
                message: format!("failed to build HTTP client: {e}"),
            }
        })?;

        Ok(Self {
            client,
            api_key,
            base_url: GEMINI_API_BASE.into(),
            model: DEFAULT_MODEL.into(),
            dimensions: Self::DEFAULT_DIMENSIONS,
        })
    }

    /// Create a new provider from `GEMINI_API_KEY`, falling back to `GOOGLE_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .map_err(|_| {
                RagError::Unavailable("GEMINI_API_KEY or GOOGLE_API_KEY not set".into())
            })?;
        Self::new(api_key)
    }

    /// Set the embedding model and its output dimensionality.
    pub fn with_model(mut self, model: impl Into<String>, dimensions: usize) -> Self {
        self.model = model.into();
        self.dimensions = dimensions;
        self
    }

    /// Point the provider at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn model_path(&self) -> String {
        format!("models/{}", self.model)
    }

    fn request<'a>(&'a self, text: &'a str, task_type: TaskType) -> EmbedRequest<'a> {
        EmbedRequest {
            model: self.model_path(),
            content: Content { parts: vec![Part { text }] },
            task_type,
        }
    }

    async fn post<Req: Serialize, Res: DeserializeOwned>(
        &self,
        method: &str,
        body: &Req,
    ) -> Result<Res> {
        let url = format!("{}/{}:{method}", self.base_url, self.model_path());
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = "Gemini", error = %e, "request failed");
                RagError::EmbeddingError {
                    provider: "Gemini".into(),
                    message: format!("request failed: {e}"),
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(provider = "Gemini", %status, "API error");
            return Err(RagError::EmbeddingError {
                provider: "Gemini".into(),
                message: format!("API returned {status}: {body}"),
            });
        }

        response.json().await.map_err(|e| {
            error!(provider = "Gemini", error = %e, "failed to parse response");
            RagError::EmbeddingError {
                provider: "Gemini".into(),
                message: format!("failed to parse response: {e}"),
            }
        })
    }
}

// ── Gemini API request/response types ──────────────────────────────

#[derive(Serialize, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum TaskType {
    RetrievalQuery,
    RetrievalDocument,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EmbedRequest<'a> {
    model: String,
    content: Content<'a>,
    task_type: TaskType,
}

#[derive(Serialize)]
struct BatchEmbedRequest<'a> {
    requests: Vec<EmbedRequest<'a>>,
}

#[derive(Deserialize)]
struct ContentEmbedding {
    values: Vec<f32>,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: ContentEmbedding,
}

#[derive(Deserialize)]
struct BatchEmbedResponse {
    #[serde(default)]
    embeddings: Vec<ContentEmbedding>,
}

// ── EmbeddingProvider implementation ───────────────────────────────

#[async_trait]
impl EmbeddingProvider for GeminiEmbeddingProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        debug!(provider = "Gemini", text_len = text.len(), "embedding single text");

        let response: EmbedResponse =
            self.post("embedContent", &self.request(text, TaskType::RetrievalQuery)).await?;
        Ok(response.embedding.values)
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!(
            provider = "Gemini",
            batch_size = texts.len(),
            model = %self.model,
            "embedding batch"
        );

        let mut embeddings = Vec::with_capacity(texts.len());
        for batch in texts.chunks(MAX_BATCH_SIZE) {
            let body = BatchEmbedRequest {
                requests: batch
                    .iter()
                    .map(|t| self.request(t, TaskType::RetrievalDocument))
                    .collect(),
            };
            let response: BatchEmbedResponse = self.post("batchEmbedContents", &body).await?;
            embeddings.extend(response.embeddings.into_iter().map(|e| e.values));
        }
        Ok(embeddings)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case_task_type() {
        let provider = GeminiEmbeddingProvider::new("key").unwrap();
        let json =
            serde_json::to_value(provider.request("hello", TaskType::RetrievalDocument)).unwrap();
        assert_eq!(json["model"], "models/text-embedding-004");
        assert_eq!(json["taskType"], "RETRIEVAL_DOCUMENT");
        assert_eq!(json["content"]["parts"][0]["text"], "hello");
    }

    #[test]
    fn empty_api_key_is_unavailable() {
        assert!(matches!(GeminiEmbeddingProvider::new(""), Err(RagError::Unavailable(_))));
    }
}
