//! In-memory vector store.
//!
//! [`InMemoryVectorStore`] keeps the snapshot behind a `tokio::sync::RwLock`.
//! It is suitable for tests and demos where nothing needs to survive a restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::document::IndexSnapshot;
use crate::error::Result;
use crate::vectorstore::VectorStore;

/// An in-memory vector store using cosine similarity for search.
///
/// # Example
///
/// ```rust,ignore
/// use desk_rag::{InMemoryVectorStore, VectorStore};
///
/// let store = InMemoryVectorStore::new();
/// store.replace(snapshot).await?;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryVectorStore {
    snapshot: RwLock<Option<IndexSnapshot>>,
}

impl InMemoryVectorStore {
    /// Create a new empty in-memory vector store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    fn backend(&self) -> &str {
        "InMemory"
    }

    async fn replace(&self, snapshot: IndexSnapshot) -> Result<()> {
        *self.snapshot.write().await = Some(snapshot);
        Ok(())
    }

    async fn load(&self) -> Result<Option<IndexSnapshot>> {
        Ok(self.snapshot.read().await.clone())
    }
}
