//! File-backed vector store.
//!
//! The whole [`IndexSnapshot`] is stored as one JSON document. Writes go to a
//! temporary sibling file that is then renamed over the index, so a reader
//! opening the index sees either the previous snapshot or the new one in full.
//! Every [`load`](VectorStore::load) re-reads the file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};

use crate::document::IndexSnapshot;
use crate::error::{RagError, Result};
use crate::vectorstore::VectorStore;

const BACKEND: &str = "File";

/// A [`VectorStore`] persisting the index to a single JSON file.
#[derive(Debug, Clone)]
pub struct FileVectorStore {
    path: PathBuf,
}

impl FileVectorStore {
    /// Create a store persisting to `path`. Nothing is touched until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the index file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name =
            self.path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        self.path.with_file_name(format!(".{name}.partial"))
    }

    fn store_error(&self, action: &str, e: impl std::fmt::Display) -> RagError {
        RagError::VectorStoreError {
            backend: BACKEND.to_string(),
            message: format!("failed to {action} {}: {e}", self.path.display()),
        }
    }
}

#[async_trait]
impl VectorStore for FileVectorStore {
    fn backend(&self) -> &str {
        BACKEND
    }

    async fn replace(&self, snapshot: IndexSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.store_error("create directory for", e))?;
        }

        let body = serde_json::to_vec(&snapshot).map_err(|e| self.store_error("serialize", e))?;
        let tmp = self.temp_path();
        fs::write(&tmp, &body).await.map_err(|e| self.store_error("write", e))?;
        if let Err(e) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(self.store_error("replace", e));
        }

        info!(
            path = %self.path.display(),
            chunk_count = snapshot.len(),
            dimensions = snapshot.dimensions,
            "index persisted"
        );
        Ok(())
    }

    async fn load(&self) -> Result<Option<IndexSnapshot>> {
        let body = match fs::read(&self.path).await {
            Ok(body) => body,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "index file not found");
                return Ok(None);
            }
            Err(e) => return Err(self.store_error("read", e)),
        };

        let snapshot: IndexSnapshot =
            serde_json::from_slice(&body).map_err(|e| self.store_error("parse", e))?;
        Ok(Some(snapshot))
    }
}
