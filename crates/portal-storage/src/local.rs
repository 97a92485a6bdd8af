//! Filesystem-backed object store

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, instrument};

use portal_core::error::DomainError;
use portal_core::{ObjectStore, StoredObject};

/// Object store rooted at a local directory.
///
/// Paths are store-relative (`{user_id}/{millis}_{file_name}`); the public
/// URL is the configured base joined with that path.
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalObjectStore {
    /// Create a store rooted at `root`, creating the directory if needed
    pub async fn new(
        root: impl Into<PathBuf>,
        public_base_url: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let root = root.into();
        fs::create_dir_all(&root)
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        Ok(Self {
            root,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a store-relative path to an absolute one, rejecting traversal
    fn resolve(&self, path: &str) -> Result<PathBuf, DomainError> {
        let relative = Path::new(path);
        let traversal = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if path.is_empty() || traversal {
            return Err(DomainError::StorageError(format!(
                "Invalid object path: {path}"
            )));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    #[instrument(skip(self, bytes), fields(len = bytes.len()))]
    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<StoredObject, DomainError> {
        let full = self.resolve(path)?;

        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::StorageError(e.to_string()))?;
        }

        fs::write(&full, bytes)
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        debug!(path, "stored object");

        Ok(StoredObject {
            path: path.to_string(),
        })
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{path}", self.public_base_url)
    }

    #[instrument(skip(self))]
    async fn download(&self, path: &str) -> Result<Vec<u8>, DomainError> {
        let full = self.resolve(path)?;

        fs::read(&full)
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))
    }
}
