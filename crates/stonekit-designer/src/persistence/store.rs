//! Document stores
//!
//! A store maps design handles to documents. Saving to an existing handle
//! replaces the previous document; concurrent writers are not merged.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{DesignHandle, PersistenceError};
use crate::serialization::DesignDocument;

/// Backend holding persisted design documents
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Write `document` under `handle`, replacing anything stored there.
    async fn save(
        &self,
        handle: &DesignHandle,
        document: &DesignDocument,
    ) -> Result<(), PersistenceError>;

    /// Read the document stored under `handle`. `Ok(None)` if there is none.
    async fn load(&self, handle: &DesignHandle) -> Result<Option<DesignDocument>, PersistenceError>;
}

/// In-process store keeping serialized documents in a map
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<HashMap<DesignHandle, String>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw JSON under `handle`, bypassing serialization.
    pub fn insert_raw(&self, handle: DesignHandle, json: impl Into<String>) {
        self.documents.write().insert(handle, json.into());
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn save(
        &self,
        handle: &DesignHandle,
        document: &DesignDocument,
    ) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(document)?;
        self.documents.write().insert(*handle, json);
        Ok(())
    }

    async fn load(&self, handle: &DesignHandle) -> Result<Option<DesignDocument>, PersistenceError> {
        let json = self.documents.read().get(handle).cloned();
        match json {
            Some(json) => Ok(Some(DesignDocument::from_json(&json)?)),
            None => Ok(None),
        }
    }
}

/// One JSON file per design in a directory
#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    dir: PathBuf,
}

impl FileDocumentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, handle: &DesignHandle) -> PathBuf {
        self.dir.join(format!("{}.json", handle))
    }
}

#[async_trait]
impl DocumentStore for FileDocumentStore {
    async fn save(
        &self,
        handle: &DesignHandle,
        document: &DesignDocument,
    ) -> Result<(), PersistenceError> {
        let json = document.to_json()?;
        tokio::fs::create_dir_all(&self.dir).await?;

        // Readers only ever see a complete document.
        let path = self.path_for(handle);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &path).await?;
        tracing::debug!("Wrote {}", path.display());
        Ok(())
    }

    async fn load(&self, handle: &DesignHandle) -> Result<Option<DesignDocument>, PersistenceError> {
        let path = self.path_for(handle);
        match tokio::fs::read_to_string(&path).await {
            Ok(json) => Ok(Some(DesignDocument::from_json(&json)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
