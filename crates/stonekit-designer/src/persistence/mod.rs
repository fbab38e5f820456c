//! Persistence adapter
//!
//! Saves design documents to a [`DocumentStore`] under opaque handles and
//! restores them, verifying externally stored images on the way in. A
//! missing document is `Ok(None)`; only store failures are errors. Images
//! that cannot be reached are dropped with a warning and the rest of the
//! design still loads.

mod assets;
mod store;

pub use assets::{
    AssetProbe, AssetVerifier, AssetWarning, FileAssetProbe, StaticAssetProbe, VerifiedImages,
    WarningReason,
};
pub use store::{DocumentStore, FileDocumentStore, MemoryDocumentStore};

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use stonekit_core::{emit, AppEvent, DesignEvent};
use stonekit_settings::PersistenceSettings;
use thiserror::Error;
use uuid::Uuid;

use crate::serialization::DesignDocument;

/// Errors from the document store
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed design document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid design handle: {0}")]
    InvalidHandle(String),

    #[error("Store error: {0}")]
    Store(String),
}

/// Opaque identifier of a saved design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignHandle(Uuid);

impl DesignHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DesignHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DesignHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DesignHandle {
    type Err = PersistenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| PersistenceError::InvalidHandle(s.to_string()))
    }
}

/// A document restored from the store, with its images verified
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDesign {
    pub handle: DesignHandle,
    pub document: DesignDocument,
    pub warnings: Vec<AssetWarning>,
}

pub struct PersistenceAdapter<S, P> {
    store: S,
    verifier: AssetVerifier<P>,
}

impl<S, P> PersistenceAdapter<S, P>
where
    S: DocumentStore,
    P: AssetProbe + 'static,
{
    pub fn new(store: S, probe: P, asset_timeout: Duration) -> Self {
        Self {
            store,
            verifier: AssetVerifier::new(probe, asset_timeout),
        }
    }

    pub fn with_settings(store: S, probe: P, settings: &PersistenceSettings) -> Self {
        Self::new(store, probe, settings.asset_timeout())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Save under a fresh handle.
    pub async fn save(&self, document: &DesignDocument) -> Result<DesignHandle, PersistenceError> {
        let handle = DesignHandle::new();
        self.save_to(&handle, document).await?;
        Ok(handle)
    }

    /// Save under `handle`, replacing the previous document.
    pub async fn save_to(
        &self,
        handle: &DesignHandle,
        document: &DesignDocument,
    ) -> Result<(), PersistenceError> {
        self.store.save(handle, document).await?;
        tracing::info!(
            "Saved design {} ({} texts, {} images)",
            handle,
            document.state.texts.len(),
            document.state.uploaded_images.len()
        );
        let _ = emit!(AppEvent::Design(DesignEvent::Saved {
            handle: handle.to_string(),
        }));
        Ok(())
    }

    pub async fn load(&self, handle: &DesignHandle) -> Result<Option<LoadedDesign>, PersistenceError> {
        let Some(mut document) = self.store.load(handle).await? else {
            tracing::info!("Design {} not found", handle);
            return Ok(None);
        };

        let images = std::mem::take(&mut document.state.uploaded_images);
        let verified = self.verifier.verify(images).await;
        document.state.uploaded_images = verified.admitted;

        tracing::info!(
            "Loaded design {} ({} images, {} dropped)",
            handle,
            document.state.uploaded_images.len(),
            verified.warnings.len()
        );
        let _ = emit!(AppEvent::Design(DesignEvent::Loaded {
            handle: handle.to_string(),
            images: document.state.uploaded_images.len(),
            dropped: verified.warnings.len(),
        }));

        Ok(Some(LoadedDesign {
            handle: *handle,
            document,
            warnings: verified.warnings,
        }))
    }
}
