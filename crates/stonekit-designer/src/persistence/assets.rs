//! Image asset verification
//!
//! Images whose payload is stored outside the document are checked before
//! they are restored. Checks run concurrently, each under a timeout, and
//! results are matched back to images by element id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

use crate::model::ImageElement;

/// Existence check for a referenced asset
#[async_trait]
pub trait AssetProbe: Send + Sync {
    async fn exists(&self, url: &str) -> bool;
}

/// Resolves `file://` URLs and plain paths; relative paths are taken from
/// `root`. Other schemes are never reachable.
#[derive(Debug, Clone)]
pub struct FileAssetProbe {
    root: PathBuf,
}

impl FileAssetProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(&self, url: &str) -> Option<PathBuf> {
        if let Some(path) = url.strip_prefix("file://") {
            return Some(PathBuf::from(path));
        }
        if url.contains("://") {
            return None;
        }
        let path = Path::new(url);
        if path.is_absolute() {
            Some(path.to_path_buf())
        } else {
            Some(self.root.join(path))
        }
    }
}

#[async_trait]
impl AssetProbe for FileAssetProbe {
    async fn exists(&self, url: &str) -> bool {
        match self.resolve(url) {
            Some(path) => tokio::fs::try_exists(&path).await.unwrap_or(false),
            None => false,
        }
    }
}

/// Answers from a fixed set of reachable URLs, optionally after a delay
#[derive(Debug, Clone, Default)]
pub struct StaticAssetProbe {
    reachable: HashSet<String>,
    delay: Option<Duration>,
}

impl StaticAssetProbe {
    pub fn new<I, S>(reachable: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reachable: reachable.into_iter().map(Into::into).collect(),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl AssetProbe for StaticAssetProbe {
    async fn exists(&self, url: &str) -> bool {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.reachable.contains(url)
    }
}

/// Why an image was left out of a restored design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningReason {
    Unreachable,
    TimedOut,
}

impl std::fmt::Display for WarningReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WarningReason::Unreachable => write!(f, "unreachable"),
            WarningReason::TimedOut => write!(f, "timed out"),
        }
    }
}

/// Non-fatal notice that an image was dropped on load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetWarning {
    pub element_id: String,
    pub url: String,
    pub reason: WarningReason,
}

impl std::fmt::Display for AssetWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Image {} dropped: {} is {}",
            self.element_id, self.url, self.reason
        )
    }
}

/// Outcome of verifying a design's images
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerifiedImages {
    /// Reachable images, in their original order.
    pub admitted: Vec<ImageElement>,
    pub warnings: Vec<AssetWarning>,
}

/// Runs [`AssetProbe`] checks for every externally stored image
#[derive(Debug)]
pub struct AssetVerifier<P> {
    probe: Arc<P>,
    timeout: Duration,
}

impl<P> Clone for AssetVerifier<P> {
    fn clone(&self) -> Self {
        Self {
            probe: Arc::clone(&self.probe),
            timeout: self.timeout,
        }
    }
}

impl<P: AssetProbe + 'static> AssetVerifier<P> {
    pub fn new(probe: P, timeout: Duration) -> Self {
        Self {
            probe: Arc::new(probe),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Check every non-inline image. Outcomes are matched back by position,
    /// so images sharing an id are judged independently.
    pub async fn verify(&self, images: Vec<ImageElement>) -> VerifiedImages {
        let mut checks = JoinSet::new();
        for (index, image) in images.iter().enumerate().filter(|(_, i)| !i.is_inline()) {
            let probe = Arc::clone(&self.probe);
            let url = Arc::clone(&image.url);
            let timeout = self.timeout;
            checks.spawn(async move {
                let outcome = match tokio::time::timeout(timeout, probe.exists(&url)).await {
                    Ok(true) => None,
                    Ok(false) => Some(WarningReason::Unreachable),
                    Err(_) => Some(WarningReason::TimedOut),
                };
                (index, outcome)
            });
        }

        let mut outcomes: Vec<Option<Option<WarningReason>>> = vec![None; images.len()];
        while let Some(joined) = checks.join_next().await {
            match joined {
                Ok((index, outcome)) => outcomes[index] = Some(outcome),
                Err(e) => tracing::error!("Asset check task failed: {}", e),
            }
        }

        let mut verified = VerifiedImages::default();
        for (image, outcome) in images.into_iter().zip(outcomes) {
            let reason = if image.is_inline() {
                None
            } else {
                // A check that never reported back counts as unreachable.
                outcome.unwrap_or(Some(WarningReason::Unreachable))
            };
            match reason {
                None => verified.admitted.push(image),
                Some(reason) => {
                    let warning = AssetWarning {
                        element_id: image.id.clone(),
                        url: image.url.to_string(),
                        reason,
                    };
                    tracing::warn!("{}", warning);
                    verified.warnings.push(warning);
                }
            }
        }
        verified
    }
}
