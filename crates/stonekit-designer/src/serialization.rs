//! Persisted design document.
//!
//! ```json
//! { "state": { "selectedObject": "gravestone", "selectedTexture": "marble",
//!              "stoneDimensions": { "width": 2, "height": 2, "thickness": 0.5 },
//!              "texts": [], "uploadedImages": [], "frames": [] } }
//! ```
//!
//! Every field is optional on read.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::dimensions::StoneDimensions;
use crate::model::{FrameElement, ImageElement, TextElement};
use crate::stone::ObjectType;

/// Top-level document as stored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignDocument {
    #[serde(default)]
    pub state: PersistedState,
}

/// The design aggregate inside a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub selected_object: ObjectType,
    #[serde(default = "default_texture")]
    pub selected_texture: String,
    #[serde(default)]
    pub stone_dimensions: StoneDimensions,
    #[serde(default)]
    pub texts: Vec<TextElement>,
    #[serde(default)]
    pub uploaded_images: Vec<ImageElement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<FrameElement>,
}

fn default_texture() -> String {
    "marble".to_string()
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            selected_object: ObjectType::default(),
            selected_texture: default_texture(),
            stone_dimensions: StoneDimensions::default(),
            texts: Vec::new(),
            uploaded_images: Vec::new(),
            frames: Vec::new(),
        }
    }
}

impl DesignDocument {
    pub fn new(state: PersistedState) -> Self {
        Self { state }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json().context("Failed to serialize design")?;
        std::fs::write(path.as_ref(), json)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))?;
        Ok(())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
        let document = Self::from_json(&content).context("Failed to parse design file")?;
        Ok(document)
    }
}
