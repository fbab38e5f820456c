use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::GenericImageView;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::Vec3;
use crate::error::{DesignerError, DesignerResult};

/// An uploaded picture placed flush on the stone face
///
/// `url` is either an inline `data:` URL or a reference to stored payload.
/// The payload never changes after upload, so clones and undo snapshots
/// share it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageElement {
    pub id: String,
    pub url: Arc<str>,
    pub position: Vec3,
    /// Scene size `[w, h]`.
    #[serde(default = "default_size")]
    pub size: [f64; 2],
    #[serde(default)]
    pub rotation: f64,
    /// Natural pixel width.
    #[serde(default)]
    pub width: u32,
    /// Natural pixel height.
    #[serde(default)]
    pub height: u32,
}

fn default_size() -> [f64; 2] {
    [1.0, 1.0]
}

impl ImageElement {
    /// Whether the payload lives outside the document and must be checked
    /// before the element is restored.
    pub fn is_inline(&self) -> bool {
        self.url.starts_with("data:")
    }
}

/// Natural size of a decoded upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
}

impl DecodedImage {
    /// Scene size with the longest side at 1.0.
    pub fn scene_size(&self) -> [f64; 2] {
        let (w, h) = (self.width as f64, self.height as f64);
        if w >= h {
            [1.0, h / w]
        } else {
            [w / h, 1.0]
        }
    }
}

/// Decode a `data:image/...;base64,...` URL and read its natural size.
pub fn decode_data_url(data_url: &str) -> DesignerResult<DecodedImage> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| DesignerError::InvalidImageFormat("not a data URL".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| DesignerError::InvalidImageFormat("missing data URL payload".to_string()))?;
    if !header.ends_with(";base64") {
        return Err(DesignerError::InvalidImageFormat(
            "data URL is not base64 encoded".to_string(),
        ));
    }

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| DesignerError::InvalidImageFormat(e.to_string()))?;
    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| DesignerError::InvalidImageFormat(e.to_string()))?;
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(DesignerError::InvalidImageFormat("empty image".to_string()));
    }
    Ok(DecodedImage { width, height })
}
