//! Design elements: the records backing each layer.

use chrono::Utc;
use serde::{Deserialize, Serialize};

mod frame;
mod image;
mod text;

pub use frame::FrameElement;
pub use image::{decode_data_url, DecodedImage, ImageElement};
pub use text::{TextColor, TextConfig, TextElement, MIN_TEXT_EXTRUSION, MIN_TEXT_HEIGHT};

/// Scene position `[x, y, z]`.
pub type Vec3 = [f64; 3];

pub(crate) fn offset(position: Vec3, delta: Vec3) -> Vec3 {
    [
        position[0] + delta[0],
        position[1] + delta[1],
        position[2] + delta[2],
    ]
}

/// Element kind, as used in layer ids and clipboard contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
    Frame,
}

impl ElementKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Image => "image",
            ElementKind::Frame => "frame",
        }
    }
}

/// Issues element ids of the form `{kind}_{millis}`.
///
/// Two ids issued within the same millisecond still differ: the stamp never
/// repeats and never goes backwards.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, kind: ElementKind) -> String {
        let stamp = Utc::now().timestamp_millis().max(self.last + 1);
        self.last = stamp;
        format!("{}_{}", kind.prefix(), stamp)
    }

    /// Account for an id minted elsewhere (e.g. restored from a document)
    /// so it is never issued again.
    pub fn observe(&mut self, id: &str) {
        if let Some(stamp) = id
            .rsplit_once('_')
            .and_then(|(_, tail)| tail.parse::<i64>().ok())
        {
            self.last = self.last.max(stamp);
        }
    }
}
