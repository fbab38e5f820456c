use serde::{Deserialize, Serialize};

use super::Vec3;
use crate::geometry::{self, FrameOutline, FrameShape};

/// Decorative outline placed on the stone, independent of texts and images
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameElement {
    pub id: String,
    pub shape: FrameShape,
    /// `[width, height]`; circles and squares only use the width.
    pub size: [f64; 2],
    pub position: Vec3,
}

impl FrameElement {
    pub fn outline(&self) -> FrameOutline {
        geometry::outline(self.shape, self.size)
    }
}
