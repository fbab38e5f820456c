//! Decorative frames.
//!
//! Frames sit outside the layer list and undo history.

use std::sync::Arc;

use super::DesignerState;
use crate::error::{DesignerError, DesignerResult};
use crate::geometry::{FrameOutline, FrameShape};
use crate::model::{ElementKind, FrameElement, Vec3};

fn check_size(size: [f64; 2]) -> DesignerResult<()> {
    if size.iter().all(|v| v.is_finite() && *v > 0.0) {
        Ok(())
    } else {
        Err(DesignerError::validation(
            "frame size",
            format!("{:?} is not a positive size", size),
        ))
    }
}

impl DesignerState {
    pub fn add_frame(
        &mut self,
        shape: FrameShape,
        size: [f64; 2],
        position: Vec3,
    ) -> DesignerResult<String> {
        if let Err(e) = check_size(size) {
            return Err(self.reject(e));
        }
        let id = self.ids.next_id(ElementKind::Frame);
        self.frames.push(FrameElement {
            id: id.clone(),
            shape,
            size,
            position,
        });
        self.touch();
        tracing::debug!("Added {} frame {}", shape.name(), id);
        Ok(id)
    }

    /// `Ok(false)` if there is no frame `id`.
    pub fn update_frame(&mut self, id: &str, size: [f64; 2], position: Vec3) -> DesignerResult<bool> {
        if let Err(e) = check_size(size) {
            return Err(self.reject(e));
        }
        let Some(frame) = self.frames.iter_mut().find(|f| f.id == id) else {
            return Ok(false);
        };
        frame.size = size;
        frame.position = position;
        self.touch();
        Ok(true)
    }

    pub fn remove_frame(&mut self, id: &str) -> bool {
        let before = self.frames.len();
        self.frames.retain(|f| f.id != id);
        let removed = self.frames.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    /// Outline of frame `id`, memoized by shape and size.
    pub fn frame_outline(&mut self, id: &str) -> Option<Arc<FrameOutline>> {
        let frame = self.frames.iter().find(|f| f.id == id)?;
        Some(self.geometry.outline(frame.shape, frame.size))
    }
}
