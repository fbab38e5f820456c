//! Text and image operations.
//!
//! Position, rotation, content and style edits are undoable. Size and text
//! height edits are continuous adjustments made while dragging and are
//! applied without a snapshot.

use std::sync::Arc;

use super::{DesignerState, Selection};
use crate::error::{DesignerError, DesignerResult};
use crate::history::ActionType;
use crate::model::{
    decode_data_url, ElementKind, ImageElement, TextColor, TextConfig, TextElement, Vec3,
    MIN_TEXT_EXTRUSION, MIN_TEXT_HEIGHT,
};

/// Smallest scene size an image can be shrunk to.
pub const MIN_IMAGE_SIZE: f64 = 0.01;

/// Style fields to change on a text; `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyle {
    pub font: Option<String>,
    pub color: Option<TextColor>,
    pub extrusion: Option<f64>,
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

impl DesignerState {
    /// Add a text at the centre of the face, select it and switch to Move.
    pub fn add_text(&mut self, config: TextConfig) -> DesignerResult<String> {
        if config.text.trim().is_empty() {
            return Err(self.reject(DesignerError::validation("text", "must not be empty")));
        }

        self.record(ActionType::AddText);
        let id = self.ids.next_id(ElementKind::Text);
        let position = [0.0, 0.0, self.object_type.text_depth()];
        let text = TextElement::from_config(
            id.clone(),
            config,
            &self.settings.default_font,
            position,
            self.object_type.is_cylindrical(),
        );
        self.texts.push(text);
        self.modes.enter_move();
        self.selection = Selection::Text(id.clone());
        self.sync();
        tracing::debug!("Added text {}", id);
        Ok(id)
    }

    /// Replace the content of the selected text. `Ok(false)` when no text
    /// is selected.
    pub fn update_text(&mut self, text: &str) -> DesignerResult<bool> {
        let Some(index) = self.selected_text_index() else {
            return Ok(false);
        };
        if text.trim().is_empty() {
            return Err(self.reject(DesignerError::validation("text", "must not be empty")));
        }
        self.record(ActionType::UpdateText);
        self.texts[index].text = text.to_string();
        self.sync();
        Ok(true)
    }

    pub fn update_text_position(&mut self, index: usize, position: Vec3) -> bool {
        if index >= self.texts.len() || !all_finite(&position) {
            tracing::debug!("Ignoring text move at {}", index);
            return false;
        }
        self.record(ActionType::MoveText);
        self.texts[index].position = position;
        self.sync();
        true
    }

    /// Set the text height, not less than [`MIN_TEXT_HEIGHT`]. Not undoable.
    pub fn update_text_height(&mut self, index: usize, height: f64) -> bool {
        if !height.is_finite() {
            return false;
        }
        let Some(text) = self.texts.get_mut(index) else {
            return false;
        };
        text.height = height.max(MIN_TEXT_HEIGHT);
        self.touch();
        true
    }

    pub fn update_text_style(&mut self, index: usize, style: TextStyle) -> bool {
        if index >= self.texts.len() {
            return false;
        }
        self.record(ActionType::UpdateText);
        let text = &mut self.texts[index];
        if let Some(font) = style.font {
            text.font = font;
        }
        if let Some(color) = style.color {
            text.color = color;
        }
        if let Some(extrusion) = style.extrusion.filter(|e| e.is_finite()) {
            text.extrusion = extrusion.max(MIN_TEXT_EXTRUSION);
        }
        self.sync();
        true
    }

    /// Decode an uploaded image, add it flush on the face and select it.
    pub fn upload_image(&mut self, data_url: &str) -> DesignerResult<String> {
        let decoded = match decode_data_url(data_url) {
            Ok(decoded) => decoded,
            Err(e) => return Err(self.reject(e)),
        };

        self.record(ActionType::UploadImage);
        let id = self.ids.next_id(ElementKind::Image);
        self.images.push(ImageElement {
            id: id.clone(),
            url: Arc::from(data_url),
            position: [0.0, 0.0, self.z_offset()],
            size: decoded.scene_size(),
            rotation: 0.0,
            width: decoded.width,
            height: decoded.height,
        });
        self.selection = Selection::Image(id.clone());
        self.sync();
        tracing::debug!("Uploaded image {} ({}x{})", id, decoded.width, decoded.height);
        Ok(id)
    }

    /// Move an image in the plane of the face. The depth is always the
    /// surface offset, whatever `position[2]` says.
    pub fn update_image_position(&mut self, index: usize, position: Vec3) -> bool {
        if index >= self.images.len() || !all_finite(&position[..2]) {
            tracing::debug!("Ignoring image move at {}", index);
            return false;
        }
        self.record(ActionType::MoveImage);
        let z = self.z_offset();
        self.images[index].position = [position[0], position[1], z];
        self.sync();
        true
    }

    pub fn update_image_rotation(&mut self, index: usize, rotation: f64) -> bool {
        if index >= self.images.len() || !rotation.is_finite() {
            return false;
        }
        self.record(ActionType::RotateImage);
        self.images[index].rotation = rotation;
        self.sync();
        true
    }

    /// Resize an image, each side at least [`MIN_IMAGE_SIZE`]. Not undoable.
    pub fn update_image_size(&mut self, index: usize, size: [f64; 2]) -> bool {
        if !all_finite(&size) {
            return false;
        }
        let Some(image) = self.images.get_mut(index) else {
            return false;
        };
        image.size = [size[0].max(MIN_IMAGE_SIZE), size[1].max(MIN_IMAGE_SIZE)];
        self.touch();
        true
    }

    /// Delete the selected text or image and leave Remove mode.
    pub fn remove_selected(&mut self) -> bool {
        let target = match &self.selection {
            Selection::None => return false,
            Selection::Text(_) => self.selected_text_index().map(|i| (ElementKind::Text, i)),
            Selection::Image(_) => self.selected_image_index().map(|i| (ElementKind::Image, i)),
        };
        let Some((kind, index)) = target else {
            self.selection = Selection::None;
            return false;
        };

        self.record(ActionType::RemoveElement);
        let removed = match kind {
            ElementKind::Image => self.images.remove(index).id,
            _ => self.texts.remove(index).id,
        };
        self.selection = Selection::None;
        self.modes.exit_remove();
        self.sync();
        tracing::debug!("Removed {}", removed);
        true
    }
}
