//! Element and layer selection.

use super::DesignerState;
use crate::layers::{layer_id, LayerKind};

/// The selected element, by id
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Text(String),
    Image(String),
}

impl Selection {
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    pub fn element_id(&self) -> Option<&str> {
        match self {
            Selection::None => None,
            Selection::Text(id) | Selection::Image(id) => Some(id),
        }
    }

    pub fn layer_id(&self) -> Option<String> {
        match self {
            Selection::None => None,
            Selection::Text(id) => Some(layer_id(LayerKind::Text, id)),
            Selection::Image(id) => Some(layer_id(LayerKind::Image, id)),
        }
    }
}

impl DesignerState {
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_layer_id(&self) -> Option<String> {
        self.selection.layer_id()
    }

    pub fn selected_text_index(&self) -> Option<usize> {
        match &self.selection {
            Selection::Text(id) => self.texts.iter().position(|t| &t.id == id),
            _ => None,
        }
    }

    pub fn selected_image_index(&self) -> Option<usize> {
        match &self.selection {
            Selection::Image(id) => self.images.iter().position(|i| &i.id == id),
            _ => None,
        }
    }

    /// Select the element behind `layer_id`. The texture layer selects no
    /// element. Unknown ids are ignored and return `false`.
    pub fn select_layer(&mut self, layer_id: &str) -> bool {
        let Some(layer) = self.layers.resolve(layer_id) else {
            tracing::debug!("Select on unknown layer {}", layer_id);
            return false;
        };
        self.selection = match layer.kind {
            LayerKind::Texture => Selection::None,
            LayerKind::Text => Selection::Text(layer.element_id.clone()),
            LayerKind::Image => Selection::Image(layer.element_id.clone()),
        };
        true
    }

    pub fn select_text(&mut self, index: usize) -> bool {
        let Some(text) = self.texts.get(index) else {
            return false;
        };
        self.selection = Selection::Text(text.id.clone());
        true
    }

    pub fn select_image(&mut self, index: usize) -> bool {
        let Some(image) = self.images.get(index) else {
            return false;
        };
        self.selection = Selection::Image(image.id.clone());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }
}
