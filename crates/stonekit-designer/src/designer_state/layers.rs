//! Layer order and visibility.

use super::DesignerState;
use crate::layers::LayerRegistry;

impl DesignerState {
    pub fn layers(&self) -> &LayerRegistry {
        &self.layers
    }

    /// Apply the full layer order produced by a drag.
    pub fn reorder_layers<S: AsRef<str>>(&mut self, sequence: &[S]) {
        self.layers.reorder(sequence);
        self.touch();
    }

    pub fn toggle_layer_visibility(&mut self, layer_id: &str) -> Option<bool> {
        let visible = self.layers.toggle_visibility(layer_id)?;
        tracing::debug!("Layer {} visible: {}", layer_id, visible);
        Some(visible)
    }

    pub fn is_layer_visible(&self, layer_id: &str) -> bool {
        self.layers.is_visible(layer_id)
    }
}
