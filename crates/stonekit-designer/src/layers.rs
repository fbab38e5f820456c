//! Layer registry.
//!
//! Layers are the addressable units of the composition: the stone texture
//! plus one layer per image and per text. Their order is the render and
//! hit-test z-order and is independent of the order elements were added.
//!
//! The registry does not observe the element collections. The editor calls
//! [`LayerRegistry::reconcile`] after every change so that each layer keeps
//! exactly one live backing element.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::model::{ImageElement, TextElement};

/// Element id of the fixed texture pseudo-layer.
pub const TEXTURE_ELEMENT_ID: &str = "stone";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Texture,
    Image,
    Text,
}

impl LayerKind {
    pub fn name(&self) -> &'static str {
        match self {
            LayerKind::Texture => "texture",
            LayerKind::Image => "image",
            LayerKind::Text => "text",
        }
    }
}

/// Reference from a layer to the element that backs it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerRef {
    /// `"{kind}-{element_id}"`
    pub id: String,
    pub kind: LayerKind,
    pub element_id: String,
}

impl LayerRef {
    pub fn new(kind: LayerKind, element_id: impl Into<String>) -> Self {
        let element_id = element_id.into();
        Self {
            id: layer_id(kind, &element_id),
            kind,
            element_id,
        }
    }

    pub fn texture() -> Self {
        Self::new(LayerKind::Texture, TEXTURE_ELEMENT_ID)
    }
}

pub fn layer_id(kind: LayerKind, element_id: &str) -> String {
    format!("{}-{}", kind.name(), element_id)
}

/// Ordered layers and the set of visible ones
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerRegistry {
    order: Vec<LayerRef>,
    visible: HashSet<String>,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture first, then images, then texts, each in collection order.
    /// Everything starts visible.
    pub fn initialize(&mut self, texts: &[TextElement], images: &[ImageElement]) {
        self.order.clear();
        self.visible.clear();
        self.push(LayerRef::texture());
        self.sync_new_elements(texts, images);
    }

    /// Append a layer for every element not represented yet. Existing layers
    /// keep their positions.
    pub fn sync_new_elements(&mut self, texts: &[TextElement], images: &[ImageElement]) {
        if !self.order.iter().any(|l| l.kind == LayerKind::Texture) {
            self.order.insert(0, LayerRef::texture());
            self.visible.insert(LayerRef::texture().id);
        }

        let known: HashSet<String> = self.order.iter().map(|l| l.id.clone()).collect();
        let fresh: Vec<LayerRef> = images
            .iter()
            .map(|i| LayerRef::new(LayerKind::Image, i.id.as_str()))
            .chain(
                texts
                    .iter()
                    .map(|t| LayerRef::new(LayerKind::Text, t.id.as_str())),
            )
            .filter(|l| !known.contains(&l.id))
            .collect();

        for layer in fresh {
            tracing::debug!("Adding layer {}", layer.id);
            self.push(layer);
        }
    }

    /// Drop layers whose element no longer exists.
    pub fn prune_orphans(&mut self, texts: &[TextElement], images: &[ImageElement]) {
        let live: HashSet<String> = live_ids(texts, images).collect();
        let visible = &mut self.visible;
        self.order.retain(|layer| {
            let keep = live.contains(&layer.id);
            if !keep {
                tracing::debug!("Removing orphaned layer {}", layer.id);
                visible.remove(&layer.id);
            }
            keep
        });
    }

    /// Prune, then sync.
    pub fn reconcile(&mut self, texts: &[TextElement], images: &[ImageElement]) {
        self.prune_orphans(texts, images);
        self.sync_new_elements(texts, images);
    }

    /// Replace the order with `sequence`, the full target order from a drag.
    ///
    /// Unknown and repeated ids are ignored; live layers the sequence left
    /// out keep their relative order at the end.
    pub fn reorder<S: AsRef<str>>(&mut self, sequence: &[S]) {
        let mut remaining = std::mem::take(&mut self.order);
        let mut reordered = Vec::with_capacity(remaining.len());
        for id in sequence {
            if let Some(pos) = remaining.iter().position(|l| l.id == id.as_ref()) {
                reordered.push(remaining.remove(pos));
            } else {
                tracing::debug!("Ignoring unknown layer {} in reorder", id.as_ref());
            }
        }
        reordered.append(&mut remaining);
        self.order = reordered;
    }

    /// Flip visibility. Returns the new visibility, or `None` if no such
    /// layer exists.
    pub fn toggle_visibility(&mut self, layer_id: &str) -> Option<bool> {
        self.resolve(layer_id)?;
        if self.visible.remove(layer_id) {
            Some(false)
        } else {
            self.visible.insert(layer_id.to_string());
            Some(true)
        }
    }

    pub fn is_visible(&self, layer_id: &str) -> bool {
        self.visible.contains(layer_id)
    }

    pub fn resolve(&self, layer_id: &str) -> Option<&LayerRef> {
        self.order.iter().find(|l| l.id == layer_id)
    }

    pub fn layers(&self) -> &[LayerRef] {
        &self.order
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|l| l.id.as_str())
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn push(&mut self, layer: LayerRef) {
        self.visible.insert(layer.id.clone());
        self.order.push(layer);
    }
}

fn live_ids<'a>(
    texts: &'a [TextElement],
    images: &'a [ImageElement],
) -> impl Iterator<Item = String> + 'a {
    std::iter::once(LayerRef::texture().id)
        .chain(images.iter().map(|i| layer_id(LayerKind::Image, &i.id)))
        .chain(texts.iter().map(|t| layer_id(LayerKind::Text, &t.id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TextConfig, TextElement};

    fn text(id: &str) -> TextElement {
        TextElement::from_config(
            id.to_string(),
            TextConfig::new("RIP"),
            "helvetiker",
            [0.0, 0.0, 0.31],
            false,
        )
    }

    #[test]
    fn test_initialize_texture_first() {
        let mut layers = LayerRegistry::new();
        layers.initialize(&[text("text_1"), text("text_2")], &[]);
        let ids: Vec<&str> = layers.ids().collect();
        assert_eq!(ids, vec!["texture-stone", "text-text_1", "text-text_2"]);
        assert!(ids.iter().all(|id| layers.is_visible(id)));
    }

    #[test]
    fn test_sync_appends_without_reordering() {
        let mut layers = LayerRegistry::new();
        let texts = vec![text("text_1"), text("text_2")];
        layers.initialize(&texts, &[]);
        layers.reorder(&["text-text_2", "texture-stone", "text-text_1"]);

        let texts = vec![text("text_1"), text("text_2"), text("text_3")];
        layers.sync_new_elements(&texts, &[]);
        let ids: Vec<&str> = layers.ids().collect();
        assert_eq!(
            ids,
            vec!["text-text_2", "texture-stone", "text-text_1", "text-text_3"]
        );
    }

    #[test]
    fn test_prune_removes_visibility() {
        let mut layers = LayerRegistry::new();
        layers.initialize(&[text("text_1")], &[]);
        layers.prune_orphans(&[], &[]);
        assert_eq!(layers.len(), 1);
        assert!(!layers.is_visible("text-text_1"));
        assert!(layers.resolve("texture-stone").is_some());
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let mut layers = LayerRegistry::new();
        layers.initialize(&[], &[]);
        assert_eq!(layers.toggle_visibility("text-missing"), None);
        assert_eq!(layers.toggle_visibility("texture-stone"), Some(false));
        assert_eq!(layers.toggle_visibility("texture-stone"), Some(true));
    }
}
