//! Conversion to and from design documents.

use std::collections::HashSet;
use std::path::Path;
use stonekit_core::Message;
use stonekit_settings::EditorSettings;

use super::{DesignerState, Selection};
use crate::model::{ElementKind, IdGenerator};
use crate::modes::ModeController;
use crate::persistence::LoadedDesign;
use crate::serialization::{DesignDocument, PersistedState};

/// Give every element after the first holder of an id a fresh one.
fn rename_duplicate(
    seen: &mut HashSet<String>,
    ids: &mut IdGenerator,
    kind: ElementKind,
    id: &mut String,
) {
    if !seen.insert(id.clone()) {
        let fresh = ids.next_id(kind);
        tracing::warn!("Duplicate element id {}, renamed to {}", id, fresh);
        seen.insert(fresh.clone());
        *id = fresh;
    }
}

impl DesignerState {
    /// Hydrate an editor session from a stored document.
    pub fn from_document(document: DesignDocument, settings: &EditorSettings) -> Self {
        let mut state = Self::with_settings(settings);
        state.load_document(document);
        state
    }

    /// Hydrate an editor session from a verified load. Every dropped asset
    /// is reported as a warning message.
    pub fn from_loaded(loaded: LoadedDesign, settings: &EditorSettings) -> Self {
        let LoadedDesign {
            document, warnings, ..
        } = loaded;
        let mut state = Self::from_document(document, settings);
        for warning in warnings {
            state.notify(Message::warning(warning.to_string()));
        }
        state
    }

    /// Replace the whole design. History, selection, modes and clipboard
    /// start over.
    pub fn load_document(&mut self, document: DesignDocument) {
        let PersistedState {
            selected_object,
            selected_texture,
            stone_dimensions,
            texts,
            uploaded_images,
            frames,
        } = document.state;

        self.object_type = selected_object;
        self.texture = if selected_object.accepts_texture(&selected_texture) {
            selected_texture
        } else {
            let text = format!(
                "Texture {} not offered for {}, using {}",
                selected_texture,
                selected_object,
                selected_object.default_texture()
            );
            tracing::warn!("{}", text);
            self.notify(Message::warning(text));
            selected_object.default_texture().to_string()
        };
        self.dimensions = stone_dimensions;
        self.texts = texts;
        self.images = uploaded_images;
        self.frames = frames;
        self.recompute_image_depth();

        for id in self
            .texts
            .iter()
            .map(|t| &t.id)
            .chain(self.images.iter().map(|i| &i.id))
            .chain(self.frames.iter().map(|f| &f.id))
        {
            self.ids.observe(id);
        }

        let mut seen = HashSet::new();
        for text in &mut self.texts {
            rename_duplicate(&mut seen, &mut self.ids, ElementKind::Text, &mut text.id);
        }
        for image in &mut self.images {
            rename_duplicate(&mut seen, &mut self.ids, ElementKind::Image, &mut image.id);
        }
        for frame in &mut self.frames {
            rename_duplicate(&mut seen, &mut self.ids, ElementKind::Frame, &mut frame.id);
        }

        self.history.clear();
        self.selection = Selection::None;
        self.modes = ModeController::new();
        self.clipboard = None;
        self.layers.initialize(&self.texts, &self.images);
        self.is_modified = false;
        tracing::debug!(
            "Loaded design: {} texts, {} images, {} frames",
            self.texts.len(),
            self.images.len(),
            self.frames.len()
        );
    }

    pub fn to_document(&self) -> DesignDocument {
        DesignDocument::new(PersistedState {
            selected_object: self.object_type,
            selected_texture: self.texture.clone(),
            stone_dimensions: self.dimensions,
            texts: self.texts.clone(),
            uploaded_images: self.images.clone(),
            frames: self.frames.clone(),
        })
    }

    /// Write the design as JSON to `path` and mark it saved.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        self.to_document().save_to_file(&path)?;
        self.is_modified = false;
        tracing::info!("Saved design to {}", path.as_ref().display());
        Ok(())
    }

    /// Mark the design saved after it was written elsewhere.
    pub fn mark_saved(&mut self) {
        self.is_modified = false;
    }
}
