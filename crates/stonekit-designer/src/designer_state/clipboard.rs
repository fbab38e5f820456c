//! Copy and paste.

use super::{DesignerState, Selection};
use crate::history::ActionType;
use crate::model::{offset, ElementKind, ImageElement, TextElement};

/// An element captured by value
#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardItem {
    Text(TextElement),
    Image(ImageElement),
}

impl ClipboardItem {
    pub fn kind(&self) -> ElementKind {
        match self {
            ClipboardItem::Text(_) => ElementKind::Text,
            ClipboardItem::Image(_) => ElementKind::Image,
        }
    }
}

impl DesignerState {
    pub fn clipboard(&self) -> Option<&ClipboardItem> {
        self.clipboard.as_ref()
    }

    /// Capture the selected element. Returns `false` with nothing selected.
    pub fn copy_selected(&mut self) -> bool {
        let item = match &self.selection {
            Selection::None => None,
            Selection::Text(_) => self
                .selected_text_index()
                .map(|i| ClipboardItem::Text(self.texts[i].clone())),
            Selection::Image(_) => self
                .selected_image_index()
                .map(|i| ClipboardItem::Image(self.images[i].clone())),
        };
        match item {
            Some(item) => {
                tracing::debug!("Copied {:?}", item.kind());
                self.clipboard = Some(item);
                true
            }
            None => false,
        }
    }

    /// Append a copy of the clipboard element, shifted by the paste offset
    /// and with a new id. The selection is left alone.
    pub fn paste(&mut self) -> Option<String> {
        let item = self.clipboard.clone()?;
        self.record(ActionType::Paste);

        let delta = self.settings.paste_offset;
        let id = self.ids.next_id(item.kind());
        match item {
            ClipboardItem::Text(mut text) => {
                text.id = id.clone();
                text.position = offset(text.position, delta);
                self.texts.push(text);
            }
            ClipboardItem::Image(mut image) => {
                image.id = id.clone();
                image.position = offset(image.position, delta);
                image.position[2] = self.z_offset();
                self.images.push(image);
            }
        }
        self.sync();
        tracing::debug!("Pasted {}", id);
        Some(id)
    }
}
