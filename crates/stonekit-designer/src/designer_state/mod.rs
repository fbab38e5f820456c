//! Designer state: the editor session aggregate.
//!
//! Owns the stone parameters, the element collections, layers, selection,
//! interaction mode, history and clipboard, and is mutated only through its
//! methods. The impl is split by concern:
//! - `elements`: text and image operations
//! - `frames`: decorative frames
//! - `clipboard`: copy and paste
//! - `surface`: object type, texture and dimensions
//! - `selection`: element and layer selection
//! - `layers`: layer order and visibility
//! - `history`: undo/redo
//! - `input`: modes, pointer gestures and key commands
//! - `file_io`: document conversion
//!
//! Every change to texts or images goes through `record`, which snapshots
//! the collections first, and is followed by `sync`, which brings layers
//! and selection back in line with the collections. Failed operations leave
//! the state untouched and queue a user-facing [`Message`].

mod clipboard;
mod elements;
mod file_io;
mod frames;
mod history;
mod input;
mod layers;
mod selection;
mod surface;

pub use clipboard::ClipboardItem;
pub use elements::TextStyle;
pub use selection::Selection;

use stonekit_core::{AppEvent, DesignEvent, EventBus, Message};
use stonekit_settings::EditorSettings;

use crate::dimensions::StoneDimensions;
use crate::error::DesignerError;
use crate::geometry::GeometryCache;
use crate::history::{ActionType, HistoryEngine};
use crate::layers::LayerRegistry;
use crate::model::{FrameElement, IdGenerator, ImageElement, TextElement};
use crate::modes::{Mode, ModeController};
use crate::stone::ObjectType;

#[derive(Debug, Clone)]
pub struct DesignerState {
    object_type: ObjectType,
    texture: String,
    dimensions: StoneDimensions,
    texts: Vec<TextElement>,
    images: Vec<ImageElement>,
    frames: Vec<FrameElement>,
    layers: LayerRegistry,
    selection: Selection,
    modes: ModeController,
    history: HistoryEngine,
    clipboard: Option<ClipboardItem>,
    ids: IdGenerator,
    geometry: GeometryCache,
    settings: EditorSettings,
    messages: Vec<Message>,
    is_modified: bool,
    unannounced_change: bool,
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignerState {
    /// An empty gravestone design with default settings.
    pub fn new() -> Self {
        Self::with_settings(&EditorSettings::default())
    }

    pub fn with_settings(settings: &EditorSettings) -> Self {
        let object_type = ObjectType::default();
        let mut state = Self {
            object_type,
            texture: object_type.default_texture().to_string(),
            dimensions: StoneDimensions::default(),
            texts: Vec::new(),
            images: Vec::new(),
            frames: Vec::new(),
            layers: LayerRegistry::new(),
            selection: Selection::None,
            modes: ModeController::new(),
            history: HistoryEngine::new(settings.history_depth),
            clipboard: None,
            ids: IdGenerator::new(),
            geometry: GeometryCache::new(),
            settings: settings.clone(),
            messages: Vec::new(),
            is_modified: false,
            unannounced_change: false,
        };
        state.layers.initialize(&state.texts, &state.images);
        state
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn texture(&self) -> &str {
        &self.texture
    }

    pub fn dimensions(&self) -> StoneDimensions {
        self.dimensions
    }

    pub fn texts(&self) -> &[TextElement] {
        &self.texts
    }

    pub fn images(&self) -> &[ImageElement] {
        &self.images
    }

    pub fn frames(&self) -> &[FrameElement] {
        &self.frames
    }

    pub fn mode(&self) -> Mode {
        self.modes.mode()
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Whether there are changes since the last save or load.
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Messages queued for the user since the last call.
    pub fn take_messages(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }

    pub fn pending_messages(&self) -> &[Message] {
        &self.messages
    }

    /// Publish queued messages, plus a `Modified` event if the design
    /// changed since the last publish. Returns the number of events sent.
    pub fn publish_to(&mut self, bus: &EventBus) -> usize {
        let mut sent = 0;
        if std::mem::take(&mut self.unannounced_change) {
            let _ = bus.publish(AppEvent::Design(DesignEvent::Modified));
            sent += 1;
        }
        for message in self.take_messages() {
            let _ = bus.publish(AppEvent::Message(message));
            sent += 1;
        }
        sent
    }

    /// Snapshot texts and images before `action` mutates them.
    fn record(&mut self, action: ActionType) {
        self.history.snapshot(action, &self.texts, &self.images);
        self.touch();
    }

    fn touch(&mut self) {
        self.is_modified = true;
        self.unannounced_change = true;
    }

    /// Reconcile layers and drop a selection whose element is gone.
    fn sync(&mut self) {
        self.layers.reconcile(&self.texts, &self.images);
        let live = match &self.selection {
            Selection::None => true,
            Selection::Text(id) => self.texts.iter().any(|t| &t.id == id),
            Selection::Image(id) => self.images.iter().any(|i| &i.id == id),
        };
        if !live {
            self.selection = Selection::None;
        }
    }

    fn notify(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Report a failed operation and hand the error back to the caller.
    fn reject(&mut self, err: DesignerError) -> DesignerError {
        tracing::warn!("Rejected: {}", err);
        let message = match &err {
            DesignerError::Validation(_) => Message::warning(err.to_string()),
            DesignerError::InvalidImageFormat(_) => Message::error(err.to_string()),
        };
        self.notify(message);
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextConfig;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use stonekit_core::{EventCategory, EventFilter};

    #[test]
    fn test_new_state() {
        let state = DesignerState::new();
        assert_eq!(state.object_type(), ObjectType::Gravestone);
        assert_eq!(state.texture(), "marble");
        assert_eq!(state.layers().len(), 1);
        assert_eq!(state.mode(), Mode::Idle);
        assert!(!state.is_modified());
    }

    #[test]
    fn test_failures_queue_messages() {
        let mut state = DesignerState::new();
        assert!(state.add_text(TextConfig::new("   ")).is_err());
        assert!(state.texts().is_empty());
        assert!(!state.can_undo());

        let messages = state.take_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].level, stonekit_core::MessageLevel::Warning);
        assert!(state.take_messages().is_empty());
    }

    #[test]
    fn test_publish_to_bus() {
        let bus = EventBus::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let _sub = bus.subscribe_scoped(
            EventFilter::Categories(vec![EventCategory::Design, EventCategory::Message]),
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            },
        );

        let mut state = DesignerState::new();
        state.add_text(TextConfig::new("RIP")).expect("add");
        state.undo();
        // Modified, plus the undo confirmation.
        assert_eq!(state.publish_to(&bus), 2);
        assert_eq!(seen.load(Ordering::SeqCst), 2);
        assert_eq!(state.publish_to(&bus), 0);
    }
}
