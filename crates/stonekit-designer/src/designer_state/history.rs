//! Undo/redo.

use stonekit_core::Message;

use super::{DesignerState, Selection};
use crate::history::HistorySnapshot;

impl DesignerState {
    /// Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo(&self.texts, &self.images) else {
            tracing::debug!("Nothing to undo");
            return false;
        };
        let message = snapshot.subject().undo_message();
        self.restore(snapshot);
        self.notify(Message::info(message));
        true
    }

    /// Returns `false` when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo(&self.texts, &self.images) else {
            tracing::debug!("Nothing to redo");
            return false;
        };
        let message = snapshot.subject().redo_message();
        self.restore(snapshot);
        self.notify(Message::info(message));
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &crate::history::HistoryEngine {
        &self.history
    }

    fn restore(&mut self, snapshot: HistorySnapshot) {
        self.texts = snapshot.texts;
        self.images = snapshot.images;
        // Thickness may have changed since the snapshot was taken.
        self.recompute_image_depth();
        self.selection = Selection::None;
        self.touch();
        self.sync();
    }
}
