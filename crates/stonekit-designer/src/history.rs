//! Linear undo/redo over snapshots of the element collections.
//!
//! Every mutation of texts or images is preceded by [`HistoryEngine::snapshot`],
//! which captures the collections as they were and invalidates redo. There
//! is no branching: once something new is recorded after an undo, the undone
//! states are gone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{ImageElement, TextElement};

/// The kind of change a snapshot was taken for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    AddText,
    UpdateText,
    MoveText,
    UploadImage,
    MoveImage,
    RotateImage,
    RemoveElement,
    Paste,
    /// Live state parked on the redo stack by an undo.
    Undo,
    /// Live state parked on the undo stack by a redo.
    Redo,
}

impl ActionType {
    pub fn label(&self) -> &'static str {
        match self {
            ActionType::AddText => "add_text",
            ActionType::UpdateText => "update_text",
            ActionType::MoveText => "move_text",
            ActionType::UploadImage => "upload_image",
            ActionType::MoveImage => "move_image",
            ActionType::RotateImage => "rotate_image",
            ActionType::RemoveElement => "remove_element",
            ActionType::Paste => "paste",
            ActionType::Undo => "undo",
            ActionType::Redo => "redo",
        }
    }

    fn noun(&self) -> &'static str {
        match self {
            ActionType::AddText => "text addition",
            ActionType::UpdateText => "text edit",
            ActionType::MoveText => "text move",
            ActionType::UploadImage => "image upload",
            ActionType::MoveImage => "image move",
            ActionType::RotateImage => "image rotation",
            ActionType::RemoveElement => "element removal",
            ActionType::Paste => "paste",
            ActionType::Undo => "undo",
            ActionType::Redo => "redo",
        }
    }

    /// Confirmation shown after undoing this action.
    pub fn undo_message(&self) -> String {
        format!("Undid {}", self.noun())
    }

    /// Confirmation shown after redoing this action.
    pub fn redo_message(&self) -> String {
        format!("Redid {}", self.noun())
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Copy of the texts and images at one point in time
///
/// Image payloads are shared with the live elements, everything else is
/// owned.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySnapshot {
    pub texts: Vec<TextElement>,
    pub images: Vec<ImageElement>,
    pub action: ActionType,
    /// For entries parked by an undo or redo, the user action being
    /// stepped over.
    pub reverts: Option<ActionType>,
    pub timestamp: DateTime<Utc>,
}

impl HistorySnapshot {
    pub fn capture(action: ActionType, texts: &[TextElement], images: &[ImageElement]) -> Self {
        Self {
            texts: texts.to_vec(),
            images: images.to_vec(),
            action,
            reverts: None,
            timestamp: Utc::now(),
        }
    }

    fn parked(
        tag: ActionType,
        reverts: ActionType,
        texts: &[TextElement],
        images: &[ImageElement],
    ) -> Self {
        Self {
            reverts: Some(reverts),
            ..Self::capture(tag, texts, images)
        }
    }

    /// The user action this entry is about, looking through undo/redo tags.
    pub fn subject(&self) -> ActionType {
        self.reverts.unwrap_or(self.action)
    }
}

/// Undo and redo stacks
#[derive(Debug, Clone)]
pub struct HistoryEngine {
    undo_stack: Vec<HistorySnapshot>,
    redo_stack: Vec<HistorySnapshot>,
    max_depth: Option<usize>,
}

impl Default for HistoryEngine {
    fn default() -> Self {
        Self::new(None)
    }
}

impl HistoryEngine {
    /// `None` keeps every step. A cap below 1 is raised to 1.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.map(|depth| depth.max(1)),
        }
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    fn enforce_depth(&mut self) {
        if let Some(max) = self.max_depth {
            if self.undo_stack.len() > max {
                let excess = self.undo_stack.len() - max;
                self.undo_stack.drain(..excess);
            }
        }
    }

    /// Record the state before an `action` is applied.
    pub fn snapshot(&mut self, action: ActionType, texts: &[TextElement], images: &[ImageElement]) {
        self.undo_stack
            .push(HistorySnapshot::capture(action, texts, images));
        self.redo_stack.clear();
        self.enforce_depth();
        tracing::debug!(
            "Snapshot before {} (undo depth {})",
            action,
            self.undo_stack.len()
        );
    }

    /// Step back. `live` is parked on the redo stack and the state to
    /// restore is returned; `None` when there is nothing to undo.
    pub fn undo(
        &mut self,
        texts: &[TextElement],
        images: &[ImageElement],
    ) -> Option<HistorySnapshot> {
        let restored = self.undo_stack.pop()?;
        self.redo_stack.push(HistorySnapshot::parked(
            ActionType::Undo,
            restored.subject(),
            texts,
            images,
        ));
        tracing::debug!("Undo {}", restored.action);
        Some(restored)
    }

    /// Step forward again after an undo.
    pub fn redo(
        &mut self,
        texts: &[TextElement],
        images: &[ImageElement],
    ) -> Option<HistorySnapshot> {
        let restored = self.redo_stack.pop()?;
        self.undo_stack.push(HistorySnapshot::parked(
            ActionType::Redo,
            restored.subject(),
            texts,
            images,
        ));
        self.enforce_depth();
        tracing::debug!("Redo {}", restored.action);
        Some(restored)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Action of the entry the next undo would restore.
    pub fn peek_undo(&self) -> Option<ActionType> {
        self.undo_stack.last().map(|s| s.action)
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_is_bounded() {
        let mut history = HistoryEngine::new(Some(3));
        for _ in 0..5 {
            history.snapshot(ActionType::AddText, &[], &[]);
        }
        assert_eq!(history.undo_depth(), 3);
    }

    #[test]
    fn test_unbounded_by_default() {
        let mut history = HistoryEngine::default();
        for _ in 0..200 {
            history.snapshot(ActionType::MoveText, &[], &[]);
        }
        assert_eq!(history.max_depth(), None);
        assert_eq!(history.undo_depth(), 200);
    }

    #[test]
    fn test_labels_and_messages() {
        assert_eq!(ActionType::AddText.label(), "add_text");
        assert_eq!(ActionType::AddText.undo_message(), "Undid text addition");
        assert_eq!(ActionType::RotateImage.redo_message(), "Redid image rotation");
        let json = serde_json::to_string(&ActionType::RemoveElement).expect("serialize");
        assert_eq!(json, "\"remove_element\"");
    }

    #[test]
    fn test_undo_parks_live_state() {
        let mut history = HistoryEngine::default();
        assert!(history.undo(&[], &[]).is_none());

        history.snapshot(ActionType::UploadImage, &[], &[]);
        let restored = history.undo(&[], &[]).expect("entry");
        assert_eq!(restored.action, ActionType::UploadImage);
        assert!(history.can_redo());
        assert!(!history.can_undo());

        history.snapshot(ActionType::AddText, &[], &[]);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_redo_remembers_subject() {
        let mut history = HistoryEngine::default();
        history.snapshot(ActionType::MoveImage, &[], &[]);
        history.undo(&[], &[]).expect("undo");

        let redone = history.redo(&[], &[]).expect("redo");
        assert_eq!(redone.action, ActionType::Undo);
        assert_eq!(redone.subject(), ActionType::MoveImage);

        let undone = history.undo(&[], &[]).expect("undo again");
        assert_eq!(undone.action, ActionType::Redo);
        assert_eq!(undone.subject(), ActionType::MoveImage);
    }
}
