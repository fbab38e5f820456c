//! Editor key bindings.
//!
//! Bindings are only live while a [`KeyboardScope`] exists. The scope holds
//! an input subscription on the application event bus and releases it when
//! dropped, so an editor that is torn down stops reacting to keys.

use parking_lot::Mutex;
use std::sync::Arc;
use stonekit_core::{
    AppEvent, EventBus, EventCategory, EventFilter, InputEvent, Key, KeyChord, Subscription,
};

use crate::designer_state::DesignerState;

/// Editor action bound to a key chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    Deselect,
    Undo,
    Redo,
    Copy,
    Paste,
}

/// Look up the command bound to `chord`.
///
/// Ctrl and Cmd are interchangeable.
pub fn resolve(chord: &KeyChord) -> Option<KeyCommand> {
    if chord.key == Key::Escape && !chord.has_command_modifier() {
        return Some(KeyCommand::Deselect);
    }
    if !chord.has_command_modifier() {
        return None;
    }
    match (&chord.key, chord.shift) {
        (Key::Char('z'), false) => Some(KeyCommand::Undo),
        (Key::Char('z'), true) | (Key::Char('y'), _) => Some(KeyCommand::Redo),
        (Key::Char('c'), false) => Some(KeyCommand::Copy),
        (Key::Char('v'), false) => Some(KeyCommand::Paste),
        _ => None,
    }
}

/// Routes key input from the event bus to one editor while alive
#[must_use = "key bindings are released as soon as the scope is dropped"]
pub struct KeyboardScope {
    subscription: Subscription,
}

impl KeyboardScope {
    pub fn attach(bus: &EventBus, editor: Arc<Mutex<DesignerState>>) -> Self {
        let subscription = bus.subscribe_scoped(
            EventFilter::Categories(vec![EventCategory::Input]),
            move |event| {
                let AppEvent::Input(InputEvent::Key(chord)) = event else {
                    return;
                };
                if let Some(command) = resolve(&chord) {
                    tracing::debug!("{} -> {:?}", chord, command);
                    editor.lock().apply_key_command(command);
                }
            },
        );
        tracing::debug!("Keyboard scope {} attached", subscription.id());
        Self { subscription }
    }
}

impl Drop for KeyboardScope {
    fn drop(&mut self) {
        tracing::debug!("Keyboard scope {} released", self.subscription.id());
    }
}

impl std::fmt::Debug for KeyboardScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyboardScope")
            .field("subscription", &self.subscription.id())
            .finish()
    }
}
