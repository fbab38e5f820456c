//! Modes, pointer gestures and key commands.

use stonekit_core::KeyChord;

use super::{DesignerState, Selection};
use crate::keyboard::{self, KeyCommand};
use crate::layers::LayerKind;
use crate::model::{offset, Vec3};
use crate::modes::Mode;

impl DesignerState {
    pub fn toggle_move(&mut self) -> Mode {
        self.modes.toggle_move()
    }

    pub fn toggle_rotate(&mut self) -> Mode {
        self.modes.toggle_rotate()
    }

    pub fn toggle_remove(&mut self) -> Mode {
        self.modes.toggle_remove()
    }

    /// The remove button: enters Remove, and once in Remove deletes the
    /// selection, or leaves Remove if nothing is selected.
    pub fn remove_action(&mut self) -> Mode {
        if !self.modes.is_removing() {
            return self.modes.toggle_remove();
        }
        if self.selection.is_none() {
            self.modes.exit_remove();
        } else {
            self.remove_selected();
        }
        self.mode()
    }

    /// Drag the selected element by `delta`. Only in Move mode.
    pub fn drag_selected(&mut self, delta: Vec3) -> bool {
        if !self.modes.is_moving() || self.modes.is_removing() {
            return false;
        }
        if let Some(index) = self.selected_text_index() {
            let position = offset(self.texts[index].position, delta);
            return self.update_text_position(index, position);
        }
        if let Some(index) = self.selected_image_index() {
            let position = offset(self.images[index].position, delta);
            return self.update_image_position(index, position);
        }
        false
    }

    /// Rotate the selected image by `delta` radians. Only in Rotate mode.
    pub fn rotate_selected(&mut self, delta: f64) -> bool {
        if !self.modes.is_rotating() || self.modes.is_removing() {
            return false;
        }
        let Some(index) = self.selected_image_index() else {
            return false;
        };
        let rotation = self.images[index].rotation + delta;
        self.update_image_rotation(index, rotation)
    }

    /// Click on a layer: selects it, or deletes its element in Remove mode.
    pub fn click_layer(&mut self, layer_id: &str) -> bool {
        if !self.select_layer(layer_id) {
            return false;
        }
        let is_element = self
            .layers
            .resolve(layer_id)
            .is_some_and(|l| l.kind != LayerKind::Texture);
        if self.modes.is_removing() && is_element {
            return self.remove_selected();
        }
        true
    }

    /// Resolve and apply a key chord. Returns the command it was bound to.
    pub fn handle_key(&mut self, chord: &KeyChord) -> Option<KeyCommand> {
        let command = keyboard::resolve(chord)?;
        self.apply_key_command(command);
        Some(command)
    }

    pub fn apply_key_command(&mut self, command: KeyCommand) {
        match command {
            KeyCommand::Deselect => self.selection = Selection::None,
            KeyCommand::Undo => {
                self.undo();
            }
            KeyCommand::Redo => {
                self.redo();
            }
            KeyCommand::Copy => {
                self.copy_selected();
            }
            KeyCommand::Paste => {
                self.paste();
            }
        }
    }
}
