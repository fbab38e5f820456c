//! Pointer interaction modes.
//!
//! Move and Rotate share one slot, so at most one of them is on. Remove is
//! a separate flag: turning it on clears the slot, and turning Move or
//! Rotate on leaves Remove where it was. [`ModeController::mode`] reports
//! Remove ahead of the slot.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Idle,
    Move,
    Rotate,
    Remove,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Mode::Idle => "idle",
            Mode::Move => "move",
            Mode::Rotate => "rotate",
            Mode::Remove => "remove",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Manipulation {
    #[default]
    None,
    Move,
    Rotate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeController {
    manipulation: Manipulation,
    remove: bool,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        if self.remove {
            return Mode::Remove;
        }
        match self.manipulation {
            Manipulation::None => Mode::Idle,
            Manipulation::Move => Mode::Move,
            Manipulation::Rotate => Mode::Rotate,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.manipulation == Manipulation::Move
    }

    pub fn is_rotating(&self) -> bool {
        self.manipulation == Manipulation::Rotate
    }

    pub fn is_removing(&self) -> bool {
        self.remove
    }

    pub fn toggle_move(&mut self) -> Mode {
        self.manipulation = match self.manipulation {
            Manipulation::Move => Manipulation::None,
            _ => Manipulation::Move,
        };
        self.mode()
    }

    pub fn toggle_rotate(&mut self) -> Mode {
        self.manipulation = match self.manipulation {
            Manipulation::Rotate => Manipulation::None,
            _ => Manipulation::Rotate,
        };
        self.mode()
    }

    pub fn toggle_remove(&mut self) -> Mode {
        self.remove = !self.remove;
        if self.remove {
            self.manipulation = Manipulation::None;
        }
        self.mode()
    }

    pub fn enter_move(&mut self) {
        self.manipulation = Manipulation::Move;
    }

    pub(crate) fn exit_remove(&mut self) {
        self.remove = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_and_rotate_exclusive() {
        let mut modes = ModeController::new();
        assert_eq!(modes.toggle_move(), Mode::Move);
        assert_eq!(modes.toggle_rotate(), Mode::Rotate);
        assert!(!modes.is_moving());
        assert_eq!(modes.toggle_rotate(), Mode::Idle);
    }

    #[test]
    fn test_remove_clears_manipulation() {
        let mut modes = ModeController::new();
        modes.toggle_rotate();
        assert_eq!(modes.toggle_remove(), Mode::Remove);
        assert!(!modes.is_rotating());
        assert_eq!(modes.toggle_remove(), Mode::Idle);
    }

    #[test]
    fn test_remove_outranks_move() {
        let mut modes = ModeController::new();
        modes.toggle_remove();
        modes.toggle_move();
        assert_eq!(modes.mode(), Mode::Remove);
        assert!(modes.is_moving());
    }
}
