//! Event type definitions for the event bus.
//!
//! This module defines all application events organized by category.
//! Events are designed to be cloneable and serializable for logging/replay.

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Root event enum for all application events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    /// Keyboard and pointer input routed to the active view
    Input(InputEvent),
    /// Design document lifecycle
    Design(DesignEvent),
    /// User-facing notifications
    Message(Message),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Input(_) => EventCategory::Input,
            AppEvent::Design(_) => EventCategory::Design,
            AppEvent::Message(_) => EventCategory::Message,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Input(e) => e.description(),
            AppEvent::Design(e) => e.description(),
            AppEvent::Message(m) => m.to_string(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Input events.
    Input,
    /// Design document events.
    Design,
    /// Notification events.
    Message,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Input => write!(f, "Input"),
            EventCategory::Design => write!(f, "Design"),
            EventCategory::Message => write!(f, "Message"),
        }
    }
}

/// A physical key, normalized
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Delete,
    /// A printable character, lowercased.
    Char(char),
    /// Anything else, by name.
    Named(String),
}

impl Key {
    /// Build a key from a printable character. Letters are lowercased so
    /// that `Shift+Z` and `z` resolve to the same key.
    pub fn char(c: char) -> Self {
        Key::Char(c.to_ascii_lowercase())
    }
}

/// A key press together with its modifier state
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyChord {
    pub key: Key,
    pub ctrl: bool,
    /// Cmd on macOS.
    pub meta: bool,
    pub shift: bool,
}

impl KeyChord {
    /// A key with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    /// A key with Ctrl held.
    pub fn ctrl(key: Key) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(key)
        }
    }

    /// A key with Cmd held.
    pub fn meta(key: Key) -> Self {
        Self {
            meta: true,
            ..Self::plain(key)
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Ctrl on Linux/Windows or Cmd on macOS.
    pub fn has_command_modifier(&self) -> bool {
        self.ctrl || self.meta
    }
}

impl std::fmt::Display for KeyChord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.meta {
            write!(f, "Cmd+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        match &self.key {
            Key::Escape => write!(f, "Escape"),
            Key::Delete => write!(f, "Delete"),
            Key::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            Key::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Input events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InputEvent {
    /// A key was pressed.
    Key(KeyChord),
}

impl InputEvent {
    fn description(&self) -> String {
        match self {
            InputEvent::Key(chord) => format!("Key: {}", chord),
        }
    }
}

/// Design document lifecycle events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DesignEvent {
    /// Design written to the document store.
    Saved {
        /// Opaque store handle.
        handle: String,
    },
    /// Design restored from the document store.
    Loaded {
        /// Opaque store handle.
        handle: String,
        /// Number of images admitted after verification.
        images: usize,
        /// Number of images dropped as unreachable.
        dropped: usize,
    },
    /// Editor state was modified.
    Modified,
}

impl DesignEvent {
    fn description(&self) -> String {
        match self {
            DesignEvent::Saved { handle } => format!("Design saved: {}", handle),
            DesignEvent::Loaded {
                handle,
                images,
                dropped,
            } => format!(
                "Design loaded: {} ({} images, {} dropped)",
                handle, images, dropped
            ),
            DesignEvent::Modified => "Design modified".to_string(),
        }
    }
}
