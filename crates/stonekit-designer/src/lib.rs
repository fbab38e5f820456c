//! # StoneKit Designer
//!
//! The design canvas for memorial stones: place texts, images and frames on
//! a gravestone, base, urn or table sign, arrange them in layers, undo and
//! redo changes, and save and restore the result.
//!
//! ## Core Components
//!
//! ### Stone
//! - **Object types**: gravestone, base, urn and table sign, each with its
//!   own texture catalogue and dimension bounds
//! - **Dimensions**: width/height/thickness clamped to the object's bounds,
//!   plus gravestone preset sizes
//! - **Surface**: the depth that keeps images flush with the front face
//!
//! ### Elements
//! - **Texts**: extruded text with font, colour and depth
//! - **Images**: uploaded pictures, decoded to read their natural size
//! - **Frames**: circle, square, rectangle and oval outlines
//!
//! ### Editing
//! - **Layers**: z-order and visibility for the texture, images and texts
//! - **History**: snapshot-based undo/redo
//! - **Modes**: move, rotate and remove, plus scoped key bindings
//!
//! ### Persistence
//! - **Documents**: JSON design documents with defaults for missing fields
//! - **Adapter**: store-backed save/load with image asset verification
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (editor session)
//!   ├── Elements (texts, images, frames)
//!   ├── LayerRegistry (order, visibility)
//!   ├── HistoryEngine (undo/redo snapshots)
//!   └── ModeController (move/rotate/remove)
//!
//! KeyboardScope ── event bus ──> DesignerState
//!
//! PersistenceAdapter
//!   ├── DocumentStore (memory, files)
//!   └── AssetVerifier (probe + timeout)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use stonekit_designer::{DesignerState, TextConfig};
//!
//! let mut state = DesignerState::new();
//! state.add_text(TextConfig::new("In loving memory")).unwrap();
//! assert_eq!(state.texts().len(), 1);
//!
//! state.undo();
//! assert!(state.texts().is_empty());
//! ```

pub mod designer_state;
pub mod dimensions;
pub mod error;
pub mod geometry;
pub mod history;
pub mod keyboard;
pub mod layers;
pub mod model;
pub mod modes;
pub mod persistence;
pub mod serialization;
pub mod stone;

pub use designer_state::{ClipboardItem, DesignerState, Selection, TextStyle};
pub use dimensions::{Dimension, DimensionBounds, Range, SizeClass, StoneDimensions};
pub use error::{DesignerError, DesignerResult};
pub use geometry::{outline, FrameOutline, FrameShape, GeometryCache, Outline, SurfacePlacement};
pub use history::{ActionType, HistoryEngine, HistorySnapshot};
pub use keyboard::{KeyCommand, KeyboardScope};
pub use layers::{LayerKind, LayerRef, LayerRegistry};
pub use model::{
    DecodedImage, ElementKind, FrameElement, ImageElement, TextColor, TextConfig, TextElement,
    Vec3,
};
pub use modes::{Mode, ModeController};
pub use persistence::{
    AssetProbe, AssetVerifier, AssetWarning, DesignHandle, DocumentStore, FileAssetProbe,
    FileDocumentStore, LoadedDesign, MemoryDocumentStore, PersistenceAdapter, PersistenceError,
    StaticAssetProbe, WarningReason,
};
pub use serialization::{DesignDocument, PersistedState};
pub use stone::{z_offset, ObjectType};
