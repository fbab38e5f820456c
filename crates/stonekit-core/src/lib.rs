//! # StoneKit Core
//!
//! Core types shared by the StoneKit crates: the error type, user-facing
//! messages, and the application event bus.

pub mod error;
pub mod event_bus;
pub mod message;

pub use error::{Error, Result, ValidationError};
pub use message::{Message, MessageLevel};

pub use event_bus::{
    event_bus, AppEvent, DesignEvent, EventBus, EventBusError, EventCategory, EventFilter,
    InputEvent, Key, KeyChord, Subscription, SubscriptionId,
};
