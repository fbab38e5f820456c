//! # Event Bus Module
//!
//! Publish/subscribe plumbing between the editor and whatever hosts it.
//!
//! - Publishers emit typed events without knowing subscribers
//! - Subscribers filter and receive events of interest
//! - Views that listen only while mounted use [`EventBus::subscribe_scoped`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stonekit_core::event_bus::{event_bus, AppEvent, EventCategory, EventFilter, InputEvent};
//!
//! let subscription = event_bus().subscribe_scoped(
//!     EventFilter::Categories(vec![EventCategory::Input]),
//!     |event| {
//!         if let AppEvent::Input(InputEvent::Key(chord)) = event {
//!             tracing::debug!("key: {}", chord);
//!         }
//!     },
//! );
//!
//! // Dropping the guard unsubscribes.
//! drop(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
