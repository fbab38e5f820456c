//! # StoneKit
//!
//! Design studio for memorial stones. Customers compose texts, images and
//! frames on a gravestone, base, urn or table sign; the design is saved as
//! a JSON document and restored with its image assets verified.
//!
//! ## Architecture
//!
//! StoneKit is organized as a workspace with multiple crates:
//!
//! 1. **stonekit-core** - Error type, user-facing messages, event bus
//! 2. **stonekit-settings** - Editor and persistence configuration
//! 3. **stonekit-designer** - Design canvas state, history, layers, persistence
//! 4. **stonekit** - This crate: logging setup and the `stonekit` CLI

pub mod cli;
pub mod commands;

pub use stonekit_designer as designer;
pub use stonekit_settings as settings;

pub use stonekit_core::{Error, Message, MessageLevel, Result};
pub use stonekit_designer::{DesignDocument, DesignerState, PersistenceAdapter};
pub use stonekit_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Pretty console output on stderr
/// - `level` as the default, overridden by `RUST_LOG` when set
pub fn init_logging(level: tracing::level_filters::LevelFilter) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
