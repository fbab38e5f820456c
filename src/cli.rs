//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "stonekit",
    version,
    about = "StoneKit - inspect and verify memorial stone designs",
    long_about = "Inspect and verify memorial stone design documents.\n\n\
                  A design is given either as a path to a JSON document or as a\n\
                  design handle stored in the configured document directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Configuration file (JSON or TOML). Defaults to the platform config
    /// location.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print a summary of a design.
    Inspect(DesignArgs),

    /// Check that every image of a design can be reached; exits non-zero
    /// otherwise.
    Verify(DesignArgs),
}

#[derive(Parser)]
pub struct DesignArgs {
    /// Design document path or design handle.
    #[arg(value_name = "DESIGN")]
    pub design: String,
}
