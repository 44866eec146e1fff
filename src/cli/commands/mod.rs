//! Command implementations for the block-lot processor CLI
//!
//! This module contains the main command execution logic, progress
//! reporting, and error handling for the CLI interface. Each command is
//! implemented in its own module.

pub mod preview;
pub mod shared;
pub mod split;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for the block-lot processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `split`: the load -> split -> write pipeline
/// - `preview`: input file inspection
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Split(split_args) => split::run_split(split_args).await,
        Commands::Preview(preview_args) => preview::run_preview(preview_args).await,
    }
}
