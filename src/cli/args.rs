//! Command-line argument definitions for the block-lot processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::constants::{DEFAULT_OUTPUT_SUFFIX, DEFAULT_PREVIEW_ROWS};
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the block-lot processor
///
/// Separates Baltimore City combined block_lot parcel identifiers in
/// building-records CSV files into independent block and lot columns.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "blocklot-processor",
    version,
    about = "Separate Baltimore City block_lot identifiers into block and lot columns",
    long_about = "Processes building-records CSV files whose parcel identifiers combine the \
                  block and lot codes into a single block_lot column. The block can be the \
                  first three, four, or five characters depending on the identifier's \
                  structure, so the tool applies positional and character-class rules to \
                  split it accurately and appends the results as new columns."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the block-lot processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Split the block_lot column and write the augmented table (main command)
    Split(SplitArgs),
    /// Preview the identifier column of an input file
    Preview(PreviewArgs),
}

/// Arguments for the split command (main data processing)
#[derive(Debug, Clone, Parser)]
pub struct SplitArgs {
    /// Input building-records CSV file
    ///
    /// Must contain at least the columns `bl_id` and `block_lot`.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input building-records CSV file"
    )]
    pub input_path: PathBuf,

    /// Output CSV file for the augmented table
    ///
    /// If not specified, defaults to the input file name with `_split`
    /// appended to its stem.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output CSV file for the augmented table"
    )]
    pub output_path: Option<PathBuf>,

    /// Drop the original combined block_lot column from the output
    #[arg(
        long = "drop-combined",
        help = "Drop the original block_lot column from the output"
    )]
    pub drop_combined: bool,

    /// Perform a dry run without writing any output
    ///
    /// Loads and splits the table, reports statistics, and discards the
    /// result. Useful for checking a file for malformed identifiers.
    #[arg(long = "dry-run", help = "Split and report without writing output")]
    pub dry_run: bool,

    /// Force overwrite of an existing output file
    #[arg(long = "force", help = "Force overwrite of an existing output file")]
    pub force_overwrite: bool,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// ~/.config/blocklot-processor/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the preview command (input inspection)
#[derive(Debug, Clone, Parser)]
pub struct PreviewArgs {
    /// Input building-records CSV file
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input building-records CSV file"
    )]
    pub input_path: PathBuf,

    /// Number of rows to show
    #[arg(
        short = 'n',
        long = "rows",
        value_name = "COUNT",
        default_value_t = DEFAULT_PREVIEW_ROWS,
        help = "Number of rows to show"
    )]
    pub rows: usize,

    /// Also show the derived block and lot columns
    #[arg(long = "split", help = "Also show the derived block and lot columns")]
    pub show_split: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl SplitArgs {
    /// Validate the split command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input_path.display()
            )));
        }

        if self.input_path.is_dir() {
            return Err(Error::configuration(format!(
                "Input path is a directory, expected a file: {}",
                self.input_path.display()
            )));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Resolve the output path, deriving it from the input path if absent
    pub fn resolved_output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => {
                let stem = self
                    .input_path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("buildings");
                self.input_path
                    .with_file_name(format!("{}{}.csv", stem, DEFAULT_OUTPUT_SUFFIX))
            }
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl PreviewArgs {
    /// Validate the preview command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input_path.display()
            )));
        }

        if self.rows == 0 {
            return Err(Error::configuration(
                "Number of preview rows must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
