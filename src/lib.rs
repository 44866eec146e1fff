//! Block-Lot Processor Library
//!
//! A Rust library for separating Baltimore City composite parcel identifiers
//! ("block_lot") found in building-records CSV files into independent `block`
//! and `lot` columns.
//!
//! The block can be the first three, four, or five characters of the
//! identifier depending on its structure, so the split cannot be done with a
//! fixed-width spreadsheet formula. This library provides tools for:
//! - Splitting a block_lot identifier with positional and character-class rules
//! - Loading building-records CSV files with the identifier kept as text
//! - Appending derived `block` and `lot` columns to the loaded table
//! - Writing the augmented table back to CSV, optionally dropping the
//!   original combined column
//! - Typed error reporting for malformed identifiers

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod blocklot_splitter;
        pub mod building_table;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ParsedBlockLot, SplitRule};
pub use config::Config;

/// Result type alias for the block-lot processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for block-lot processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Identifier cannot be split by the positional rules
    #[error("Malformed block_lot identifier '{value}': {reason}")]
    MalformedBlockLot { value: String, reason: String },

    /// Required input column absent from the loaded table
    #[error("Required column '{column}' not found in '{file}'")]
    MissingColumn { column: String, file: String },

    /// Table loading, manipulation, or writing failed
    #[error("Table processing error: {message}")]
    Table {
        message: String,
        #[source]
        source: polars::error::PolarsError,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a malformed identifier error
    pub fn malformed_blocklot(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedBlockLot {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing column error
    pub fn missing_column(column: impl Into<String>, file: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
            file: file.into(),
        }
    }

    /// Create a table processing error with context
    pub fn table(message: impl Into<String>, source: polars::error::PolarsError) -> Self {
        Self::Table {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<polars::error::PolarsError> for Error {
    fn from(error: polars::error::PolarsError) -> Self {
        Self::Table {
            message: "Table operation failed".to_string(),
            source: error,
        }
    }
}
