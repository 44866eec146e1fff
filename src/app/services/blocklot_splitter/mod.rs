//! Block-lot splitter for Baltimore City parcel identifiers
//!
//! This module provides the pure splitting functions that separate a
//! combined block_lot identifier into its block and lot components.
//!
//! ## Architecture
//!
//! The splitter is organized into logical components:
//! - [`splitter`] - The canonical three-rule splitting function
//! - [`variants`] - Alternate two-function formulation with a divergent lot rule
//! - [`stats`] - Split statistics collected across a table
//!
//! ## Usage
//!
//! ```rust
//! use blocklot_processor::app::services::blocklot_splitter::split_block_lot;
//!
//! # fn example() -> blocklot_processor::Result<()> {
//! let parsed = split_block_lot("1234A67")?;
//! assert_eq!(parsed.block, "1234A");
//! assert_eq!(parsed.lot, "67");
//! # Ok(())
//! # }
//! ```

pub mod splitter;
pub mod stats;
pub mod variants;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use splitter::{classify, split_block_lot};
pub use stats::SplitStats;
pub use variants::{get_block_code, get_lot_code};
