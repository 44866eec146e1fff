//! Building-records table pipeline
//!
//! Loads building-records CSV files, applies the block-lot split row-wise,
//! and writes the augmented table back out.
//!
//! ## Architecture
//!
//! - [`loader`] - CSV loading with required-column validation
//! - [`transform`] - Row-wise splitting and column appending
//! - [`writer`] - CSV output, optionally dropping the combined column

pub mod loader;
pub mod transform;
pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use loader::load_buildings;
pub use transform::append_block_lot_columns;
pub use writer::{write_buildings, WriteOptions};
