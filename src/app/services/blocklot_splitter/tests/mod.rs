//! Tests for the block-lot splitter module
//!
//! Unit tests for the canonical splitter, the alternate two-function
//! variant, and the split statistics.

pub mod splitter_tests;
pub mod stats_tests;
pub mod variants_tests;

/// Identifiers observed in real building records, one per rule branch
pub fn realistic_identifiers() -> Vec<&'static str> {
    vec![
        "0001001",  // standard: block 0001, lot 001
        "123456",   // length-6: block 123, lot 456
        "1234A67",  // alpha-5th: block 1234A, lot 67
        "0412034B", // standard with lettered lot
        "0987B012", // alpha-5th, 8 characters
        "12345",    // standard boundary, 1-character lot
    ]
}
