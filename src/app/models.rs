//! Core data models for block-lot processing
//!
//! Defines the parsed identifier pair and the rule taxonomy used to
//! classify how an identifier was split.

use crate::constants::{EXTENDED_CUT, SHORT_CUT, STANDARD_CUT};
use std::fmt;

/// A block_lot identifier split into its two components.
///
/// The split is a partition: concatenating `block` and `lot` reconstructs
/// the original identifier exactly, with no characters dropped or added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBlockLot {
    /// Higher-level subdivision code, the leading portion of the identifier
    pub block: String,
    /// Lower-level subdivision code, the trailing portion of the identifier
    pub lot: String,
}

impl ParsedBlockLot {
    /// Reconstruct the original combined identifier
    pub fn reconstruct(&self) -> String {
        format!("{}{}", self.block, self.lot)
    }
}

impl fmt::Display for ParsedBlockLot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block={} lot={}", self.block, self.lot)
    }
}

/// The rule branch that determined the cut point for an identifier.
///
/// Decision order matters: `LengthSix` is checked first, then `AlphaFifth`,
/// and `Standard` is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitRule {
    /// Six-character identifier, cut unconditionally after three characters
    LengthSix,
    /// Fifth character is alphabetic, cut after five characters
    AlphaFifth,
    /// Default rule, cut after four characters
    Standard,
}

impl SplitRule {
    /// Number of leading characters assigned to the block under this rule
    pub fn cut_point(&self) -> usize {
        match self {
            SplitRule::LengthSix => SHORT_CUT,
            SplitRule::AlphaFifth => EXTENDED_CUT,
            SplitRule::Standard => STANDARD_CUT,
        }
    }

    /// Human-readable rule name for reports
    pub fn name(&self) -> &'static str {
        match self {
            SplitRule::LengthSix => "length-6",
            SplitRule::AlphaFifth => "alpha-5th",
            SplitRule::Standard => "standard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_blocklot_reconstruct() {
        let parsed = ParsedBlockLot {
            block: "1234".to_string(),
            lot: "056".to_string(),
        };
        assert_eq!(parsed.reconstruct(), "1234056");
    }

    #[test]
    fn test_split_rule_cut_points() {
        assert_eq!(SplitRule::LengthSix.cut_point(), 3);
        assert_eq!(SplitRule::AlphaFifth.cut_point(), 5);
        assert_eq!(SplitRule::Standard.cut_point(), 4);
    }

    #[test]
    fn test_split_rule_names() {
        assert_eq!(SplitRule::LengthSix.name(), "length-6");
        assert_eq!(SplitRule::AlphaFifth.name(), "alpha-5th");
        assert_eq!(SplitRule::Standard.name(), "standard");
    }
}
