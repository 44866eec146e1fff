//! Application constants for the block-lot processor
//!
//! Column names, cut positions, and default values used throughout
//! the application.

// =============================================================================
// Column Names
// =============================================================================

/// Building identifier column in the input file
pub const COL_BL_ID: &str = "bl_id";

/// Combined block and lot identifier column in the input file
pub const COL_BLOCK_LOT: &str = "block_lot";

/// Derived block column appended to the output
pub const COL_BLOCK: &str = "block";

/// Derived lot column appended to the output
pub const COL_LOT: &str = "lot";

/// Columns that must be present in any input file
pub const REQUIRED_COLUMNS: &[&str] = &[COL_BL_ID, COL_BLOCK_LOT];

// =============================================================================
// Splitting Rule Positions
// =============================================================================

/// Identifier length that triggers the unconditional short cut.
///
/// Empirically derived from Baltimore City building records: six-character
/// identifiers always carry a three-character block. The source data offers
/// no further justification, so the rule is preserved literally.
pub const SHORT_CODE_LEN: usize = 6;

/// Cut position for six-character identifiers
pub const SHORT_CUT: usize = 3;

/// Character index inspected to detect an extended (five-character) block
pub const ALPHA_PROBE_INDEX: usize = 4;

/// Cut position when the probed character is alphabetic
pub const EXTENDED_CUT: usize = 5;

/// Cut position for all remaining identifiers
pub const STANDARD_CUT: usize = 4;

// =============================================================================
// Alternate Lot Rule Suffix Lengths
// =============================================================================

/// Lot length when the identifier ends in an alphabetic character
pub const LOT_ALPHA_SUFFIX_LEN: usize = 4;

/// Lot length for all other identifiers
pub const LOT_SUFFIX_LEN: usize = 3;

// =============================================================================
// Defaults
// =============================================================================

/// Default number of rows shown by the preview command
pub const DEFAULT_PREVIEW_ROWS: usize = 6;

/// Suffix appended to the input file stem for the default output path
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_split";
