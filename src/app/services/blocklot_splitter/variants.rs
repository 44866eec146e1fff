//! Alternate two-function formulation of the block-lot split
//!
//! The source data workflow carried a second formulation of the split in
//! which the block and lot are computed independently. The block rule is
//! identical to the canonical splitter, but the lot rule inspects the
//! *last* character instead of deriving the lot from the block cut point:
//! a trailing alphabetic character yields a four-character lot, anything
//! else a three-character lot.
//!
//! The two formulations can disagree for the same input. A seven-character
//! identifier ending in a letter whose fifth character is a digit, such as
//! `"123456B"`, splits canonically into `"1234"` + `"56B"`, while the rule
//! here yields a four-character lot `"456B"` that overlaps the block. The
//! divergence is a documented inconsistency in the source rules, kept
//! observable rather than merged; the processing pipeline always uses the
//! canonical [`split_block_lot`](super::split_block_lot) and reports
//! disagreements in its statistics.

use crate::app::services::blocklot_splitter::splitter::classify;
use crate::constants::{LOT_ALPHA_SUFFIX_LEN, LOT_SUFFIX_LEN};
use crate::{Error, Result};

/// Compute the block component only, using the canonical three-rule logic.
pub fn get_block_code(blocklot: &str) -> Result<String> {
    let rule = classify(blocklot)?;
    Ok(blocklot.chars().take(rule.cut_point()).collect())
}

/// Compute the lot component using the independent last-character rule.
///
/// If the last character is alphabetic the lot is the last four characters,
/// otherwise the last three. Identifiers shorter than the suffix the rule
/// selects are malformed.
pub fn get_lot_code(blocklot: &str) -> Result<String> {
    let last = blocklot.chars().next_back().ok_or_else(|| {
        Error::malformed_blocklot(blocklot, "identifier is empty, no last character to inspect")
    })?;

    let suffix_len = if last.is_alphabetic() {
        LOT_ALPHA_SUFFIX_LEN
    } else {
        LOT_SUFFIX_LEN
    };

    let length = blocklot.chars().count();
    if length < suffix_len {
        return Err(Error::malformed_blocklot(
            blocklot,
            format!(
                "identifier has {} characters, the lot rule needs at least {}",
                length, suffix_len
            ),
        ));
    }

    Ok(blocklot.chars().skip(length - suffix_len).collect())
}
