//! Canonical block_lot splitting function
//!
//! Implements the three-rule cut-point logic used by the processing
//! pipeline. The rules reflect the structure of Baltimore City parcel
//! identifiers: a six-character code carries a three-character block,
//! an alphabetic fifth character marks a five-character block, and
//! everything else carries a four-character block.

use crate::app::models::{ParsedBlockLot, SplitRule};
use crate::constants::{ALPHA_PROBE_INDEX, SHORT_CODE_LEN};
use crate::{Error, Result};

/// Classify an identifier by the rule branch that applies to it.
///
/// Decision order matters and the first match wins. Identifiers too short
/// to inspect the fifth character (and not exactly six characters long)
/// cannot be classified and produce a [`Error::MalformedBlockLot`].
pub fn classify(blocklot: &str) -> Result<SplitRule> {
    let length = blocklot.chars().count();

    if length == SHORT_CODE_LEN {
        return Ok(SplitRule::LengthSix);
    }

    let probed = blocklot.chars().nth(ALPHA_PROBE_INDEX).ok_or_else(|| {
        Error::malformed_blocklot(
            blocklot,
            format!(
                "identifier has {} characters, at least {} are needed to locate the cut point",
                length,
                ALPHA_PROBE_INDEX + 1
            ),
        )
    })?;

    if probed.is_alphabetic() {
        Ok(SplitRule::AlphaFifth)
    } else {
        Ok(SplitRule::Standard)
    }
}

/// Separate a combined block_lot identifier into block and lot.
///
/// The returned pair is a partition of the input: concatenating the block
/// and lot reconstructs the identifier exactly. No normalization is
/// performed; inputs are assumed pre-cleaned by the caller.
pub fn split_block_lot(blocklot: &str) -> Result<ParsedBlockLot> {
    let rule = classify(blocklot)?;
    Ok(split_at(blocklot, rule.cut_point()))
}

/// Split an identifier at a character position
fn split_at(blocklot: &str, cut: usize) -> ParsedBlockLot {
    let block: String = blocklot.chars().take(cut).collect();
    let lot: String = blocklot.chars().skip(cut).collect();
    ParsedBlockLot { block, lot }
}
