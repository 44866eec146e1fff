//! Tests for the alternate two-function split formulation

use super::realistic_identifiers;
use crate::app::services::blocklot_splitter::{get_block_code, get_lot_code, split_block_lot};
use crate::Error;

#[test]
fn test_block_code_matches_canonical_block() {
    for blocklot in realistic_identifiers() {
        let block = get_block_code(blocklot).unwrap();
        let parsed = split_block_lot(blocklot).unwrap();
        assert_eq!(block, parsed.block, "block rule is shared for '{}'", blocklot);
    }
}

#[test]
fn test_lot_code_alpha_last_character() {
    // Trailing letter selects the four-character suffix
    assert_eq!(get_lot_code("0412034B").unwrap(), "034B");
}

#[test]
fn test_lot_code_numeric_last_character() {
    // Trailing digit selects the three-character suffix
    assert_eq!(get_lot_code("0001001").unwrap(), "001");
}

#[test]
fn test_variants_agree_on_plain_identifiers() {
    // 7-character all-digit code: canonical lot and suffix lot coincide
    let parsed = split_block_lot("0001001").unwrap();
    assert_eq!(get_lot_code("0001001").unwrap(), parsed.lot);
}

#[test]
fn test_variants_disagree_on_trailing_letter() {
    // Known inconsistency between the two formulations: a 7-character code
    // ending in a letter with a non-alphabetic 5th character. The canonical
    // rule cuts at 4 (lot "56B"); the suffix rule takes the last 4 ("456B").
    let parsed = split_block_lot("123456B").unwrap();
    assert_eq!(parsed.block, "1234");
    assert_eq!(parsed.lot, "56B");

    let variant_lot = get_lot_code("123456B").unwrap();
    assert_eq!(variant_lot, "456B");
    assert_ne!(variant_lot, parsed.lot);
}

#[test]
fn test_lot_code_empty_input_is_malformed() {
    assert!(matches!(
        get_lot_code(""),
        Err(Error::MalformedBlockLot { .. })
    ));
}

#[test]
fn test_lot_code_shorter_than_suffix_is_malformed() {
    // Two characters ending in a letter: the rule wants four
    assert!(matches!(
        get_lot_code("1B"),
        Err(Error::MalformedBlockLot { .. })
    ));
}

#[test]
fn test_block_code_too_short_is_malformed() {
    assert!(matches!(
        get_block_code("1234"),
        Err(Error::MalformedBlockLot { .. })
    ));
}
