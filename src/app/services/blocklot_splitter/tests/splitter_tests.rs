//! Tests for the canonical splitting function

use super::realistic_identifiers;
use crate::app::models::SplitRule;
use crate::app::services::blocklot_splitter::{classify, split_block_lot};
use crate::Error;

#[test]
fn test_length_six_rule() {
    let parsed = split_block_lot("123456").unwrap();
    assert_eq!(parsed.block, "123");
    assert_eq!(parsed.lot, "456");
}

#[test]
fn test_alpha_fifth_rule() {
    // 7-character input, 5th character 'A' is alphabetic, cut at 5
    let parsed = split_block_lot("1234A67").unwrap();
    assert_eq!(parsed.block, "1234A");
    assert_eq!(parsed.lot, "67");
}

#[test]
fn test_standard_rule() {
    // 5th character '5' is not alphabetic, cut at 4
    let parsed = split_block_lot("12345678").unwrap();
    assert_eq!(parsed.block, "1234");
    assert_eq!(parsed.lot, "5678");
}

#[test]
fn test_decision_order_length_six_wins_over_alpha() {
    // A six-character code with an alphabetic 5th character still takes
    // the length-6 branch, because rule order is significant
    let parsed = split_block_lot("1234A6").unwrap();
    assert_eq!(parsed.block, "123");
    assert_eq!(parsed.lot, "4A6");
    assert_eq!(classify("1234A6").unwrap(), SplitRule::LengthSix);
}

#[test]
fn test_length_five_boundary_produces_one_character_lot() {
    // Intended behavior: a five-character code with a non-alphabetic 5th
    // character takes the standard rule and yields a single-character lot
    let parsed = split_block_lot("12345").unwrap();
    assert_eq!(parsed.block, "1234");
    assert_eq!(parsed.lot, "5");
}

#[test]
fn test_length_five_with_alpha_fifth_produces_empty_lot() {
    let parsed = split_block_lot("1234A").unwrap();
    assert_eq!(parsed.block, "1234A");
    assert_eq!(parsed.lot, "");
}

#[test]
fn test_round_trip_invariant() {
    for blocklot in realistic_identifiers() {
        let parsed = split_block_lot(blocklot).unwrap();
        assert_eq!(
            parsed.reconstruct(),
            blocklot,
            "block + lot must reconstruct '{}'",
            blocklot
        );
    }
}

#[test]
fn test_too_short_input_is_malformed() {
    let result = split_block_lot("1234");
    match result {
        Err(Error::MalformedBlockLot { value, .. }) => assert_eq!(value, "1234"),
        other => panic!("expected MalformedBlockLot, got {:?}", other),
    }
}

#[test]
fn test_empty_input_is_malformed() {
    let result = split_block_lot("");
    assert!(matches!(result, Err(Error::MalformedBlockLot { .. })));
}

#[test]
fn test_classify_branches() {
    assert_eq!(classify("123456").unwrap(), SplitRule::LengthSix);
    assert_eq!(classify("1234A67").unwrap(), SplitRule::AlphaFifth);
    assert_eq!(classify("12345678").unwrap(), SplitRule::Standard);
    assert!(classify("123").is_err());
}

#[test]
fn test_malformed_error_message_names_the_value() {
    let err = split_block_lot("12").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("12"), "message should name the value: {}", message);
    assert!(message.contains("2 characters"), "message should state the length: {}", message);
}
