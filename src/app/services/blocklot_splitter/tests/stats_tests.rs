//! Tests for split statistics

use crate::app::models::SplitRule;
use crate::app::services::blocklot_splitter::SplitStats;

#[test]
fn test_stats_default() {
    let stats = SplitStats::new();
    assert_eq!(stats.rows_processed, 0);
    assert_eq!(stats.rule_total(), 0);
    assert_eq!(stats.variant_disagreements, 0);
}

#[test]
fn test_stats_record_per_rule() {
    let mut stats = SplitStats::new();
    stats.record(SplitRule::LengthSix);
    stats.record(SplitRule::AlphaFifth);
    stats.record(SplitRule::Standard);
    stats.record(SplitRule::Standard);

    assert_eq!(stats.rows_processed, 4);
    assert_eq!(stats.length_six, 1);
    assert_eq!(stats.alpha_fifth, 1);
    assert_eq!(stats.standard, 2);
    assert_eq!(stats.rule_total(), stats.rows_processed);
}

#[test]
fn test_stats_record_disagreement() {
    let mut stats = SplitStats::new();
    stats.record(SplitRule::Standard);
    stats.record_disagreement();

    assert_eq!(stats.variant_disagreements, 1);
    // Disagreements do not inflate the row count
    assert_eq!(stats.rows_processed, 1);
}
