//! Split statistics collected while transforming a table

use crate::app::models::SplitRule;
use std::time::Duration;

/// Statistics for a row-wise splitting pass over a table
#[derive(Debug, Clone, Default)]
pub struct SplitStats {
    /// Number of rows processed
    pub rows_processed: usize,
    /// Rows split by the unconditional six-character rule
    pub length_six: usize,
    /// Rows split by the alphabetic-fifth-character rule
    pub alpha_fifth: usize,
    /// Rows split by the default rule
    pub standard: usize,
    /// Rows where the alternate lot rule disagrees with the canonical split
    pub variant_disagreements: usize,
    /// Total processing time
    pub processing_time: Duration,
}

impl SplitStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one row split by the given rule
    pub fn record(&mut self, rule: SplitRule) {
        self.rows_processed += 1;
        match rule {
            SplitRule::LengthSix => self.length_six += 1,
            SplitRule::AlphaFifth => self.alpha_fifth += 1,
            SplitRule::Standard => self.standard += 1,
        }
    }

    /// Record a row where the alternate lot rule disagreed
    pub fn record_disagreement(&mut self) {
        self.variant_disagreements += 1;
    }

    /// Sum of the per-rule counts, which must equal `rows_processed`
    pub fn rule_total(&self) -> usize {
        self.length_six + self.alpha_fifth + self.standard
    }
}
