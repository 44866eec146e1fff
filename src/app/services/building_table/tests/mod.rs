//! Tests for the building-records table pipeline


// Test helper functions and fixtures
use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// CSV fixture covering all three rule branches
pub const SAMPLE_CSV: &str = "\
bl_id,block_lot,address
B001,0001001,100 N CHARLES ST
B002,123456,200 E PRATT ST
B003,1234A67,300 W FAYETTE ST
B004,0412034B,400 LIGHT ST
";

/// Write a CSV fixture into a temp directory and return its path
pub fn write_fixture_csv(temp_dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Build an in-memory buildings table covering all rule branches
pub fn sample_buildings_df() -> DataFrame {
    df!(
        "bl_id" => &["B001", "B002", "B003", "B004"],
        "block_lot" => &["0001001", "123456", "1234A67", "0412034B"],
        "address" => &[
            "100 N CHARLES ST",
            "200 E PRATT ST",
            "300 W FAYETTE ST",
            "400 LIGHT ST",
        ],
    )
    .unwrap()
}
