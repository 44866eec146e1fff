//! CSV output for augmented building-records tables

use crate::constants::COL_BLOCK_LOT;
use crate::{Error, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Options controlling how the augmented table is written
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Drop the original combined `block_lot` column from the output
    pub drop_combined: bool,
    /// Overwrite an existing output file
    pub force_overwrite: bool,
}

/// Write the augmented table to a CSV file.
///
/// Returns the size of the written file in bytes. Refuses to overwrite an
/// existing file unless `force_overwrite` is set.
pub fn write_buildings(df: &DataFrame, path: &Path, options: &WriteOptions) -> Result<u64> {
    if path.exists() && !options.force_overwrite {
        return Err(Error::configuration(format!(
            "Output file already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }

    let mut output = if options.drop_combined {
        df.drop(COL_BLOCK_LOT)
            .map_err(|e| Error::table(format!("Cannot drop column '{}'", COL_BLOCK_LOT), e))?
    } else {
        df.clone()
    };

    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create '{}'", path.display()), e))?;

    CsvWriter::new(file)
        .include_header(true)
        .finish(&mut output)
        .map_err(|e| Error::table(format!("Failed to write '{}'", path.display()), e))?;

    let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

    info!(
        "Wrote {} rows ({} columns) to {}",
        output.height(),
        output.width(),
        path.display()
    );

    Ok(size)
}
