//! CSV loading for building-records tables

use crate::constants::{COL_BLOCK_LOT, REQUIRED_COLUMNS};
use crate::{Error, Result};
use polars::prelude::*;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Load a building-records CSV file into a DataFrame.
///
/// The `block_lot` column is forced to a string dtype so that all-digit
/// identifiers keep their leading zeros instead of being inferred as
/// integers. Fails with [`Error::MissingColumn`] if `bl_id` or `block_lot`
/// is absent.
pub fn load_buildings(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(Error::configuration(format!(
            "Input file does not exist: {}",
            path.display()
        )));
    }

    info!("Loading building records from {}", path.display());

    let schema_overwrite = Schema::from_iter([Field::new(COL_BLOCK_LOT.into(), DataType::String)]);

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_schema_overwrite(Some(Arc::new(schema_overwrite)))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| Error::table(format!("Failed to open '{}'", path.display()), e))?
        .finish()
        .map_err(|e| Error::table(format!("Failed to parse '{}'", path.display()), e))?;

    validate_columns(&df, path)?;

    debug!(
        "Loaded {} rows with {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );

    Ok(df)
}

/// Verify that all required columns are present
pub fn validate_columns(df: &DataFrame, path: &Path) -> Result<()> {
    for required in REQUIRED_COLUMNS {
        let present = df
            .get_columns()
            .iter()
            .any(|column| column.name().as_str() == *required);

        if !present {
            return Err(Error::missing_column(*required, path.display().to_string()));
        }
    }
    Ok(())
}
