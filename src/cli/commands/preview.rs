//! Preview command implementation
//!
//! Shows the first rows of the identifier columns so the structure of the
//! block_lot values can be inspected before running a split.

use super::shared::setup_preview_logging;
use crate::app::services::building_table::{append_block_lot_columns, load_buildings};
use crate::cli::args::PreviewArgs;
use crate::constants::{COL_BLOCK, COL_BLOCK_LOT, COL_BL_ID, COL_LOT};
use crate::Result;
use tracing::info;

/// Run the preview command
pub async fn run_preview(args: PreviewArgs) -> Result<()> {
    setup_preview_logging(&args)?;

    args.validate()?;

    let mut df = load_buildings(&args.input_path)?;
    info!("Previewing {} of {} rows", args.rows, df.height());

    let columns: Vec<&str> = if args.show_split {
        append_block_lot_columns(&mut df, None)?;
        vec![COL_BL_ID, COL_BLOCK_LOT, COL_BLOCK, COL_LOT]
    } else {
        vec![COL_BL_ID, COL_BLOCK_LOT]
    };

    let selected = df.select(columns)?;
    println!("{}", selected.head(Some(args.rows)));

    Ok(())
}
