//! Split command implementation
//!
//! The main workflow: load the building records, split the block_lot
//! column row-wise, and write the augmented table.

use super::shared::{create_progress_bar, format_size, load_configuration, setup_logging};
use crate::app::services::blocklot_splitter::SplitStats;
use crate::app::services::building_table::{
    append_block_lot_columns, load_buildings, write_buildings, WriteOptions,
};
use crate::cli::args::SplitArgs;
use crate::{Error, Result};
use colored::*;
use std::path::Path;
use tracing::{debug, info};

/// Run the split command
pub async fn run_split(args: SplitArgs) -> Result<()> {
    setup_logging(&args)?;

    info!("Starting block-lot split");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let input_path = config
        .processing
        .input_path
        .as_ref()
        .ok_or_else(|| Error::configuration("No input path configured"))?;
    let output_path = config
        .processing
        .output_path
        .as_ref()
        .ok_or_else(|| Error::configuration("No output path configured"))?;

    let mut df = load_buildings(input_path)?;

    let progress = if args.show_progress() {
        Some(create_progress_bar(
            df.height() as u64,
            "Splitting identifiers",
        ))
    } else {
        None
    };

    let stats = append_block_lot_columns(&mut df, progress.as_ref())?;

    if let Some(pb) = progress {
        pb.finish_with_message("All identifiers split");
    }

    if config.processing.dry_run {
        info!("Dry run, discarding results");
        if !args.quiet {
            print_report(&stats, None);
        }
        return Ok(());
    }

    let options = WriteOptions {
        drop_combined: config.processing.drop_combined,
        force_overwrite: config.processing.force_overwrite,
    };
    let output_size = write_buildings(&df, output_path, &options)?;

    if !args.quiet {
        print_report(&stats, Some((output_path.as_path(), output_size)));
    }

    Ok(())
}

/// Print the human-readable split summary
fn print_report(stats: &SplitStats, output: Option<(&Path, u64)>) {
    println!("\n{}", "Block-Lot Split Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Rows processed:".bright_cyan(),
        stats.rows_processed.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Length-6 rule:".bright_cyan(),
        stats.length_six.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Alpha-5th rule:".bright_cyan(),
        stats.alpha_fifth.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Standard rule:".bright_cyan(),
        stats.standard.to_string().bright_white()
    );
    if stats.variant_disagreements > 0 {
        println!(
            "  {} {}",
            "Variant disagreements:".bright_cyan(),
            stats.variant_disagreements.to_string().bright_yellow().bold()
        );
    }
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time.as_millis().to_string().bright_white()
    );
    if let Some((path, size)) = output {
        println!(
            "  {} {} ({})",
            "Output:".bright_cyan(),
            path.display().to_string().bright_white(),
            format_size(size)
        );
    } else {
        println!("  {} dry run, no output written", "Output:".bright_cyan());
    }
}
