use blocklot_processor::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => {
            // Success - the command has already reported its results
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Block-Lot Processor - Baltimore City Parcel Identifier Splitter");
    println!("================================================================");
    println!();
    println!("Separate combined block_lot parcel identifiers in building-records");
    println!("CSV files into independent block and lot columns.");
    println!();
    println!("USAGE:");
    println!("    blocklot-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    split       Split the block_lot column and write the augmented table");
    println!("    preview     Show the first rows of the identifier columns");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Split a buildings file, writing buildings_split.csv alongside it:");
    println!("    blocklot-processor split --input data/buildings.csv");
    println!();
    println!("    # Split, drop the combined column, and choose the output path:");
    println!("    blocklot-processor split --input data/buildings.csv \\");
    println!("                             --output data/buildings_clean.csv --drop-combined");
    println!();
    println!("    # Inspect the identifier column before splitting:");
    println!("    blocklot-processor preview --input data/buildings.csv --rows 10");
    println!();
    println!("For detailed help on any command, use:");
    println!("    blocklot-processor <COMMAND> --help");
}
