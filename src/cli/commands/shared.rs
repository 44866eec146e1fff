//! Shared components for CLI commands
//!
//! Common utilities used across the command implementations: logging
//! setup, layered configuration loading, and progress reporting.

use crate::cli::args::{PreviewArgs, SplitArgs};
use crate::config::Config;
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

/// Set up structured logging for the split command
pub fn setup_logging(args: &SplitArgs) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("blocklot_processor={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Set up structured logging for the preview command
pub fn setup_preview_logging(args: &PreviewArgs) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("blocklot_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> args)
pub fn load_configuration(args: &SplitArgs) -> Result<Config> {
    info!("Loading configuration");

    if let Some(config_path) = &args.config_file {
        info!("Using config file: {}", config_path.display());
    }

    let mut config = Config::load_layered(args.config_file.as_deref())?;

    apply_cli_overrides(&mut config, args);

    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &SplitArgs) {
    config.processing.input_path = Some(args.input_path.clone());
    config.processing.output_path = Some(args.resolved_output_path());

    // Flags only tighten the config, never loosen it
    if args.drop_combined {
        config.processing.drop_combined = true;
    }
    if args.force_overwrite {
        config.processing.force_overwrite = true;
    }
    if args.dry_run {
        config.processing.dry_run = true;
    }

    config.logging.level = args.get_log_level().to_string();
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Format a byte count in human-readable form
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}
