use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use md_redact::cli::Args;
use md_redact::processor::process_tree;

fn main() -> Result<()> {
    // Parse arguments
    let args = Args::parse();

    // Initialize logging
    initialize_logging(args.verbose)?;

    let config = args.to_config();
    info!("Mirror layout: {}", args.mirror);

    let summary = process_tree(&config).with_context(|| {
        format!(
            "Redaction of {} into {} failed",
            config.src_dir.display(),
            config.dst_dir.display()
        )
    })?;

    info!(
        "Done: {} Markdown files written to {}",
        summary.files_written,
        config.dst_dir.display()
    );
    Ok(())
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}
