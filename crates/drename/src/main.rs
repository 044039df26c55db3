mod cli;
mod display;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use drename_core::config::ConfigManager;
use drename_core::rename::UnitReport;
use drename_core::{Config, RenameEngine, RenameSpec};
use tracing_subscriber::EnvFilter;

use display::Display;

fn main() -> anyhow::Result<()> {
    // Set up Ctrl+C handler for graceful interruption
    ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C)");
        std::process::exit(130); // Standard exit code for SIGINT
    })
    .context("Failed to set Ctrl+C handler")?;

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Checked before touching the filesystem
    let spec = RenameSpec::new(&cli.old, &cli.new)?;

    let root = match cli.root {
        Some(ref root) => root.clone(),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    let config = if cli.no_config {
        Config::default()
    } else {
        ConfigManager::load(cli.config.as_deref(), &root).context("Failed to load configuration")?
    };

    tracing::debug!("Root: {}", root.display());
    tracing::debug!("Effective config: {config:?}");

    let engine = RenameEngine::new(spec, config)
        .context("Failed to initialize rename engine")?
        .with_dry_run(cli.dry_run);

    let display = Display::new(!cli.no_color);
    display.print_header();

    let report = engine
        .run_with_observer(
            &root,
            Some(Box::new(|unit: &UnitReport| display.print_unit(unit))),
        )
        .context("Rename operation failed")?;

    display.print_substitutions(&report.substitutions);
    display.print_summary(&report);

    Ok(())
}
