//! STAC Harvest main entry point
//!
//! This is the command-line interface for dumping a STAC API's catalogs
//! and collections to disk.

use anyhow::Context;
use clap::Parser;
use stac_harvest::config::{load_config, validate, Config};
use stac_harvest::harvest::{run_harvest, HarvestOptions};
use stac_harvest::output::print_summary;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// STAC Harvest: dump catalog and collection metadata from a STAC API
///
/// Lists every child catalog of the API root, writes the catalog index,
/// then follows each catalog's paginated collections listing and writes
/// one JSON file per catalog.
#[derive(Parser, Debug)]
#[command(name = "stac-harvest")]
#[command(version)]
#[command(about = "Dump STAC catalogs and collections to JSON files", long_about = None)]
struct Cli {
    /// Path to download directory
    #[arg(value_name = "DOWNLOAD_DIR")]
    download_dir: PathBuf,

    /// Download collections for a specific catalog
    #[arg(long, value_name = "NAME")]
    catalog: Option<String>,

    /// Save the full collection metadata as opposed to just ID and title
    #[arg(long)]
    full: bool,

    /// Download files even if they already exist
    #[arg(long)]
    force: bool,

    /// Comma-separated names of catalogs to skip
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    skip: Vec<String>,

    /// Path to TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the API root URL
    #[arg(long, value_name = "URL")]
    root_url: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;
    tracing::info!("Harvesting from: {}", config.api.root_url);

    let options = HarvestOptions {
        download_dir: cli.download_dir.clone(),
        full: cli.full,
        force: cli.force,
        skip: cli.skip.into_iter().filter(|s| !s.is_empty()).collect(),
    };

    match run_harvest(config, options, cli.catalog.as_deref()).await {
        Ok(summary) => {
            if !cli.quiet {
                print_summary(&summary);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("stac_harvest=info,warn"),
            1 => EnvFilter::new("stac_harvest=debug,info"),
            2 => EnvFilter::new("stac_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file (if any) and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(root_url) = &cli.root_url {
        config.api.root_url = root_url.clone();
        validate(&config).context("invalid --root-url")?;
    }

    Ok(config)
}
