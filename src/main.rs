//! Quotefall main entry point
//!
//! This is the command-line interface for the Quotefall scraper.

use clap::Parser;
use quotefall::config::{load_config_with_hash, Config};
use quotefall::output::write_records;
use quotefall::scrape::scrape;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Quotefall: a concurrent quote and author scraper
///
/// Quotefall fetches paginated quote listings and the author biography
/// pages they link to, then writes the extracted records to two JSON files.
#[derive(Parser, Debug)]
#[command(name = "quotefall")]
#[command(version = "1.0.0")]
#[command(about = "A concurrent quote and author scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_scrape(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quotefall=info,warn"),
            1 => EnvFilter::new("quotefall=debug,info"),
            2 => EnvFilter::new("quotefall=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows what would be scraped
fn handle_dry_run(config: &Config) {
    println!("=== Quotefall Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  Listing pages: {}", config.site.page_count);
    println!(
        "  First page: {}/page/1/",
        config.site.base_url
    );
    println!(
        "  Last page: {}/page/{}/",
        config.site.base_url, config.site.page_count
    );

    println!("\nOutput:");
    println!("  Quotes: {}", config.output.quotes_path);
    println!("  Authors: {}", config.output.authors_path);

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would fetch {} listing pages plus linked author pages",
        config.site.page_count
    );
}

/// Handles the main scrape operation
async fn handle_scrape(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        "Scraping {} listing pages from {}",
        config.site.page_count,
        config.site.base_url
    );

    let start = std::time::Instant::now();

    // Run the scrape; output is only written once the whole batch succeeds
    let harvest = match scrape(&config).await {
        Ok(harvest) => harvest,
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            return Err(e.into());
        }
    };

    tracing::info!(
        "Scrape completed: {} quotes, {} authors in {:?}",
        harvest.quotes.len(),
        harvest.authors.len(),
        start.elapsed()
    );

    write_records(&harvest.quotes, Path::new(&config.output.quotes_path))?;
    write_records(&harvest.authors, Path::new(&config.output.authors_path))?;

    tracing::info!(
        "Wrote {} and {}",
        config.output.quotes_path,
        config.output.authors_path
    );

    Ok(())
}
