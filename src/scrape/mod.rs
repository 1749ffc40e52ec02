//! Scraping module for page fetching and record extraction
//!
//! This module contains the core scraping logic, including:
//! - HTTP client construction and page fetching
//! - Selector-based extraction of quote and author records
//! - Concurrent per-page fan-out and result merging

mod extract;
mod fetcher;
mod pipeline;

pub use extract::{extract_authors, extract_listing};
pub use fetcher::{build_http_client, fetch_page};
pub use pipeline::{scrape_page, scrape_site, Harvest, PageHarvest};

use crate::config::Config;
use crate::Result;

/// Runs a complete scrape of the configured site
///
/// This is the main entry point for a run. It will:
/// 1. Build the HTTP client
/// 2. Dispatch one task per listing page
/// 3. Merge the per-page results after all tasks complete
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(Harvest)` - All quote and author records from the run
/// * `Err(ScrapeError)` - Any page task failed; partial results are discarded
pub async fn scrape(config: &Config) -> Result<Harvest> {
    let client = build_http_client()?;
    scrape_site(&client, config).await
}
