//! Page fan-out and result merging
//!
//! One task is spawned per listing page. Each task fetches and extracts its
//! listing page, then walks that page's author links sequentially. Results
//! are merged after the join point, so no state is shared between tasks; the
//! first failure aborts the whole batch and discards partial results.

use crate::config::Config;
use crate::records::{AuthorRecord, QuoteRecord};
use crate::scrape::extract::{extract_authors, extract_listing};
use crate::scrape::fetcher::fetch_page;
use crate::Result;
use reqwest::Client;
use tokio::task::JoinSet;

/// Records harvested from one listing page and its linked author pages
#[derive(Debug, Default)]
pub struct PageHarvest {
    pub quotes: Vec<QuoteRecord>,
    pub authors: Vec<AuthorRecord>,
}

/// All records harvested from a full run, in task-completion order
#[derive(Debug, Default)]
pub struct Harvest {
    pub quotes: Vec<QuoteRecord>,
    pub authors: Vec<AuthorRecord>,
}

/// Fetches and extracts one listing page and every author page it links to
///
/// The listing page is processed first; author pages are then fetched one at
/// a time, in the order their links appear on the page. A link appearing
/// twice produces two fetches and two records.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `base_url` - Site base URL, prepended to author hrefs
/// * `page_url` - The listing page URL
///
/// # Returns
///
/// * `Ok(PageHarvest)` - Records from this page and its author pages
/// * `Err(ScrapeError)` - Any fetch or extraction failed
pub async fn scrape_page(client: &Client, base_url: &str, page_url: &str) -> Result<PageHarvest> {
    tracing::debug!("Fetching listing page: {}", page_url);
    let body = fetch_page(client, page_url).await?;
    let (quotes, author_links) = extract_listing(&body, page_url)?;

    tracing::debug!(
        "{}: {} quotes, {} author links",
        page_url,
        quotes.len(),
        author_links.len()
    );

    let mut authors = Vec::new();
    for href in &author_links {
        let author_url = format!("{}{}", base_url, href);
        let body = fetch_page(client, &author_url).await?;
        authors.extend(extract_authors(&body, &author_url)?);
    }

    Ok(PageHarvest { quotes, authors })
}

/// Dispatches one concurrent task per listing page and merges the results
///
/// Pages are dispatched in index order but may complete in any order, so
/// the merged collections carry no cross-page ordering. If any task returns
/// an error (or panics), the error is propagated and the remaining tasks are
/// cancelled when the set drops.
///
/// # Arguments
///
/// * `client` - The HTTP client, cloned into each task
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(Harvest)` - Merged records from every page task
/// * `Err(ScrapeError)` - The first failure from any task
pub async fn scrape_site(client: &Client, config: &Config) -> Result<Harvest> {
    let mut tasks = JoinSet::new();

    for page in 1..=config.site.page_count {
        let client = client.clone();
        let base_url = config.site.base_url.clone();
        let page_url = format!("{}/page/{}/", base_url, page);

        tasks.spawn(async move { scrape_page(&client, &base_url, &page_url).await });
    }

    let mut harvest = Harvest::default();
    while let Some(joined) = tasks.join_next().await {
        let page = joined??;
        harvest.quotes.extend(page.quotes);
        harvest.authors.extend(page.authors);
    }

    Ok(harvest)
}
