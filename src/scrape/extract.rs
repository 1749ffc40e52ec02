//! Selector-based record extraction
//!
//! This module parses fetched page bodies and extracts structured records:
//! - Quote records from `div.quote` blocks on listing pages
//! - Author-detail links from anchors whose href contains `/author/`
//! - Author records from `div.author-details` blocks on author pages
//!
//! Extraction uses first-match semantics inside each block. A block missing
//! an expected pattern fails the extraction; there is no graceful skip.

use crate::records::{AuthorRecord, QuoteRecord};
use crate::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};

/// Parses a CSS selector, mapping failure to a structure-level parse error
fn selector(css: &str, url: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Parse {
        url: url.to_string(),
        message: format!("invalid selector '{}': {}", css, e),
    })
}

fn missing(url: &str, field: &'static str) -> ScrapeError {
    ScrapeError::MissingField {
        url: url.to_string(),
        field,
    }
}

/// Collects the text of the first descendant matching `sel`, trimmed
fn first_text(block: ElementRef, sel: &Selector, url: &str, field: &'static str) -> Result<String> {
    block
        .select(sel)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .ok_or_else(|| missing(url, field))
}

/// Extracts quote records and author-detail links from a listing page
///
/// # Arguments
///
/// * `body` - The listing page HTML
/// * `url` - The page URL, used in error context
///
/// # Returns
///
/// * `Ok((quotes, links))` - One record per quote block, and every author
///   href in document order (repeats preserved, not deduplicated)
/// * `Err(ScrapeError)` - A quote block was missing an expected pattern
pub fn extract_listing(body: &str, url: &str) -> Result<(Vec<QuoteRecord>, Vec<String>)> {
    let document = Html::parse_document(body);

    let quotes = extract_quotes(&document, url)?;
    let links = extract_author_links(&document, url)?;

    Ok((quotes, links))
}

/// Extracts one record per `div.quote` block
fn extract_quotes(document: &Html, url: &str) -> Result<Vec<QuoteRecord>> {
    let quote_selector = selector("div.quote", url)?;
    let text_selector = selector("span.text", url)?;
    let author_selector = selector("small.author", url)?;
    let keywords_selector = selector("div.tags meta.keywords", url)?;

    let mut records = Vec::new();

    for block in document.select(&quote_selector) {
        let quote = first_text(block, &text_selector, url, "quote text")?;
        let author = first_text(block, &author_selector, url, "author name")?;

        // The keywords attribute is split raw; an empty value yields one
        // empty-string tag
        let tags = block
            .select(&keywords_selector)
            .next()
            .and_then(|meta| meta.value().attr("content"))
            .ok_or_else(|| missing(url, "keywords meta"))?
            .split(',')
            .map(str::to_string)
            .collect();

        records.push(QuoteRecord {
            quote,
            author,
            tags,
        });
    }

    Ok(records)
}

/// Extracts every author-detail href on the page, in document order
///
/// An anchor qualifies if its href contains the substring `/author/`. The
/// same href appearing under multiple quote blocks is returned once per
/// occurrence.
fn extract_author_links(document: &Html, url: &str) -> Result<Vec<String>> {
    let anchor_selector = selector("a[href]", url)?;

    let links = document
        .select(&anchor_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| href.contains("/author/"))
        .map(str::to_string)
        .collect();

    Ok(links)
}

/// Extracts author records from an author-detail page
///
/// # Arguments
///
/// * `body` - The author page HTML
/// * `url` - The page URL, used in error context
///
/// # Returns
///
/// * `Ok(records)` - One record per `div.author-details` block
/// * `Err(ScrapeError)` - A block was missing an expected pattern
pub fn extract_authors(body: &str, url: &str) -> Result<Vec<AuthorRecord>> {
    let document = Html::parse_document(body);

    let details_selector = selector("div.author-details", url)?;
    let title_selector = selector("h3.author-title", url)?;
    let born_date_selector = selector("span.author-born-date", url)?;
    let born_location_selector = selector("span.author-born-location", url)?;
    let description_selector = selector("div.author-description", url)?;

    let mut records = Vec::new();

    for block in document.select(&details_selector) {
        records.push(AuthorRecord {
            fullname: first_text(block, &title_selector, url, "author title")?,
            born_date: first_text(block, &born_date_selector, url, "born date")?,
            born_location: first_text(block, &born_location_selector, url, "born location")?,
            description: first_text(block, &description_selector, url, "author description")?,
        });
    }

    Ok(records)
}
