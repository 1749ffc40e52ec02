//! Quotefall: a concurrent quote and author scraper
//!
//! This crate fetches paginated quote listing pages and the author biography
//! pages they link to, extracts structured records from the markup, and
//! persists the results as two JSON collections.

pub mod config;
pub mod output;
pub mod records;
pub mod scrape;

use thiserror::Error;

/// Main error type for Quotefall operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error for {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("HTML parse error for {url}: {message}")]
    Parse { url: String, message: String },

    #[error("Missing {field} in a block on {url}")]
    MissingField { url: String, field: &'static str },

    #[error("Page task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Quotefall operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use records::{AuthorRecord, QuoteRecord};
pub use scrape::{scrape, Harvest};
