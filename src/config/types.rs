use serde::Deserialize;

/// Main configuration structure for Quotefall
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the site to scrape, without a trailing slash
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Number of listing pages to fetch (1..=page-count)
    #[serde(rename = "page-count")]
    pub page_count: u32,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path for the quotes JSON array
    #[serde(rename = "quotes-path", default = "default_quotes_path")]
    pub quotes_path: String,

    /// Path for the authors JSON array
    #[serde(rename = "authors-path", default = "default_authors_path")]
    pub authors_path: String,
}

fn default_quotes_path() -> String {
    "quotes.json".to_string()
}

fn default_authors_path() -> String {
    "authors.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig {
                base_url: "http://quotes.toscrape.com".to_string(),
                page_count: 10,
            },
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quotes_path: default_quotes_path(),
            authors_path: default_authors_path(),
        }
    }
}
