//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper:
//! - Building the shared HTTP client
//! - GET requests that return the page body as text
//!
//! Non-success status codes are treated as fetch failures.

use crate::{Result, ScrapeError};
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client shared by all page tasks
///
/// The client carries a connection pool, so one client is built per run and
/// cloned into every task. No custom headers or authentication are set.
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the response body as text
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(ScrapeError::Fetch)` - Transport failure or non-success status
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await.map_err(|source| {
        ScrapeError::Fetch {
            url: url.to_string(),
            source,
        }
    })?;

    let response = response.error_for_status().map_err(|source| {
        ScrapeError::Fetch {
            url: url.to_string(),
            source,
        }
    })?;

    response.text().await.map_err(|source| ScrapeError::Fetch {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_page_returns_body() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page/1/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&mock_server)
            .await;

        let client = build_http_client().unwrap();
        let url = format!("{}/page/1/", mock_server.uri());
        let body = fetch_page(&client, &url).await.unwrap();
        assert_eq!(body, "<html></html>");
    }

    #[tokio::test]
    async fn test_fetch_page_rejects_error_status() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = build_http_client().unwrap();
        let url = format!("{}/missing", mock_server.uri());
        let result = fetch_page(&client, &url).await;
        assert!(matches!(result, Err(ScrapeError::Fetch { .. })));
    }
}
