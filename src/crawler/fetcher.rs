//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with a browser-like request identity
//! - GET requests with a per-request timeout
//! - Folding every failure cause into one uniform failure signal

use crate::config::UserAgentConfig;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Accept header sent with every request
const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Result of a fetch operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// The page could not be fetched (DNS, TCP, TLS, timeout, non-2xx,
    /// undecodable body)
    Failure {
        /// Human-readable cause, for logs only
        reason: String,
    },
}

/// Fetches pages for the crawl orchestrator
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches a single URL; never panics and never retries
    async fn fetch(&self, url: &Url) -> FetchResult;
}

/// Fetcher backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with the given identity and per-request timeout
    pub fn new(config: &UserAgentConfig, timeout_secs: u64) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config, timeout_secs)?,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> FetchResult {
        fetch_url(&self.client, url).await
    }
}

/// Builds an HTTP client with a browser-like identity
///
/// # Arguments
///
/// * `config` - The request identity configuration
/// * `timeout_secs` - Total per-request timeout
///
/// # Example
///
/// ```no_run
/// use site_survey::config::UserAgentConfig;
/// use site_survey::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), 10).unwrap();
/// ```
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout_secs: u64,
) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
    insert_header(&mut headers, ACCEPT_LANGUAGE, &config.accept_language);
    insert_header(&mut headers, REFERER, &config.referer);

    Client::builder()
        .user_agent(config.identity.as_str())
        .default_headers(headers)
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
        .gzip(true)
        .brotli(true)
        .build()
}

fn insert_header(headers: &mut HeaderMap, name: reqwest::header::HeaderName, value: &str) {
    if value.is_empty() {
        return;
    }
    match HeaderValue::from_str(value) {
        Ok(v) => {
            headers.insert(name, v);
        }
        Err(e) => {
            tracing::warn!("Skipping invalid {} header value {:?}: {}", name, value, e);
        }
    }
}

/// Fetches a URL and folds every failure into `FetchResult::Failure`
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx with decodable body | Success |
/// | Non-2xx status | Failure |
/// | Timeout | Failure |
/// | Connection / DNS / TLS error | Failure |
/// | Body decode error | Failure |
pub async fn fetch_url(client: &Client, url: &Url) -> FetchResult {
    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => {
            let reason = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                e.to_string()
            };
            return FetchResult::Failure { reason };
        }
    };

    let status = response.status();
    if !status.is_success() {
        return FetchResult::Failure {
            reason: format!("HTTP {}", status.as_u16()),
        };
    }

    let final_url = response.url().to_string();
    match response.text().await {
        Ok(body) => FetchResult::Success {
            final_url,
            status_code: status.as_u16(),
            body,
        },
        Err(e) => FetchResult::Failure {
            reason: format!("Failed to read body: {}", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&UserAgentConfig::default(), 10);
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_header_value_is_skipped() {
        let config = UserAgentConfig {
            accept_language: "en\nUS".to_string(),
            ..UserAgentConfig::default()
        };
        assert!(build_http_client(&config, 5).is_ok());
    }

    #[tokio::test]
    async fn test_connection_refused_is_failure() {
        let fetcher = HttpFetcher::new(&UserAgentConfig::default(), 2).unwrap();
        // Port 9 (discard) is not expected to accept HTTP connections locally
        let url = Url::parse("http://127.0.0.1:9/").unwrap();
        assert!(matches!(
            fetcher.fetch(&url).await,
            FetchResult::Failure { .. }
        ));
    }

    // Status and body handling are exercised against wiremock servers in the
    // integration tests
}
