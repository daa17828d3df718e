//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `Fetcher` trait
//! - HTML parsing and link extraction
//! - The priority-aware frontier
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod links;
mod parser;

pub use coordinator::{Coordinator, CrawlSettings};
pub use fetcher::{build_http_client, fetch_url, FetchResult, Fetcher, HttpFetcher};
pub use frontier::{Frontier, FrontierEntry, Priority};
pub use links::{extract_links, is_key_page, ExtractedLinks, KEY_PAGE_KEYWORDS};
pub use parser::{parse_html, Anchor, ParsedPage, UNTITLED};

use crate::config::{Config, UserAgentConfig, DEFAULT_TIMEOUT_SECS};
use crate::output::CrawlReport;
use crate::SurveyError;

/// Crawls a single site and returns its report
///
/// Uses the default request identity and a 10 second per-request timeout.
///
/// # Arguments
///
/// * `seed_url` - The site to crawl; `example.com` means `https://example.com`
/// * `max_pages` - Maximum number of pages collected
/// * `concurrency_limit` - Maximum number of fetches in flight per wave
///
/// # Returns
///
/// * `Ok(CrawlReport)` - The crawl finished, possibly with zero pages
/// * `Err(SurveyError)` - The seed was invalid or the HTTP client could not be built
pub async fn crawl(
    seed_url: &str,
    max_pages: usize,
    concurrency_limit: usize,
) -> Result<CrawlReport, SurveyError> {
    let fetcher = HttpFetcher::new(&UserAgentConfig::default(), DEFAULT_TIMEOUT_SECS)?;
    let settings = CrawlSettings {
        max_pages,
        concurrency: concurrency_limit,
    };
    Coordinator::new(seed_url, settings, fetcher)?.run().await
}

/// Crawls a single site using the limits and identity from a configuration
pub async fn crawl_with_config(seed_url: &str, config: &Config) -> Result<CrawlReport, SurveyError> {
    let fetcher = HttpFetcher::new(&config.user_agent, config.crawler.timeout_secs)?;
    Coordinator::new(seed_url, CrawlSettings::from(&config.crawler), fetcher)?
        .run()
        .await
}
