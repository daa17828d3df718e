//! Crawl report types and the report aggregator
//!
//! `aggregate` is a pure reduction over the collected pages plus the
//! orchestrator's counters. It has no side effects, so running it twice over
//! the same inputs yields identical reports.

use crate::classify::{PageClassification, PageMetadata, PageType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Internal and external link counts of one page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCounts {
    pub internal: usize,
    pub external: usize,
}

/// One successfully fetched and classified page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    pub url: String,
    pub title: String,
    pub page_type: PageType,
    pub status: u16,
    pub content_length: usize,
    pub has_products: bool,
    pub product_count: usize,
    pub links: LinkCounts,
    pub metadata: PageMetadata,
}

impl PageRecord {
    /// Builds a record from a fetched page and its classification
    pub fn new(
        url: String,
        title: String,
        status: u16,
        visible_text: &str,
        classification: PageClassification,
        links: LinkCounts,
    ) -> Self {
        Self {
            url,
            title,
            page_type: classification.page_type,
            status,
            content_length: visible_text.chars().count(),
            has_products: classification.product_count > 0,
            product_count: classification.product_count,
            links,
            metadata: classification.metadata,
        }
    }
}

/// Per-flag page counts and link totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub about_us_pages: usize,
    pub terms_pages: usize,
    pub privacy_pages: usize,
    pub contact_pages: usize,
    pub product_pages: usize,
    pub service_pages: usize,
    pub total_internal_links: usize,
    pub total_external_links: usize,
}

/// Fetch counters and elapsed time of a crawl
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlStats {
    pub successful: usize,
    pub failed: usize,
    /// Wall-clock seconds, rounded to two decimals
    pub total_time: f64,
}

impl CrawlStats {
    /// Creates stats, rounding the elapsed time to two decimals
    pub fn new(successful: usize, failed: usize, elapsed_secs: f64) -> Self {
        Self {
            successful,
            failed,
            total_time: (elapsed_secs * 100.0).round() / 100.0,
        }
    }

    /// Number of URLs that were dequeued and attempted
    pub fn attempted(&self) -> usize {
        self.successful + self.failed
    }
}

/// The terminal, read-only result of a crawl
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlReport {
    pub base_url: String,
    pub total_pages: usize,
    #[serde(rename = "totalSKUs")]
    pub total_skus: usize,
    pub pages_by_type: BTreeMap<String, usize>,
    pub pages: Vec<PageRecord>,
    pub summary: ReportSummary,
    pub crawl_stats: CrawlStats,
}

impl CrawlReport {
    /// Returns true if no page was collected
    ///
    /// An empty report usually means the site blocked the crawler; callers
    /// should treat it as a failed survey rather than a site with no pages.
    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }

    /// Number of pages of the given type
    pub fn pages_of_type(&self, page_type: PageType) -> usize {
        self.pages_by_type
            .get(page_type.as_str())
            .copied()
            .unwrap_or(0)
    }
}

/// Reduces the collected pages into a crawl report
///
/// # Arguments
///
/// * `base_url` - The normalized seed URL
/// * `pages` - Collected pages in collection order
/// * `stats` - Fetch counters and elapsed time from the orchestrator
pub fn aggregate(base_url: &str, pages: Vec<PageRecord>, stats: CrawlStats) -> CrawlReport {
    let mut pages_by_type: BTreeMap<String, usize> = BTreeMap::new();
    let mut summary = ReportSummary::default();
    let mut total_skus = 0;

    for page in &pages {
        *pages_by_type
            .entry(page.page_type.as_str().to_string())
            .or_insert(0) += 1;
        total_skus += page.product_count;

        summary.total_internal_links += page.links.internal;
        summary.total_external_links += page.links.external;

        let meta = &page.metadata;
        summary.about_us_pages += usize::from(meta.has_about_us);
        summary.terms_pages += usize::from(meta.has_terms);
        summary.privacy_pages += usize::from(meta.has_privacy);
        summary.contact_pages += usize::from(meta.has_contact);
        summary.product_pages += usize::from(meta.has_products);
        summary.service_pages += usize::from(meta.has_services);
    }

    CrawlReport {
        base_url: base_url.to_string(),
        total_pages: pages.len(),
        total_skus,
        pages_by_type,
        pages,
        summary,
        crawl_stats: stats,
    }
}
