//! Plain-text page digest
//!
//! A compact, line-oriented rendering of a report's pages. This is the text
//! handed to downstream summarizers, which read the `SKU Count:` and `URL:`
//! lines back out of it.

use crate::output::report::CrawlReport;
use regex::Regex;
use std::sync::OnceLock;

/// Separator printed after every page block
const PAGE_SEPARATOR: &str = "--------------------";

/// Page and SKU totals read back out of a digest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigestTotals {
    pub pages: usize,
    pub skus: usize,
}

/// Renders the per-page digest of a report
///
/// # Example
///
/// ```
/// use site_survey::output::{aggregate, render_digest, CrawlStats};
///
/// let report = aggregate("https://x.com", Vec::new(), CrawlStats::default());
/// assert_eq!(render_digest(&report), "");
/// ```
pub fn render_digest(report: &CrawlReport) -> String {
    let mut lines = Vec::with_capacity(report.pages.len() * 5);

    for page in &report.pages {
        let metadata = serde_json::to_string(&page.metadata).unwrap_or_default();
        lines.push(format!("URL: {}", page.url));
        lines.push(format!("Title: {}", page.title));
        lines.push(format!(
            "Page Type: {}, Status: {}, SKU Count: {}",
            page.page_type, page.status, page.product_count
        ));
        lines.push(format!("Metadata: {}", metadata));
        lines.push(PAGE_SEPARATOR.to_string());
    }

    lines.join("\n")
}

fn sku_count_line() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"SKU Count:\s*(\d+)").expect("SKU count pattern is valid"))
}

/// Sums the `SKU Count:` lines and counts the `URL:` lines of a digest
///
/// Unparseable counts (overflowing `usize`) are skipped.
pub fn digest_totals(digest: &str) -> DigestTotals {
    let skus = sku_count_line()
        .captures_iter(digest)
        .filter_map(|caps| caps[1].parse::<usize>().ok())
        .sum();
    let pages = digest.matches("URL:").count();

    DigestTotals { pages, skus }
}
