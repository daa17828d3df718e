//! Page classification heuristics
//!
//! Three independent classifiers run on every collected page:
//! - Page type, from an ordered rule cascade (URL rules before content rules)
//! - Product count, from listing markup with a SKU-token fallback
//! - Metadata flags, from URL and text keywords

mod metadata;
mod page_type;
mod products;

pub use metadata::{analyze_metadata, PageMetadata};
pub use page_type::{
    detect_page_type, first_matching_rule, Field, Matcher, PageSignals, PageType, Rule,
    PAGE_TYPE_RULES,
};
pub use products::{count_products, count_sku_tokens, max_selector_matches, PRODUCT_SELECTORS};

use scraper::Html;

/// Everything the classifiers say about one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageClassification {
    pub page_type: PageType,
    pub product_count: usize,
    pub metadata: PageMetadata,
}

/// Runs all classifiers against a parsed page
///
/// # Arguments
///
/// * `url` - The page URL
/// * `title` - The page title
/// * `text` - Visible text of the page
/// * `document` - The parsed document, for structural selectors
pub fn classify_page(url: &str, title: &str, text: &str, document: &Html) -> PageClassification {
    PageClassification {
        page_type: detect_page_type(url, title, text),
        product_count: count_products(document, text),
        metadata: analyze_metadata(url, text),
    }
}
