//! Product-count estimation
//!
//! Counts elements matching common product-listing markup and keeps the
//! largest count over all selectors. Overlapping selectors usually match the
//! same cards, so counts are never summed. When no selector matches, the
//! number of distinct SKU-shaped tokens in the visible text is used instead.

use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Product-listing selectors, in evaluation order
pub const PRODUCT_SELECTORS: &[&str] = &[
    ".product",
    ".product-item",
    ".product-card",
    ".shop-item",
    ".store-item",
    "[data-product]",
    ".woocommerce-loop-product__title",
    ".product-title",
    ".item-title",
];

/// Minimum length of a SKU-shaped token
const MIN_SKU_LEN: usize = 6;

fn product_selectors() -> &'static [Selector] {
    static SELECTORS: OnceLock<Vec<Selector>> = OnceLock::new();
    SELECTORS.get_or_init(|| {
        PRODUCT_SELECTORS
            .iter()
            .filter_map(|css| match Selector::parse(css) {
                Ok(selector) => Some(selector),
                Err(e) => {
                    tracing::error!("Invalid product selector {}: {:?}", css, e);
                    None
                }
            })
            .collect()
    })
}

fn sku_candidate() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[A-Za-z0-9_-]+").expect("SKU pattern is valid"))
}

/// Estimates the number of products listed on a page
///
/// # Example
///
/// ```
/// use scraper::Html;
/// use site_survey::classify::count_products;
///
/// let html = Html::parse_document(r#"<div class="product"></div><div class="product"></div>"#);
/// assert_eq!(count_products(&html, ""), 2);
/// ```
pub fn count_products(document: &Html, visible_text: &str) -> usize {
    match max_selector_matches(document) {
        0 => count_sku_tokens(visible_text),
        max => max,
    }
}

/// Largest number of elements matched by any single product selector
pub fn max_selector_matches(document: &Html) -> usize {
    product_selectors()
        .iter()
        .map(|selector| document.select(selector).count())
        .max()
        .unwrap_or(0)
}

/// Number of distinct SKU-shaped tokens in the text
///
/// A token is a run of letters, digits, `-` and `_` at least six characters
/// long that contains at least one letter and one digit.
pub fn count_sku_tokens(text: &str) -> usize {
    sku_candidate()
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|token| is_sku_shaped(token))
        .collect::<HashSet<_>>()
        .len()
}

fn is_sku_shaped(token: &str) -> bool {
    token.len() >= MIN_SKU_LEN
        && token.chars().any(|c| c.is_ascii_alphabetic())
        && token.chars().any(|c| c.is_ascii_digit())
}
