//! Link extraction and key-page detection
//!
//! Partitions a page's anchors into internal and external links relative to
//! the crawl scope, and flags internal links that look like informational or
//! compliance pages.

use crate::crawler::parser::Anchor;
use crate::url::{resolve_href, ScopeDescriptor};
use url::Url;

/// Keywords that mark an internal link as a key page
pub const KEY_PAGE_KEYWORDS: &[&str] = &[
    "about", "contact", "privacy", "terms", "refund", "shipping", "careers", "faq", "support",
    "return", "help", "policy",
];

/// Links discovered on one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedLinks {
    /// In-scope URLs, one per anchor, in document order
    pub internal: Vec<String>,

    /// Out-of-scope or unresolvable links; counted, never fetched
    pub external: Vec<String>,

    /// Subset of `internal` that matched a key-page keyword
    pub key_pages: Vec<String>,
}

/// Returns true if the resolved URL or the anchor text names a key page
pub fn is_key_page(resolved_url: &str, anchor_text: &str) -> bool {
    let url = resolved_url.to_lowercase();
    let text = anchor_text.to_lowercase();
    KEY_PAGE_KEYWORDS
        .iter()
        .any(|keyword| url.contains(keyword) || text.contains(keyword))
}

/// Partitions anchors into internal, external and key-page links
///
/// # Arguments
///
/// * `base_url` - The crawl's seed URL; relative hrefs resolve against it
/// * `anchors` - The page's anchors
/// * `scope` - The crawl scope
///
/// # Example
///
/// ```
/// use site_survey::crawler::{extract_links, Anchor};
/// use site_survey::url::ScopeDescriptor;
/// use url::Url;
///
/// let scope = ScopeDescriptor::from_seed("https://shop.com").unwrap();
/// let base = Url::parse("https://shop.com/").unwrap();
/// let anchors = vec![Anchor { href: "/contact".into(), text: "Reach us".into() }];
/// let links = extract_links(&base, &anchors, &scope);
/// assert_eq!(links.key_pages, vec!["https://shop.com/contact".to_string()]);
/// ```
pub fn extract_links(base_url: &Url, anchors: &[Anchor], scope: &ScopeDescriptor) -> ExtractedLinks {
    let mut links = ExtractedLinks::default();

    for anchor in anchors {
        let resolved = match resolve_href(base_url, &anchor.href) {
            Some(url) => url,
            None => {
                tracing::trace!("Unresolvable href {:?} counted as external", anchor.href);
                links.external.push(anchor.href.clone());
                continue;
            }
        };

        let is_web = matches!(resolved.scheme(), "http" | "https");
        let resolved = resolved.to_string();

        if is_web && scope.contains_str(&resolved) {
            if is_key_page(&resolved, &anchor.text) {
                links.key_pages.push(resolved.clone());
            }
            links.internal.push(resolved);
        } else {
            links.external.push(resolved);
        }
    }

    links
}
