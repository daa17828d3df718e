//! URL handling module for Site-Survey
//!
//! This module provides seed normalization, authority extraction and the
//! (domain, path-prefix) scope that decides which links are internal.

mod domain;
mod normalize;
mod scope;

// Re-export main functions
pub use domain::extract_authority;
pub use normalize::{normalize_seed, parse_seed};
pub use scope::ScopeDescriptor;

use url::Url;

/// Resolves an anchor href against a base URL
///
/// Handles relative paths, protocol-relative links and fragments. The
/// fragment of the resolved URL is dropped so that in-page anchors do not
/// produce distinct frontier entries.
///
/// # Returns
///
/// * `Some(Url)` - The absolute URL
/// * `None` - If the href cannot be resolved
///
/// # Examples
///
/// ```
/// use site_survey::url::resolve_href;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/shop/").unwrap();
/// let resolved = resolve_href(&base, "item-1#reviews").unwrap();
/// assert_eq!(resolved.as_str(), "https://example.com/shop/item-1");
/// ```
pub fn resolve_href(base: &Url, href: &str) -> Option<Url> {
    let mut resolved = base.join(href.trim()).ok()?;
    resolved.set_fragment(None);
    Some(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/store/page").unwrap()
    }

    #[test]
    fn test_resolve_absolute_path() {
        let url = resolve_href(&base(), "/about").unwrap();
        assert_eq!(url.as_str(), "https://example.com/about");
    }

    #[test]
    fn test_resolve_relative_path() {
        let url = resolve_href(&base(), "contact").unwrap();
        assert_eq!(url.as_str(), "https://example.com/store/contact");
    }

    #[test]
    fn test_resolve_protocol_relative() {
        let url = resolve_href(&base(), "//cdn.example.com/x").unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.com/x");
    }

    #[test]
    fn test_fragment_only_resolves_to_page() {
        let url = resolve_href(&base(), "#top").unwrap();
        assert_eq!(url.as_str(), "https://example.com/store/page");
    }

    #[test]
    fn test_unresolvable_href() {
        assert!(resolve_href(&base(), "http://exa mple.com/").is_none());
    }
}
