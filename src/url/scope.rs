use crate::url::domain::extract_authority;
use crate::url::normalize::parse_seed;
use crate::{ScopeError, ScopeResult};
use url::Url;

/// The (domain, path-prefix) pair that defines which URLs are internal
///
/// Derived once from the normalized seed and immutable for the crawl's
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeDescriptor {
    /// Authority of the seed URL; compared exactly, no subdomain matching
    pub domain: String,

    /// Seed path with trailing slashes removed; empty matches every path
    pub path_prefix: String,
}

impl ScopeDescriptor {
    /// Derives the scope from an already normalized seed URL
    ///
    /// # Examples
    ///
    /// ```
    /// use site_survey::url::ScopeDescriptor;
    ///
    /// let scope = ScopeDescriptor::from_seed("https://shop.com/store/").unwrap();
    /// assert_eq!(scope.domain, "shop.com");
    /// assert_eq!(scope.path_prefix, "/store");
    /// ```
    pub fn from_seed(normalized_seed: &str) -> ScopeResult<Self> {
        let url = parse_seed(normalized_seed)?;
        Self::from_url(&url)
    }

    /// Derives the scope from a parsed seed URL
    pub fn from_url(url: &Url) -> ScopeResult<Self> {
        let domain =
            extract_authority(url).ok_or_else(|| ScopeError::MissingHost(url.to_string()))?;
        let path_prefix = url.path().trim_end_matches('/').to_string();

        Ok(Self {
            domain,
            path_prefix,
        })
    }

    /// Returns true if the URL lies inside this scope
    pub fn contains(&self, url: &Url) -> bool {
        match extract_authority(url) {
            Some(authority) => {
                authority == self.domain && url.path().starts_with(&self.path_prefix)
            }
            None => false,
        }
    }

    /// Parses `candidate` and checks it against the scope
    ///
    /// Unparseable input is out of scope.
    pub fn contains_str(&self, candidate: &str) -> bool {
        Url::parse(candidate)
            .map(|url| self.contains(&url))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_scope() -> ScopeDescriptor {
        ScopeDescriptor::from_seed("https://shop.com/store").unwrap()
    }

    #[test]
    fn test_root_seed_has_empty_prefix() {
        let scope = ScopeDescriptor::from_seed("https://example.com").unwrap();
        assert_eq!(scope.domain, "example.com");
        assert_eq!(scope.path_prefix, "");
    }

    #[test]
    fn test_trailing_slashes_removed() {
        let scope = ScopeDescriptor::from_seed("https://shop.com/store//").unwrap();
        assert_eq!(scope.path_prefix, "/store");
    }

    #[test]
    fn test_page_under_prefix_is_internal() {
        assert!(store_scope().contains_str("https://shop.com/store/about"));
    }

    #[test]
    fn test_other_domain_is_external() {
        assert!(!store_scope().contains_str("https://other.com"));
    }

    #[test]
    fn test_outside_prefix_is_external() {
        assert!(!store_scope().contains_str("https://shop.com/blog"));
    }

    #[test]
    fn test_subdomain_is_external() {
        assert!(!store_scope().contains_str("https://www.shop.com/store/about"));
    }

    #[test]
    fn test_unparseable_is_external() {
        assert!(!store_scope().contains_str("http://sh op.com/store"));
        assert!(!store_scope().contains_str("not a url"));
    }

    #[test]
    fn test_empty_prefix_matches_any_path() {
        let scope = ScopeDescriptor::from_seed("https://example.com/").unwrap();
        assert!(scope.contains_str("https://example.com/anything/at/all"));
    }

    #[test]
    fn test_port_is_part_of_domain() {
        let scope = ScopeDescriptor::from_seed("http://127.0.0.1:9000/").unwrap();
        assert!(scope.contains_str("http://127.0.0.1:9000/about"));
        assert!(!scope.contains_str("http://127.0.0.1:9001/about"));
    }
}
