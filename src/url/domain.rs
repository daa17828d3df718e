use url::Url;

/// Extracts the authority (host plus non-default port) from a URL
///
/// The host is lowercased by the URL parser already. Default ports are
/// omitted so `https://example.com:443/` and `https://example.com/` share an
/// authority, while `http://127.0.0.1:8080/` keeps its port.
///
/// # Returns
///
/// * `Some(String)` - The authority, e.g. `example.com` or `127.0.0.1:8080`
/// * `None` - If the URL has no host
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_survey::url::extract_authority;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_authority(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://localhost:8080/").unwrap();
/// assert_eq!(extract_authority(&url), Some("localhost:8080".to_string()));
/// ```
pub fn extract_authority(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_lowercase();
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_authority() {
        let url = Url::parse("https://example.com/").unwrap();
        assert_eq!(extract_authority(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_subdomain_kept_verbatim() {
        let url = Url::parse("https://blog.example.com/post").unwrap();
        assert_eq!(
            extract_authority(&url),
            Some("blog.example.com".to_string())
        );
    }

    #[test]
    fn test_explicit_port_kept() {
        let url = Url::parse("https://example.com:8443/").unwrap();
        assert_eq!(
            extract_authority(&url),
            Some("example.com:8443".to_string())
        );
    }

    #[test]
    fn test_default_port_dropped() {
        let url = Url::parse("https://example.com:443/").unwrap();
        assert_eq!(extract_authority(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_mixed_case_lowercased() {
        let url = Url::parse("https://Example.COM/").unwrap();
        assert_eq!(extract_authority(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_no_host() {
        let url = Url::parse("mailto:someone@example.com").unwrap();
        assert_eq!(extract_authority(&url), None);
    }
}
