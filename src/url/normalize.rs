use crate::{ScopeError, ScopeResult};
use url::Url;

/// Scheme prepended to seeds that are given without one
const DEFAULT_SCHEME: &str = "https://";

/// Normalizes a user-supplied seed into an absolute URL string
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace; reject if empty
/// 2. Prepend `https://` if the input carries no `scheme://` prefix
/// 3. Parse the result; reject if malformed
/// 4. Reject schemes other than HTTP and HTTPS
/// 5. Reject URLs without a host
///
/// The returned string is the seed as the caller wrote it (plus the default
/// scheme), not the re-serialized form, so it can be echoed back verbatim
/// as the report's base URL.
///
/// # Examples
///
/// ```
/// use site_survey::url::normalize_seed;
///
/// assert_eq!(normalize_seed("example.com").unwrap(), "https://example.com");
/// assert_eq!(normalize_seed("http://x.com/a").unwrap(), "http://x.com/a");
/// ```
pub fn normalize_seed(seed: &str) -> ScopeResult<String> {
    let trimmed = seed.trim();
    if trimmed.is_empty() {
        return Err(ScopeError::Empty);
    }

    let normalized = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME, trimmed)
    };

    parse_seed(&normalized)?;
    Ok(normalized)
}

/// Parses a normalized seed and validates that it is crawlable
pub fn parse_seed(normalized: &str) -> ScopeResult<Url> {
    let url = Url::parse(normalized).map_err(|e| ScopeError::Parse {
        url: normalized.to_string(),
        message: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ScopeError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(ScopeError::MissingHost(normalized.to_string()));
    }

    Ok(url)
}

/// Returns true if the input starts with `scheme://`
fn has_scheme(input: &str) -> bool {
    match input.find("://") {
        Some(idx) if idx > 0 => input[..idx]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.'),
        _ => false,
    }
}
