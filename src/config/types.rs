use serde::Deserialize;

/// Browser identity presented to target sites
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default per-request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for Site-Survey
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default, rename = "rate-limit")]
    pub rate_limit: RateLimitConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of pages collected per crawl
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// Maximum number of fetches dispatched in one wave
    pub concurrency: u32,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: 10,
            concurrency: 5,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Request identity configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// User-Agent header value
    pub identity: String,

    /// Accept-Language header value
    #[serde(rename = "accept-language")]
    pub accept_language: String,

    /// Referer header value
    pub referer: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            identity: DEFAULT_USER_AGENT.to_string(),
            accept_language: "en-US,en;q=0.5".to_string(),
            referer: "https://google.com".to_string(),
        }
    }
}

/// Repeat-request guard configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Length of the sliding window (seconds)
    #[serde(rename = "window-secs")]
    pub window_secs: u64,

    /// Requests allowed per URL inside one window
    pub threshold: u32,

    /// Maximum number of URLs tracked at once
    #[serde(rename = "max-entries")]
    pub max_entries: usize,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_secs: 3600,
            threshold: 6,
            max_entries: 1024,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Path of the JSON report file; stdout when absent
    #[serde(default, rename = "report-path")]
    pub report_path: Option<String>,

    /// Path of the markdown summary file
    #[serde(default, rename = "summary-path")]
    pub summary_path: Option<String>,

    /// Path of the plain-text page digest
    #[serde(default, rename = "digest-path")]
    pub digest_path: Option<String>,
}
