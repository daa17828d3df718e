//! Site-Survey: a single-site business information crawler
//!
//! This crate crawls one website inside a (domain, path-prefix) scope, fetches
//! informational pages (About, Contact, policies) ahead of catalog fan-out,
//! classifies every page it collects and aggregates the results into a
//! structured crawl report.

pub mod classify;
pub mod config;
pub mod crawler;
pub mod output;
pub mod pipeline;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Site-Survey operations
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scope error: {0}")]
    Scope(#[from] ScopeError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("Too many recent requests for {url}")]
    RepeatedRequest { url: String },

    #[error("Invalid crawl phase transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::CrawlPhase,
        to: state::CrawlPhase,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while deriving the crawl scope from a seed URL
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScopeError {
    #[error("Seed URL is empty")]
    Empty,

    #[error("Failed to parse seed URL '{url}': {message}")]
    Parse { url: String, message: String },

    #[error("Unsupported URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in seed URL: {0}")]
    MissingHost(String),
}

/// Result type alias for Site-Survey operations
pub type Result<T> = std::result::Result<T, SurveyError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for scope resolution
pub type ScopeResult<T> = std::result::Result<T, ScopeError>;

// Re-export commonly used types
pub use classify::{classify_page, PageClassification, PageMetadata, PageType};
pub use config::Config;
pub use crawler::{crawl, Coordinator};
pub use output::{aggregate, CrawlReport, PageRecord};
pub use pipeline::{SiteSurvey, SurveyOutcome};
pub use state::{CrawlPhase, RequestWindow};
pub use url::{normalize_seed, ScopeDescriptor};
