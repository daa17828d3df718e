//! Configuration module for Site-Survey
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every section is optional; missing keys fall back to defaults.
//!
//! # Example
//!
//! ```no_run
//! use site_survey::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("survey.toml")).unwrap();
//! println!("Crawler will collect at most {} pages", config.crawler.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, OutputConfig, RateLimitConfig, UserAgentConfig, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::{validate, validate_crawler_config};
