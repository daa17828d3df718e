//! State module for tracking crawl lifecycle and request history
//!
//! # Components
//!
//! - `CrawlPhase`: The `Running → Done` lifecycle of a single crawl
//! - `RequestWindow`: Sliding-window repeat-request guard keyed by URL hash

mod crawl_phase;
mod request_window;

// Re-export main types
pub use crawl_phase::CrawlPhase;
pub use request_window::{url_key, RequestWindow, SharedRequestWindow};
