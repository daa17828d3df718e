use crate::config::RateLimitConfig;
use sha2::{Digest, Sha256};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// A request window shared between concurrent survey callers
pub type SharedRequestWindow = Arc<Mutex<RequestWindow>>;

/// Sliding-window guard against surveying the same URL too often
///
/// Each URL is keyed by the hex SHA-256 of its text. A key keeps the
/// timestamps of its requests inside the window; a request is refused once
/// the count inside the window exceeds the threshold. Keys with no request
/// inside the window are evicted, and the table never holds more than
/// `max_entries` keys (the least recently seen key is dropped first).
#[derive(Debug, Clone)]
pub struct RequestWindow {
    window: Duration,
    threshold: u32,
    max_entries: usize,
    entries: HashMap<String, VecDeque<Instant>>,
}

impl RequestWindow {
    /// Creates a new, empty request window
    pub fn new(window: Duration, threshold: u32, max_entries: usize) -> Self {
        Self {
            window,
            threshold,
            max_entries: max_entries.max(1),
            entries: HashMap::new(),
        }
    }

    /// Creates a request window from configuration
    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(
            Duration::from_secs(config.window_secs),
            config.threshold,
            config.max_entries,
        )
    }

    /// Wraps this window for sharing between callers
    pub fn shared(self) -> SharedRequestWindow {
        Arc::new(Mutex::new(self))
    }

    /// Records a request for `url` now
    ///
    /// # Returns
    ///
    /// * `true` - The URL has been requested more than `threshold` times
    ///   inside the window and should be refused
    /// * `false` - The request may proceed
    pub fn record(&mut self, url: &str) -> bool {
        self.record_at(url, Instant::now())
    }

    /// Records a request for `url` at the given instant
    pub fn record_at(&mut self, url: &str, now: Instant) -> bool {
        self.evict_expired(now);

        let key = url_key(url);
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.evict_least_recent();
        }

        let window = self.window;
        let timestamps = self.entries.entry(key).or_default();
        timestamps.retain(|t| now.saturating_duration_since(*t) < window);
        timestamps.push_back(now);

        let repeated = timestamps.len() as u64 > u64::from(self.threshold);
        if repeated {
            tracing::debug!(
                "URL {} requested {} times inside {:?}",
                url,
                timestamps.len(),
                window
            );
        }
        repeated
    }

    /// Returns the number of URLs currently tracked
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no URLs are tracked
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every key whose newest request is outside the window
    fn evict_expired(&mut self, now: Instant) {
        let window = self.window;
        self.entries.retain(|_, timestamps| {
            timestamps
                .back()
                .is_some_and(|last| now.saturating_duration_since(*last) < window)
        });
    }

    /// Drops the key whose newest request is the oldest
    fn evict_least_recent(&mut self) {
        let oldest = self
            .entries
            .iter()
            .filter_map(|(key, timestamps)| timestamps.back().map(|last| (key.clone(), *last)))
            .min_by_key(|(_, last)| *last)
            .map(|(key, _)| key);

        if let Some(key) = oldest {
            tracing::trace!("Evicting request window entry {}", key);
            self.entries.remove(&key);
        }
    }
}

impl Default for RequestWindow {
    fn default() -> Self {
        Self::from_config(&RateLimitConfig::default())
    }
}

/// Hex SHA-256 of a URL, used as the request window key
pub fn url_key(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hex::encode(hasher.finalize())
}
