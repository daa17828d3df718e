//! Frontier: the deduplicating, priority-aware queue of URLs to fetch
//!
//! Key pages (About, Contact, policies) are served before ordinary internal
//! links; within a priority class discovery order is preserved. A URL enters
//! the frontier at most once: enqueue is a no-op if the URL is already
//! queued or has already been dequeued for fetch.

use std::collections::{HashSet, VecDeque};

/// Priority class of a frontier entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Informational page, fetched ahead of normal links
    Key,
    /// Ordinary internal link
    Normal,
}

/// A URL waiting to be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    /// The URL to fetch
    pub url: String,

    /// Priority class the URL was queued with
    pub priority: Priority,
}

/// Two-queue frontier with an O(1) visited set
#[derive(Debug, Default)]
pub struct Frontier {
    key: VecDeque<String>,
    normal: VecDeque<String>,
    queued: HashSet<String>,
    visited: HashSet<String>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a frontier holding only the seed URL
    pub fn with_seed(seed: impl Into<String>) -> Self {
        let mut frontier = Self::new();
        frontier.push(seed.into(), Priority::Normal);
        frontier
    }

    /// Enqueues a URL with the given priority
    ///
    /// # Returns
    ///
    /// * `true` - The URL was added
    /// * `false` - The URL was already queued or visited
    pub fn push(&mut self, url: String, priority: Priority) -> bool {
        if self.visited.contains(&url) || self.queued.contains(&url) {
            return false;
        }

        tracing::trace!("Frontier push ({:?}): {}", priority, url);
        self.queued.insert(url.clone());
        match priority {
            Priority::Key => self.key.push_back(url),
            Priority::Normal => self.normal.push_back(url),
        }
        true
    }

    /// Enqueues a key page
    pub fn push_key(&mut self, url: String) -> bool {
        self.push(url, Priority::Key)
    }

    /// Enqueues an ordinary internal link
    pub fn push_normal(&mut self, url: String) -> bool {
        self.push(url, Priority::Normal)
    }

    /// Removes the next entry: oldest key page first, then oldest normal link
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        let entry = if let Some(url) = self.key.pop_front() {
            FrontierEntry {
                url,
                priority: Priority::Key,
            }
        } else {
            FrontierEntry {
                url: self.normal.pop_front()?,
                priority: Priority::Normal,
            }
        };

        self.queued.remove(&entry.url);
        Some(entry)
    }

    /// Marks a URL as dequeued for fetch
    ///
    /// Returns false if it was already visited.
    pub fn mark_visited(&mut self, url: &str) -> bool {
        self.visited.insert(url.to_string())
    }

    /// Returns true if the URL has been dequeued for fetch
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Returns true if the URL is waiting in the frontier
    pub fn is_queued(&self, url: &str) -> bool {
        self.queued.contains(url)
    }

    /// Number of URLs waiting
    pub fn len(&self) -> usize {
        self.key.len() + self.normal.len()
    }

    /// Returns true if nothing is waiting
    pub fn is_empty(&self) -> bool {
        self.key.is_empty() && self.normal.is_empty()
    }

    /// Number of URLs ever dequeued for fetch
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
