//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the wave loop that drives a crawl:
//! - Assembling batches from the frontier within the page budget
//! - Fetching, parsing and classifying a batch concurrently
//! - Merging discovered links back into the frontier
//! - Aggregating the collected pages into the final report
//!
//! A wave is a `join_all` over the batch's futures, polled on the calling
//! task. The frontier is only touched between waves, so no locking is needed.

use crate::classify::classify_page;
use crate::config::CrawlerConfig;
use crate::crawler::fetcher::{FetchResult, Fetcher};
use crate::crawler::frontier::Frontier;
use crate::crawler::links::{extract_links, ExtractedLinks};
use crate::crawler::parser::parse_html;
use crate::output::{aggregate, CrawlReport, CrawlStats, LinkCounts, PageRecord};
use crate::state::CrawlPhase;
use crate::url::{normalize_seed, parse_seed, ScopeDescriptor};
use crate::SurveyError;
use futures::future::join_all;
use std::time::Instant;
use url::Url;

/// Limits for a single crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlSettings {
    /// Maximum number of pages collected
    pub max_pages: usize,

    /// Maximum number of fetches in flight per wave
    pub concurrency: usize,
}

impl Default for CrawlSettings {
    fn default() -> Self {
        Self {
            max_pages: 10,
            concurrency: 5,
        }
    }
}

impl From<&CrawlerConfig> for CrawlSettings {
    fn from(config: &CrawlerConfig) -> Self {
        Self {
            max_pages: config.max_pages as usize,
            concurrency: config.concurrency as usize,
        }
    }
}

/// Result of processing one URL
enum PageOutcome {
    Collected {
        record: PageRecord,
        links: ExtractedLinks,
    },
    Failed {
        url: String,
        reason: String,
    },
}

/// Main crawler coordinator structure
pub struct Coordinator<F: Fetcher> {
    base_url: String,
    seed_url: Url,
    scope: ScopeDescriptor,
    frontier: Frontier,
    fetcher: F,
    settings: CrawlSettings,
    pages: Vec<PageRecord>,
    successful: usize,
    failed: usize,
    phase: CrawlPhase,
}

impl<F: Fetcher> Coordinator<F> {
    /// Creates a coordinator for the given seed
    ///
    /// # Arguments
    ///
    /// * `seed` - The seed URL; a missing scheme defaults to https
    /// * `settings` - Page budget and wave width
    /// * `fetcher` - The fetcher used for every request
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(SurveyError::Scope)` - The seed could not be resolved
    pub fn new(seed: &str, settings: CrawlSettings, fetcher: F) -> Result<Self, SurveyError> {
        let base_url = normalize_seed(seed)?;
        let seed_url = parse_seed(&base_url)?;
        let scope = ScopeDescriptor::from_url(&seed_url)?;

        tracing::debug!(
            "Scope for {}: domain={} path-prefix={:?}",
            base_url,
            scope.domain,
            scope.path_prefix
        );

        Ok(Self {
            base_url,
            scope,
            frontier: Frontier::with_seed(seed_url.to_string()),
            seed_url,
            fetcher,
            settings: CrawlSettings {
                max_pages: settings.max_pages,
                concurrency: settings.concurrency.max(1),
            },
            pages: Vec::new(),
            successful: 0,
            failed: 0,
            phase: CrawlPhase::Running,
        })
    }

    /// Runs the crawl to completion and returns the report
    ///
    /// Per-page failures are counted and logged; they never end the crawl.
    pub async fn run(mut self) -> Result<CrawlReport, SurveyError> {
        tracing::info!(
            "Starting crawl of {} (max {} pages, {} concurrent)",
            self.base_url,
            self.settings.max_pages,
            self.settings.concurrency
        );

        let start_time = Instant::now();
        let mut wave = 0;

        while !self.frontier.is_empty() && self.pages.len() < self.settings.max_pages {
            let batch = self.next_batch();
            if batch.is_empty() {
                continue;
            }

            wave += 1;
            tracing::debug!("Wave {}: dispatching {} URLs", wave, batch.len());

            let outcomes = join_all(batch.iter().map(|url| self.process_url(url))).await;
            self.merge(outcomes);

            tracing::info!(
                "Progress: {} pages collected, {} failed, {} in frontier",
                self.pages.len(),
                self.failed,
                self.frontier.len()
            );
        }

        self.phase = self.phase.transition(CrawlPhase::Done)?;

        let elapsed = start_time.elapsed();
        tracing::info!(
            "Crawl {}: {} pages collected, {} failed in {:.2?}",
            self.phase,
            self.pages.len(),
            self.failed,
            elapsed
        );

        let stats = CrawlStats::new(self.successful, self.failed, elapsed.as_secs_f64());
        Ok(aggregate(&self.base_url, self.pages, stats))
    }

    /// Pops the next wave's URLs, marking each visited
    fn next_batch(&mut self) -> Vec<Url> {
        let mut batch = Vec::new();

        while batch.len() < self.settings.concurrency
            && self.pages.len() + batch.len() < self.settings.max_pages
        {
            let entry = match self.frontier.pop() {
                Some(entry) => entry,
                None => break,
            };

            if !self.frontier.mark_visited(&entry.url) {
                tracing::trace!("Skipping already visited {}", entry.url);
                continue;
            }

            match Url::parse(&entry.url) {
                Ok(url) if self.scope.contains(&url) => batch.push(url),
                _ => tracing::debug!("Skipping out-of-scope {}", entry.url),
            }
        }

        batch
    }

    /// Fetches, parses and classifies a single URL
    async fn process_url(&self, url: &Url) -> PageOutcome {
        let (status_code, body) = match self.fetcher.fetch(url).await {
            FetchResult::Success { status_code, body, .. } => (status_code, body),
            FetchResult::Failure { reason } => {
                return PageOutcome::Failed {
                    url: url.to_string(),
                    reason,
                }
            }
        };

        let parsed = parse_html(&body);
        let classification =
            classify_page(url.as_str(), &parsed.title, &parsed.text, &parsed.document);
        // Relative hrefs resolve against the seed URL
        let links = extract_links(&self.seed_url, &parsed.anchors, &self.scope);

        tracing::debug!(
            "Classified {} as {} ({} products, {} internal links)",
            url,
            classification.page_type,
            classification.product_count,
            links.internal.len()
        );

        let counts = LinkCounts {
            internal: links.internal.len(),
            external: links.external.len(),
        };
        let record = PageRecord::new(
            url.to_string(),
            parsed.title,
            status_code,
            &parsed.text,
            classification,
            counts,
        );

        PageOutcome::Collected { record, links }
    }

    /// Folds a wave's outcomes into the page list and the frontier
    fn merge(&mut self, outcomes: Vec<PageOutcome>) {
        let mut discovered = Vec::new();

        for outcome in outcomes {
            match outcome {
                PageOutcome::Collected { record, links } => {
                    self.successful += 1;
                    self.pages.push(record);
                    discovered.push(links);
                }
                PageOutcome::Failed { url, reason } => {
                    self.failed += 1;
                    tracing::warn!("Failed to crawl {}: {}", url, reason);
                }
            }
        }

        for links in &discovered {
            for url in &links.key_pages {
                if self.frontier.push_key(url.clone()) {
                    tracing::trace!("Queued key page {}", url);
                }
            }
        }
        for links in discovered {
            for url in links.internal {
                self.frontier.push_normal(url);
            }
        }
    }
}
