//! Survey pipeline: repeat guard, crawl, report sinks
//!
//! `SiteSurvey` runs one survey end to end:
//! 1. Normalizes the seed and checks it against the repeat-request guard
//! 2. Crawls the site
//! 3. Hands the finished report to every registered sink
//!
//! Sinks fail independently. A failing sink is logged and recorded in the
//! run; the remaining sinks still run and the report is returned untouched.
//! An empty crawl skips the sinks entirely.

use crate::config::{Config, OutputConfig};
use crate::crawler::{Coordinator, CrawlSettings, Fetcher, HttpFetcher};
use crate::output::{CrawlReport, DigestSink, JsonReportSink, MarkdownSummarySink, ReportSink};
use crate::state::{RequestWindow, SharedRequestWindow};
use crate::url::normalize_seed;
use crate::SurveyError;

/// A sink that failed to consume a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkFailure {
    /// Name of the failing sink
    pub sink: String,

    /// Error message
    pub message: String,
}

/// A finished survey
#[derive(Debug, Clone)]
pub struct SurveyRun {
    pub report: CrawlReport,
    pub sink_failures: Vec<SinkFailure>,
}

/// How a survey ended
#[derive(Debug, Clone)]
pub enum SurveyOutcome {
    /// At least one page was collected and the sinks ran
    Completed(SurveyRun),

    /// No page could be collected; the site may be blocking crawlers
    Empty(SurveyRun),
}

impl SurveyOutcome {
    /// The crawl report, empty or not
    pub fn report(&self) -> &CrawlReport {
        match self {
            Self::Completed(run) | Self::Empty(run) => &run.report,
        }
    }

    /// Returns true if no page was collected
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    /// Consumes the outcome, returning the run
    pub fn into_run(self) -> SurveyRun {
        match self {
            Self::Completed(run) | Self::Empty(run) => run,
        }
    }
}

/// Runs surveys through the repeat guard and into report sinks
pub struct SiteSurvey {
    config: Config,
    window: SharedRequestWindow,
    sinks: Vec<Box<dyn ReportSink>>,
}

impl SiteSurvey {
    /// Creates a pipeline with its own request window and no sinks
    pub fn new(config: Config) -> Self {
        let window = RequestWindow::from_config(&config.rate_limit).shared();
        Self {
            config,
            window,
            sinks: Vec::new(),
        }
    }

    /// Replaces the request window, e.g. to share it between pipelines
    pub fn with_request_window(mut self, window: SharedRequestWindow) -> Self {
        self.window = window;
        self
    }

    /// Registers a report sink
    pub fn with_sink(mut self, sink: impl ReportSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Registers the file sinks named in the output configuration
    pub fn with_output_sinks(self, output: &OutputConfig) -> Self {
        let mut survey = self;
        if let Some(path) = &output.report_path {
            survey = survey.with_sink(JsonReportSink::new(path));
        }
        if let Some(path) = &output.summary_path {
            survey = survey.with_sink(MarkdownSummarySink::new(path));
        }
        if let Some(path) = &output.digest_path {
            survey = survey.with_sink(DigestSink::new(path));
        }
        survey
    }

    /// The request window guarding this pipeline
    pub fn request_window(&self) -> SharedRequestWindow {
        SharedRequestWindow::clone(&self.window)
    }

    /// Surveys a site over HTTP
    pub async fn survey(&self, seed: &str) -> Result<SurveyOutcome, SurveyError> {
        let fetcher = HttpFetcher::new(&self.config.user_agent, self.config.crawler.timeout_secs)?;
        self.survey_with(seed, fetcher).await
    }

    /// Surveys a site using the given fetcher
    ///
    /// # Returns
    ///
    /// * `Ok(SurveyOutcome)` - The crawl ran, possibly collecting nothing
    /// * `Err(SurveyError::Scope)` - The seed is not a usable URL
    /// * `Err(SurveyError::RepeatedRequest)` - The seed was surveyed too often
    pub async fn survey_with<F: Fetcher>(
        &self,
        seed: &str,
        fetcher: F,
    ) -> Result<SurveyOutcome, SurveyError> {
        let url = normalize_seed(seed)?;
        self.check_repeat(&url)?;

        let settings = CrawlSettings::from(&self.config.crawler);
        let report = Coordinator::new(&url, settings, fetcher)?.run().await?;

        if report.is_empty() {
            tracing::warn!("No pages crawled from {}; the site may be blocking bots", url);
            return Ok(SurveyOutcome::Empty(SurveyRun {
                report,
                sink_failures: Vec::new(),
            }));
        }

        let sink_failures = self.run_sinks(&report);
        Ok(SurveyOutcome::Completed(SurveyRun {
            report,
            sink_failures,
        }))
    }

    fn check_repeat(&self, url: &str) -> Result<(), SurveyError> {
        // A poisoned lock only means another caller panicked mid-record
        let mut window = self.window.lock().unwrap_or_else(|e| e.into_inner());
        if window.record(url) {
            tracing::warn!("Refusing {}: too many recent requests", url);
            return Err(SurveyError::RepeatedRequest {
                url: url.to_string(),
            });
        }
        Ok(())
    }

    fn run_sinks(&self, report: &CrawlReport) -> Vec<SinkFailure> {
        let mut failures = Vec::new();

        for sink in &self.sinks {
            match sink.write(report) {
                Ok(()) => tracing::debug!("Sink {} consumed report", sink.name()),
                Err(e) => {
                    tracing::error!("Sink {} failed: {}", sink.name(), e);
                    failures.push(SinkFailure {
                        sink: sink.name().to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }

        failures
    }
}
