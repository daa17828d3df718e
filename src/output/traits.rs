//! Report sink trait and output errors
//!
//! A report sink is a downstream consumer of a finished crawl report (a file
//! writer, a summarizer hand-off). Sinks only ever see a shared reference,
//! so a failing sink cannot alter the report or another sink's input.

use crate::output::report::CrawlReport;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// A downstream consumer of crawl reports
pub trait ReportSink: Send + Sync {
    /// Short name used in logs and failure records
    fn name(&self) -> &str;

    /// Consumes a finished report
    fn write(&self, report: &CrawlReport) -> OutputResult<()>;
}
