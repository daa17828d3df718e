//! Output module for crawl reports
//!
//! This module handles:
//! - The report data model and the report aggregator
//! - Rendering reports as JSON, markdown and a plain-text digest
//! - Report sinks consumed by the survey pipeline
//! - Terminal statistics

mod digest;
mod markdown;
mod report;
mod sinks;
pub mod stats;
mod traits;

pub use digest::{digest_totals, render_digest, DigestTotals};
pub use markdown::{format_markdown_summary, generate_markdown_summary};
pub use report::{aggregate, CrawlReport, CrawlStats, LinkCounts, PageRecord, ReportSummary};
pub use sinks::{write_json_report, DigestSink, JsonReportSink, MarkdownSummarySink};
pub use stats::{format_statistics, print_statistics};
pub use traits::{OutputError, OutputResult, ReportSink};
