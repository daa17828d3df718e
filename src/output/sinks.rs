//! File-backed report sinks

use crate::output::digest::render_digest;
use crate::output::markdown::generate_markdown_summary;
use crate::output::report::CrawlReport;
use crate::output::traits::{OutputResult, ReportSink};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes a report as pretty-printed JSON
pub fn write_json_report(report: &CrawlReport, path: &Path) -> OutputResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Sink writing the full JSON report to a file
#[derive(Debug, Clone)]
pub struct JsonReportSink {
    path: PathBuf,
}

impl JsonReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for JsonReportSink {
    fn name(&self) -> &str {
        "json-report"
    }

    fn write(&self, report: &CrawlReport) -> OutputResult<()> {
        write_json_report(report, &self.path)?;
        tracing::info!("Report written to {}", self.path.display());
        Ok(())
    }
}

/// Sink writing the markdown summary to a file
#[derive(Debug, Clone)]
pub struct MarkdownSummarySink {
    path: PathBuf,
}

impl MarkdownSummarySink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for MarkdownSummarySink {
    fn name(&self) -> &str {
        "markdown-summary"
    }

    fn write(&self, report: &CrawlReport) -> OutputResult<()> {
        generate_markdown_summary(report, &self.path)?;
        tracing::info!("Summary written to {}", self.path.display());
        Ok(())
    }
}

/// Sink writing the plain-text page digest to a file
#[derive(Debug, Clone)]
pub struct DigestSink {
    path: PathBuf,
}

impl DigestSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for DigestSink {
    fn name(&self) -> &str {
        "digest"
    }

    fn write(&self, report: &CrawlReport) -> OutputResult<()> {
        std::fs::write(&self.path, render_digest(report))?;
        Ok(())
    }
}
