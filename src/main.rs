//! Site-Survey main entry point
//!
//! This is the command-line interface for the Site-Survey crawler.

use anyhow::Context;
use clap::Parser;
use site_survey::config::{load_config_with_hash, validate, Config};
use site_survey::output::print_statistics;
use site_survey::{SiteSurvey, SurveyError, SurveyOutcome};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Pages collected when no budget is given or the prompt answer is invalid
const DEFAULT_MAX_PAGES: u32 = 10;

/// Site-Survey: a single-site business information crawler
///
/// Site-Survey crawls one website within its domain and path prefix,
/// fetching About, Contact and policy pages first, classifies every page
/// it collects and prints a structured JSON report.
#[derive(Parser, Debug)]
#[command(name = "site-survey")]
#[command(version = "1.0.0")]
#[command(about = "A single-site business information crawler", long_about = None)]
struct Cli {
    /// Website to survey; prompted for when omitted
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Maximum number of pages to collect
    #[arg(long, value_name = "N")]
    max: Option<u32>,

    /// Maximum number of concurrent fetches
    #[arg(long, value_name = "N")]
    concurrency: Option<u32>,

    /// Path to TOML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the JSON report to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Write a markdown summary to this file
    #[arg(long, value_name = "PATH")]
    summary: Option<PathBuf>,

    /// Write the plain-text page digest to this file
    #[arg(long, value_name = "PATH")]
    digest: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    let url = match cli.url.clone() {
        Some(url) => url,
        None => prompt("Enter website URL to crawl: ")?,
    };
    if url.trim().is_empty() {
        eprintln!("URL required.");
        return Ok(ExitCode::FAILURE);
    }

    let max_pages = match cli.max {
        Some(max) => Some(max),
        None if cli.config.is_none() && io::stdin().is_terminal() => {
            let answer = prompt(&format!(
                "Max number of pages to crawl (default {}): ",
                DEFAULT_MAX_PAGES
            ))?;
            Some(parse_max_pages(&answer))
        }
        None => None,
    };

    apply_overrides(&mut config, &cli, max_pages);
    validate(&config).context("Invalid settings")?;

    handle_survey(config, &url, cli.quiet).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout is reserved for the JSON report.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_survey=info,warn"),
            1 => EnvFilter::new("site_survey=debug,info"),
            2 => EnvFilter::new("site_survey=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Prints a prompt to stderr and reads one trimmed line from stdin
fn prompt(message: &str) -> io::Result<String> {
    eprint!("{}", message);
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Parses a page budget answer; empty or invalid input means the default
fn parse_max_pages(answer: &str) -> u32 {
    answer.trim().parse().unwrap_or(DEFAULT_MAX_PAGES)
}

/// Applies command-line flags on top of the file configuration
fn apply_overrides(config: &mut Config, cli: &Cli, max_pages: Option<u32>) {
    if let Some(max) = max_pages {
        config.crawler.max_pages = max;
    }
    if let Some(concurrency) = cli.concurrency {
        config.crawler.concurrency = concurrency;
    }
    if let Some(path) = &cli.output {
        config.output.report_path = Some(path.display().to_string());
    }
    if let Some(path) = &cli.summary {
        config.output.summary_path = Some(path.display().to_string());
    }
    if let Some(path) = &cli.digest {
        config.output.digest_path = Some(path.display().to_string());
    }
}

/// Handles the main survey operation
async fn handle_survey(config: Config, url: &str, quiet: bool) -> anyhow::Result<ExitCode> {
    tracing::info!(
        "Surveying {} (max {} pages, {} concurrent)",
        url,
        config.crawler.max_pages,
        config.crawler.concurrency
    );

    let write_to_stdout = config.output.report_path.is_none();
    let survey = SiteSurvey::new(config.clone()).with_output_sinks(&config.output);

    let outcome = match survey.survey(url).await {
        Ok(outcome) => outcome,
        Err(SurveyError::RepeatedRequest { url }) => {
            eprintln!("Too many requests for {}. Try again later.", url);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            tracing::error!("Survey failed: {}", e);
            return Err(e.into());
        }
    };

    let run = match outcome {
        SurveyOutcome::Empty(_) => {
            eprintln!("No pages crawled. Site may be blocking bots.");
            return Ok(ExitCode::FAILURE);
        }
        SurveyOutcome::Completed(run) => run,
    };

    for failure in &run.sink_failures {
        eprintln!("Could not write {}: {}", failure.sink, failure.message);
    }

    if write_to_stdout {
        let json =
            serde_json::to_string_pretty(&run.report).context("Failed to serialize report")?;
        println!("{}", json);
    }

    if !quiet {
        print_statistics(&run.report);
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_max_pages() {
        assert_eq!(parse_max_pages("25"), 25);
        assert_eq!(parse_max_pages(" 3 "), 3);
        assert_eq!(parse_max_pages(""), DEFAULT_MAX_PAGES);
        assert_eq!(parse_max_pages("lots"), DEFAULT_MAX_PAGES);
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "site-survey",
            "example.com",
            "--concurrency",
            "3",
            "--output",
            "report.json",
            "--digest",
            "digest.txt",
        ]);
        let mut config = Config::default();
        apply_overrides(&mut config, &cli, Some(7));

        assert_eq!(config.crawler.max_pages, 7);
        assert_eq!(config.crawler.concurrency, 3);
        assert_eq!(config.output.report_path.as_deref(), Some("report.json"));
        assert_eq!(config.output.summary_path, None);
        assert_eq!(config.output.digest_path.as_deref(), Some("digest.txt"));
    }
}
