//! Markdown summary generation
//!
//! This module generates human-readable markdown summaries of crawl reports,
//! including crawl statistics, the page-type breakdown, content-presence
//! counts and a per-page table.

use crate::output::report::CrawlReport;
use crate::output::traits::OutputResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Generates a markdown summary file from a crawl report
///
/// # Arguments
///
/// * `report` - The crawl report
/// * `output_path` - Path where the markdown file should be written
pub fn generate_markdown_summary(report: &CrawlReport, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_summary(report);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a crawl report as markdown
pub fn format_markdown_summary(report: &CrawlReport) -> String {
    let mut md = String::new();

    md.push_str("# Site Survey Summary\n\n");

    // Crawl information
    md.push_str("## Crawl Information\n\n");
    md.push_str(&format!("- **Base URL**: {}\n", report.base_url));
    md.push_str(&format!(
        "- **Duration**: {:.2} seconds\n",
        report.crawl_stats.total_time
    ));
    md.push_str(&format!(
        "- **Successful Fetches**: {}\n",
        report.crawl_stats.successful
    ));
    md.push_str(&format!(
        "- **Failed Fetches**: {}\n\n",
        report.crawl_stats.failed
    ));

    if report.is_empty() {
        md.push_str("No pages could be crawled. The site may be blocking automated requests.\n");
        return md;
    }

    // Overall statistics
    md.push_str("## Overall Statistics\n\n");
    md.push_str(&format!("- **Total Pages**: {}\n", report.total_pages));
    md.push_str(&format!("- **Total SKUs**: {}\n", report.total_skus));
    md.push_str(&format!(
        "- **Internal Links**: {}\n",
        report.summary.total_internal_links
    ));
    md.push_str(&format!(
        "- **External Links**: {}\n\n",
        report.summary.total_external_links
    ));

    // Page types
    md.push_str("## Pages by Type\n\n");
    md.push_str("| Type | Count |\n");
    md.push_str("|------|-------|\n");
    for (page_type, count) in &report.pages_by_type {
        md.push_str(&format!("| {} | {} |\n", page_type, count));
    }
    md.push('\n');

    // Content presence
    let summary = &report.summary;
    md.push_str("## Content Presence\n\n");
    md.push_str("| Content | Pages |\n");
    md.push_str("|---------|-------|\n");
    md.push_str(&format!("| About Us | {} |\n", summary.about_us_pages));
    md.push_str(&format!("| Contact | {} |\n", summary.contact_pages));
    md.push_str(&format!("| Terms | {} |\n", summary.terms_pages));
    md.push_str(&format!("| Privacy | {} |\n", summary.privacy_pages));
    md.push_str(&format!("| Products | {} |\n", summary.product_pages));
    md.push_str(&format!("| Services | {} |\n\n", summary.service_pages));

    // Pages
    md.push_str("## Pages\n\n");
    md.push_str("| URL | Title | Type | SKUs |\n");
    md.push_str("|-----|-------|------|------|\n");
    for page in &report.pages {
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            page.url,
            escape_cell(&page.title),
            page.page_type,
            page.product_count
        ));
    }
    md.push('\n');

    md
}

/// Escapes characters that would break a markdown table cell
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}
