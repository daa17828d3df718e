//! Terminal statistics for a finished crawl
//!
//! Printed to stderr so stdout stays reserved for the JSON report.

use crate::output::report::CrawlReport;

/// Formats the headline statistics of a report
pub fn format_statistics(report: &CrawlReport) -> String {
    let stats = &report.crawl_stats;
    let mut out = String::new();

    out.push_str("=== Crawl Statistics ===\n\n");
    out.push_str(&format!("Base URL: {}\n", report.base_url));
    out.push_str(&format!("Pages collected: {}\n", report.total_pages));
    out.push_str(&format!("Total SKUs: {}\n", report.total_skus));
    out.push_str(&format!("Time: {:.2}s\n\n", stats.total_time));

    if !report.pages_by_type.is_empty() {
        out.push_str("Pages by Type:\n");
        // Sort types by count (descending), then by name
        let mut type_counts: Vec<_> = report.pages_by_type.iter().collect();
        type_counts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        for (page_type, count) in type_counts {
            out.push_str(&format!("  {}: {}\n", page_type, count));
        }
        out.push('\n');
    }

    let attempted = stats.attempted();
    let success_rate = if attempted > 0 {
        (stats.successful as f64 / attempted as f64) * 100.0
    } else {
        0.0
    };

    out.push_str(&format!(
        "Success Rate: {:.1}% ({} / {} fetches succeeded)\n",
        success_rate, stats.successful, attempted
    ));

    out
}

/// Prints the headline statistics of a report to stderr
pub fn print_statistics(report: &CrawlReport) {
    eprint!("{}", format_statistics(report));
}
