//! Integration tests for the survey pipeline
//!
//! A survey runs against a wiremock server and hands its report to file
//! sinks inside a temporary directory.

use site_survey::config::{Config, OutputConfig, RateLimitConfig};
use site_survey::output::{digest_totals, CrawlReport};
use site_survey::{SiteSurvey, SurveyError, SurveyOutcome};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_shop(server: &MockServer) {
    let pages = [
        (
            "/",
            r#"<html><head><title>Lamp Shop</title></head><body>
               <a href="/about">About</a> <a href="/catalog">Catalog</a>
               </body></html>"#,
        ),
        (
            "/about",
            "<html><head><title>About</title></head><body>Our story</body></html>",
        ),
        (
            "/catalog",
            r#"<html><head><title>Catalog</title></head><body>
               <div class="product">A</div><div class="product">B</div>
               <div class="product">C</div></body></html>"#,
        ),
    ];

    for (page_path, html) in pages {
        Mock::given(method("GET"))
            .and(path(page_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(html))
            .mount(server)
            .await;
    }
}

#[tokio::test]
async fn test_survey_writes_configured_files() {
    let server = MockServer::start().await;
    mount_shop(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("report.json");
    let summary_path = dir.path().join("summary.md");
    let digest_path = dir.path().join("digest.txt");

    let output = OutputConfig {
        report_path: Some(report_path.display().to_string()),
        summary_path: Some(summary_path.display().to_string()),
        digest_path: Some(digest_path.display().to_string()),
    };
    let survey = SiteSurvey::new(Config::default()).with_output_sinks(&output);

    let run = match survey.survey(&server.uri()).await.unwrap() {
        SurveyOutcome::Completed(run) => run,
        SurveyOutcome::Empty(_) => panic!("expected pages"),
    };

    assert!(run.sink_failures.is_empty());
    assert_eq!(run.report.total_pages, 3);
    assert_eq!(run.report.total_skus, 3);

    let written: CrawlReport =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(written, run.report);

    let summary = std::fs::read_to_string(&summary_path).unwrap();
    assert!(summary.contains("- **Total SKUs**: 3"));

    let totals = digest_totals(&std::fs::read_to_string(&digest_path).unwrap());
    assert_eq!(totals.pages, 3);
    assert_eq!(totals.skus, 3);
}

#[tokio::test]
async fn test_unwritable_sink_does_not_fail_survey() {
    let server = MockServer::start().await;
    mount_shop(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let summary_path = dir.path().join("summary.md");
    let output = OutputConfig {
        report_path: Some(
            dir.path()
                .join("missing-dir")
                .join("report.json")
                .display()
                .to_string(),
        ),
        summary_path: Some(summary_path.display().to_string()),
        digest_path: None,
    };
    let survey = SiteSurvey::new(Config::default()).with_output_sinks(&output);

    let run = survey.survey(&server.uri()).await.unwrap().into_run();

    assert_eq!(run.sink_failures.len(), 1);
    assert_eq!(run.sink_failures[0].sink, "json-report");
    assert!(summary_path.exists());
    assert_eq!(run.report.total_pages, 3);
}

#[tokio::test]
async fn test_blocked_site_is_empty_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("report.json");
    let output = OutputConfig {
        report_path: Some(report_path.display().to_string()),
        summary_path: None,
        digest_path: None,
    };
    let survey = SiteSurvey::new(Config::default()).with_output_sinks(&output);

    let outcome = survey.survey(&server.uri()).await.unwrap();

    assert!(outcome.is_empty());
    assert_eq!(outcome.report().crawl_stats.failed, 1);
    assert!(!report_path.exists());
}

#[tokio::test]
async fn test_repeat_guard_refuses_after_threshold() {
    let server = MockServer::start().await;
    mount_shop(&server).await;

    let config = Config {
        rate_limit: RateLimitConfig {
            threshold: 2,
            ..RateLimitConfig::default()
        },
        ..Config::default()
    };
    let survey = SiteSurvey::new(config);
    let url = server.uri();

    assert!(survey.survey(&url).await.is_ok());
    assert!(survey.survey(&url).await.is_ok());

    match survey.survey(&url).await {
        Err(SurveyError::RepeatedRequest { url: refused }) => assert_eq!(refused, url),
        other => panic!("expected a refusal, got {:?}", other.map(|o| o.is_empty())),
    }

    // Refused surveys never reach the site
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 6);
}
