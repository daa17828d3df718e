//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use site_survey::config::{Config, CrawlerConfig, UserAgentConfig};
use site_survey::crawler::{crawl, crawl_with_config};
use site_survey::PageType;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts an HTML page at the given path
async fn mount_page(server: &MockServer, page_path: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Mounts an HTML page that must be requested exactly `times` times
async fn mount_page_expecting(server: &MockServer, page_path: &str, html: String, times: u64) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html)
                .insert_header("content-type", "text/html"),
        )
        .expect(times)
        .mount(server)
        .await;
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<html><head><title>{}</title></head><body>{}</body></html>",
        title, body
    )
}

#[tokio::test]
async fn test_three_page_fixture() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(
        &server,
        "/",
        page(
            "Home",
            r#"<a href="/about">About us</a> <a href="/widget-1">Widget</a>"#,
        ),
    )
    .await;
    mount_page(&server, "/about", page("About", "Our story")).await;
    mount_page(
        &server,
        "/widget-1",
        page("Widget", r#"<div class="product">Widget</div>"#),
    )
    .await;

    let report = crawl(&base_url, 2, 2).await.unwrap();

    assert_eq!(report.base_url, base_url);
    assert_eq!(report.total_pages, 2);
    assert_eq!(report.pages[0].url, format!("{}/", base_url));
    assert_eq!(report.pages[0].title, "Home");
    assert_eq!(report.pages[0].links.internal, 2);
    // The key page takes the last slot ahead of the product page
    assert_eq!(report.pages[1].url, format!("{}/about", base_url));
    assert_eq!(report.pages[1].page_type, PageType::About);
    assert_eq!(report.crawl_stats.successful, 2);
    assert_eq!(report.crawl_stats.failed, 0);
}

#[tokio::test]
async fn test_key_pages_before_catalog() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(
        &server,
        "/",
        page(
            "Home",
            r#"<a href="/shop/1">One</a>
               <a href="/shop/2">Two</a>
               <a href="/terms">Terms of service</a>
               <a href="/reach-us">Contact</a>"#,
        ),
    )
    .await;
    for p in ["/shop/1", "/shop/2", "/terms", "/reach-us"] {
        mount_page(&server, p, page("Page", "")).await;
    }

    let report = crawl(&base_url, 10, 1).await.unwrap();

    let paths: Vec<String> = report
        .pages
        .iter()
        .map(|p| p.url.trim_start_matches(&base_url).to_string())
        .collect();
    assert_eq!(paths, vec!["/", "/terms", "/reach-us", "/shop/1", "/shop/2"]);
}

#[tokio::test]
async fn test_non_success_status_counted_as_failure() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(
        &server,
        "/",
        page(
            "Home",
            r#"<a href="/broken">Broken</a> <a href="/fine">Fine</a>"#,
        ),
    )
    .await;
    mount_page(&server, "/fine", page("Fine", "All good")).await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let report = crawl(&base_url, 10, 5).await.unwrap();

    assert_eq!(report.total_pages, 2);
    assert_eq!(report.crawl_stats.successful, 2);
    assert_eq!(report.crawl_stats.failed, 1);
    assert!(report.pages.iter().all(|p| !p.url.ends_with("/broken")));
}

#[tokio::test]
async fn test_path_prefix_scope() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(
        &server,
        "/store",
        page(
            "Store",
            r#"<a href="/store/widget">Widget</a>
               <a href="/blog/post">Blog</a>
               <a href="https://elsewhere.example/store">Partner</a>
               <a href="mailto:hi@example.com">Mail</a>"#,
        ),
    )
    .await;
    mount_page(&server, "/store/widget", page("Widget", "")).await;
    mount_page_expecting(&server, "/blog/post", page("Blog", ""), 0).await;

    let report = crawl(&format!("{}/store", base_url), 10, 5).await.unwrap();

    assert_eq!(report.total_pages, 2);
    assert_eq!(report.pages[0].links.internal, 1);
    assert_eq!(report.pages[0].links.external, 3);
    assert_eq!(report.summary.total_external_links, 3);
}

#[tokio::test]
async fn test_each_page_fetched_once() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page_expecting(
        &server,
        "/",
        page(
            "Home",
            r#"<a href="/a">A</a> <a href="/a#details">A again</a> <a href="/">Home</a>"#,
        ),
        1,
    )
    .await;
    mount_page_expecting(
        &server,
        "/a",
        page("A", r#"<a href="/">Back</a> <a href="/a">Self</a>"#),
        1,
    )
    .await;

    let report = crawl(&base_url, 10, 3).await.unwrap();

    assert_eq!(report.total_pages, 2);
    assert_eq!(report.crawl_stats.attempted(), 2);
}

#[tokio::test]
async fn test_budget_caps_collected_pages() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    let links: String = (0..20)
        .map(|i| format!(r#"<a href="/item-{}">Item {}</a>"#, i, i))
        .collect();
    mount_page(&server, "/", page("Home", &links)).await;
    for i in 0..20 {
        mount_page(&server, &format!("/item-{}", i), page("Item", "")).await;
    }

    let report = crawl(&base_url, 5, 3).await.unwrap();

    assert_eq!(report.total_pages, 5);
    assert_eq!(report.crawl_stats.attempted(), 5);
}

#[tokio::test]
async fn test_product_page_classified() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    let cards: String = (0..5)
        .map(|i| format!(r#"<div class="product-card">Lamp {}</div>"#, i))
        .collect();
    let items: String = (0..3)
        .map(|i| format!(r#"<div class="shop-item">Lamp {}</div>"#, i))
        .collect();
    mount_page(
        &server,
        "/",
        page("Lamps", &format!("{}{}<button>Add to cart</button>", cards, items)),
    )
    .await;

    let report = crawl(&base_url, 1, 1).await.unwrap();

    let home = &report.pages[0];
    assert_eq!(home.product_count, 5);
    assert!(home.has_products);
    assert_eq!(report.total_skus, 5);
}

#[tokio::test]
async fn test_unreachable_site_yields_empty_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let report = crawl(&server.uri(), 10, 5).await.unwrap();

    assert!(report.is_empty());
    assert_eq!(report.crawl_stats.failed, 1);
}

#[tokio::test]
async fn test_configured_identity_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "SurveyTest/1.0"))
        .and(header("accept-language", "de-DE"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page("Home", "")))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        crawler: CrawlerConfig {
            max_pages: 1,
            concurrency: 1,
            timeout_secs: 5,
        },
        user_agent: UserAgentConfig {
            identity: "SurveyTest/1.0".to_string(),
            accept_language: "de-DE".to_string(),
            ..UserAgentConfig::default()
        },
        ..Config::default()
    };

    let report = crawl_with_config(&server.uri(), &config).await.unwrap();
    assert_eq!(report.total_pages, 1);
}

#[tokio::test]
async fn test_invalid_seed_is_an_error() {
    assert!(crawl("ftp://files.example", 10, 5).await.is_err());
    assert!(crawl("", 10, 5).await.is_err());
}
