//! HTML parser for extracting the title, anchors and visible text
//!
//! This module turns a fetched body into the three inputs the rest of the
//! crawl engine needs:
//! - The page title (falls back to `Untitled`)
//! - Every `<a href>` with its visible anchor text
//! - The visible text of the page, with script-like elements excluded
//!
//! The parsed document is kept so the classifier can run structural
//! selectors against it.

use scraper::{ElementRef, Html, Selector};

/// Title reported for pages without a usable `<title>`
pub const UNTITLED: &str = "Untitled";

/// Elements whose text never counts as visible content
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// An anchor found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Raw href attribute value
    pub href: String,

    /// Visible text inside the anchor, whitespace-collapsed
    pub text: String,
}

/// Extracted information from an HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// The page title (from <title> tag)
    pub title: String,

    /// All anchors with an href, in document order
    pub anchors: Vec<Anchor>,

    /// Visible text joined with single spaces
    pub text: String,

    /// The parsed document
    pub document: Html,
}

/// Parses HTML content and extracts title, anchors and visible text
///
/// # Example
///
/// ```
/// use site_survey::crawler::parse_html;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let parsed = parse_html(html);
/// assert_eq!(parsed.title, "Test");
/// assert_eq!(parsed.anchors[0].href, "/page");
/// ```
pub fn parse_html(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    let title = extract_title(&document).unwrap_or_else(|| UNTITLED.to_string());
    let anchors = extract_anchors(&document);
    let text = extract_visible_text(&document);

    ParsedPage {
        title,
        anchors,
        text,
        document,
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extracts every anchor that carries an href
fn extract_anchors(document: &Html) -> Vec<Anchor> {
    let mut anchors = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                anchors.push(Anchor {
                    href: href.to_string(),
                    text: collapse_text(element.text()),
                });
            }
        }
    }

    anchors
}

/// Collects the visible text of the document
fn extract_visible_text(document: &Html) -> String {
    let mut pieces = Vec::new();
    collect_visible_text(document.root_element(), &mut pieces);
    pieces.join(" ")
}

fn collect_visible_text(element: ElementRef<'_>, pieces: &mut Vec<String>) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                pieces.push(trimmed.to_string());
            }
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if !HIDDEN_ELEMENTS.contains(&child_element.value().name()) {
                collect_visible_text(child_element, pieces);
            }
        }
    }
}

/// Joins text fragments, trimming each and dropping empty ones
fn collapse_text<'a>(fragments: impl Iterator<Item = &'a str>) -> String {
    fragments
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title() {
        let html = r#"<html><head><title>Test Page</title></head><body></body></html>"#;
        assert_eq!(parse_html(html).title, "Test Page");
    }

    #[test]
    fn test_extract_title_with_whitespace() {
        let html = r#"<html><head><title>  Test Page  </title></head><body></body></html>"#;
        assert_eq!(parse_html(html).title, "Test Page");
    }

    #[test]
    fn test_missing_title_is_untitled() {
        let html = r#"<html><head></head><body>Hello</body></html>"#;
        assert_eq!(parse_html(html).title, UNTITLED);
    }

    #[test]
    fn test_blank_title_is_untitled() {
        let html = r#"<html><head><title>   </title></head><body></body></html>"#;
        assert_eq!(parse_html(html).title, UNTITLED);
    }

    #[test]
    fn test_anchor_href_and_text() {
        let html = r#"<html><body><a href="/about"> About <b>Us</b> </a></body></html>"#;
        let parsed = parse_html(html);
        assert_eq!(
            parsed.anchors,
            vec![Anchor {
                href: "/about".to_string(),
                text: "About Us".to_string(),
            }]
        );
    }

    #[test]
    fn test_anchor_without_href_skipped() {
        let html = r#"<html><body><a name="top">Top</a><a href="/x">X</a></body></html>"#;
        let parsed = parse_html(html);
        assert_eq!(parsed.anchors.len(), 1);
        assert_eq!(parsed.anchors[0].href, "/x");
    }

    #[test]
    fn test_special_scheme_anchors_kept_raw() {
        let html = r#"<html><body><a href="mailto:a@b.com">Mail</a></body></html>"#;
        let parsed = parse_html(html);
        assert_eq!(parsed.anchors[0].href, "mailto:a@b.com");
    }

    #[test]
    fn test_visible_text_excludes_scripts_and_styles() {
        let html = r#"
            <html>
            <head><title>T</title><style>.a { color: red; }</style></head>
            <body>
                <p>Hello</p>
                <script>var hidden = "SKU12345";</script>
                <noscript>Enable JS</noscript>
                <p>World</p>
            </body>
            </html>
        "#;
        let parsed = parse_html(html);
        assert_eq!(parsed.text, "T Hello World");
    }

    #[test]
    fn test_visible_text_of_nested_elements() {
        let html = r#"<html><body><div><span>Buy</span> <em>now</em></div></body></html>"#;
        assert_eq!(parse_html(html).text, "Buy now");
    }
}
