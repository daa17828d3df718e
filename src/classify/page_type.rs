//! Page-type detection as an ordered rule table
//!
//! Rules are evaluated top to bottom and the first match wins. URL rules
//! come first, then content/title rules, then the generic keyword fallback.
//! When nothing matches the page is `General`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type assigned to every collected page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PageType {
    About,
    Contact,
    Product,
    Service,
    Terms,
    Privacy,
    General,
}

impl PageType {
    /// Returns the label used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Contact => "Contact",
            Self::Product => "Product",
            Self::Service => "Service",
            Self::Terms => "Terms",
            Self::Privacy => "Privacy",
            Self::General => "General",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Part of the page a matcher looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Url,
    Title,
    Text,
}

/// Matches if any needle occurs in the chosen field
#[derive(Debug)]
pub struct Matcher {
    pub field: Field,
    pub needles: &'static [&'static str],
}

/// One entry of the cascade: matches if any of its matchers does
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub label: PageType,
    pub matchers: &'static [Matcher],
}

/// Lowercased inputs the rules run against
#[derive(Debug, Clone)]
pub struct PageSignals {
    url: String,
    title: String,
    text: String,
}

impl PageSignals {
    pub fn new(url: &str, title: &str, text: &str) -> Self {
        Self {
            url: url.to_lowercase(),
            title: title.to_lowercase(),
            text: text.to_lowercase(),
        }
    }

    fn field(&self, field: Field) -> &str {
        match field {
            Field::Url => &self.url,
            Field::Title => &self.title,
            Field::Text => &self.text,
        }
    }
}

impl Matcher {
    fn matches(&self, signals: &PageSignals) -> bool {
        let haystack = signals.field(self.field);
        self.needles.iter().any(|needle| haystack.contains(needle))
    }
}

impl Rule {
    /// Returns true if any of this rule's matchers match
    pub fn matches(&self, signals: &PageSignals) -> bool {
        self.matchers.iter().any(|m| m.matches(signals))
    }
}

const fn url(needles: &'static [&'static str]) -> Matcher {
    Matcher {
        field: Field::Url,
        needles,
    }
}

const fn title(needles: &'static [&'static str]) -> Matcher {
    Matcher {
        field: Field::Title,
        needles,
    }
}

const fn text(needles: &'static [&'static str]) -> Matcher {
    Matcher {
        field: Field::Text,
        needles,
    }
}

/// The page-type cascade, in precedence order
pub const PAGE_TYPE_RULES: &[Rule] = &[
    // URL structure
    Rule {
        name: "url-about",
        label: PageType::About,
        matchers: &[url(&["/about", "about-us"])],
    },
    Rule {
        name: "url-contact",
        label: PageType::Contact,
        matchers: &[url(&["/contact", "contact-us"])],
    },
    Rule {
        name: "url-product",
        label: PageType::Product,
        matchers: &[url(&["/product", "/shop", "/store"])],
    },
    Rule {
        name: "url-service",
        label: PageType::Service,
        matchers: &[url(&["/service", "/services"])],
    },
    Rule {
        name: "url-terms",
        label: PageType::Terms,
        matchers: &[url(&["/terms", "/tos"])],
    },
    Rule {
        name: "url-privacy",
        label: PageType::Privacy,
        matchers: &[url(&["/privacy", "/policy"])],
    },
    // Content and title phrases
    Rule {
        name: "content-about",
        label: PageType::About,
        matchers: &[text(&["about us", "our story", "our mission"]), title(&["about"])],
    },
    Rule {
        name: "content-contact",
        label: PageType::Contact,
        matchers: &[text(&["contact us", "get in touch"]), title(&["contact"])],
    },
    Rule {
        name: "content-terms",
        label: PageType::Terms,
        matchers: &[
            text(&["terms of service", "terms and conditions"]),
            title(&["terms"]),
        ],
    },
    Rule {
        name: "content-privacy",
        label: PageType::Privacy,
        matchers: &[text(&["privacy policy"]), title(&["privacy"])],
    },
    // Generic keywords
    Rule {
        name: "keyword-commerce",
        label: PageType::Product,
        matchers: &[text(&["add to cart", "buy now", "product", "price", "shop"])],
    },
    Rule {
        name: "keyword-consulting",
        label: PageType::Service,
        matchers: &[text(&["our services", "consulting", "solutions"])],
    },
];

/// Returns the first rule of the cascade that matches
pub fn first_matching_rule(signals: &PageSignals) -> Option<&'static Rule> {
    PAGE_TYPE_RULES.iter().find(|rule| rule.matches(signals))
}

/// Detects the page type from URL, title and visible text
///
/// # Example
///
/// ```
/// use site_survey::classify::{detect_page_type, PageType};
///
/// let page_type = detect_page_type("https://shop.com/about", "Home", "buy now, price");
/// assert_eq!(page_type, PageType::About);
/// ```
pub fn detect_page_type(url: &str, title: &str, text: &str) -> PageType {
    let signals = PageSignals::new(url, title, text);
    first_matching_rule(&signals)
        .map(|rule| {
            tracing::trace!("Page {} matched rule {}", url, rule.name);
            rule.label
        })
        .unwrap_or(PageType::General)
}
