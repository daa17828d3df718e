//! Content-presence flags
//!
//! Six independent booleans. They are not derived from the page type, so a
//! `General` page can still report `has_services`.

use serde::{Deserialize, Serialize};

/// Which kinds of business information a page appears to contain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub has_about_us: bool,
    pub has_terms: bool,
    pub has_privacy: bool,
    pub has_contact: bool,
    pub has_services: bool,
    pub has_products: bool,
}

/// Computes the metadata flags from a page's URL and visible text
pub fn analyze_metadata(url: &str, text: &str) -> PageMetadata {
    let u = url.to_lowercase();
    let c = text.to_lowercase();

    PageMetadata {
        has_about_us: u.contains("about") || c.contains("about us"),
        has_terms: u.contains("terms") || c.contains("terms of service"),
        has_privacy: u.contains("privacy") || c.contains("privacy policy"),
        has_contact: u.contains("contact") || c.contains("contact us"),
        has_services: u.contains("services") || c.contains("our services"),
        has_products: ["product", "shop", "store"]
            .iter()
            .any(|keyword| c.contains(keyword)),
    }
}
