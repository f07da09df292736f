//! Head and heading extraction.
//!
//! This module provides functions to extract:
//! - Page title
//! - Meta description and meta robots
//! - Canonical link and its relation to the requested URL
//! - H1/H2/H3 heading texts

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use strum_macros::{AsRefStr, Display};

use crate::utils::parse_selector_unsafe;

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const META_DESCRIPTION_SELECTOR_STR: &str = "meta[name='description']";
const META_ROBOTS_SELECTOR_STR: &str = "meta[name='robots']";
const CANONICAL_SELECTOR_STR: &str = "link[rel~='canonical']";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));

static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(META_DESCRIPTION_SELECTOR_STR, "META_DESCRIPTION_SELECTOR")
});

static META_ROBOTS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(META_ROBOTS_SELECTOR_STR, "META_ROBOTS_SELECTOR"));

static CANONICAL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(CANONICAL_SELECTOR_STR, "CANONICAL_SELECTOR"));

static H1_SELECTOR: LazyLock<Selector> = LazyLock::new(|| parse_selector_unsafe("h1", "H1"));
static H2_SELECTOR: LazyLock<Selector> = LazyLock::new(|| parse_selector_unsafe("h2", "H2"));
static H3_SELECTOR: LazyLock<Selector> = LazyLock::new(|| parse_selector_unsafe("h3", "H3"));

/// Relation between a page's canonical link and the URL that was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum CanonicalType {
    /// The canonical link equals the requested URL string exactly.
    #[strum(serialize = "Self")]
    SelfReferencing,
    /// No canonical link was declared.
    Missing,
    /// The canonical link points somewhere else.
    Canonicalized,
}

impl CanonicalType {
    /// Classifies a canonical href against the requested URL.
    ///
    /// The comparison is an exact string compare with no normalization, so
    /// `https://example.com` and `https://example.com/` are different.
    pub fn classify(canonical_url: &str, requested_url: &str) -> Self {
        if canonical_url == requested_url {
            CanonicalType::SelfReferencing
        } else if canonical_url.is_empty() {
            CanonicalType::Missing
        } else {
            CanonicalType::Canonicalized
        }
    }
}

/// Trimmed text content of an element (entities decoded, nested tags flattened).
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Extracts the page title from an HTML document.
///
/// Returns the trimmed text of the first `<title>` element, or an empty string
/// if there is none.
pub fn extract_title(document: &Html) -> String {
    match document.select(&TITLE_SELECTOR).next() {
        Some(element) => element_text(element),
        None => {
            log::debug!("No title element found in document");
            String::new()
        }
    }
}

/// Extracts the meta description from an HTML document.
///
/// Reads the `content` attribute of the first `<meta name="description">`,
/// trimmed. A missing tag or missing/empty attribute yields an empty string.
pub fn extract_meta_description(document: &Html) -> String {
    document
        .select(&META_DESCRIPTION_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default()
}

/// Extracts the `href` of the first `<link rel="canonical">`, or an empty string.
pub fn extract_canonical_url(document: &Html) -> String {
    document
        .select(&CANONICAL_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("href"))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Extracts the `content` of `<meta name="robots">` as declared by the page.
///
/// Returns `None` when the tag (or its `content`) is absent; the
/// `"index, follow"` default is applied by the caller, never here, so an
/// assumed directive cannot be mistaken for an observed one.
pub fn extract_meta_robots(document: &Html) -> Option<String> {
    document
        .select(&META_ROBOTS_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
}

/// Trimmed texts of all `<h1>` elements in document order.
pub fn extract_h1_texts(document: &Html) -> Vec<String> {
    extract_heading_texts(document, &H1_SELECTOR)
}

/// Trimmed texts of all `<h2>` elements in document order.
pub fn extract_h2_texts(document: &Html) -> Vec<String> {
    extract_heading_texts(document, &H2_SELECTOR)
}

/// Trimmed texts of all `<h3>` elements in document order.
pub fn extract_h3_texts(document: &Html) -> Vec<String> {
    extract_heading_texts(document, &H3_SELECTOR)
}

fn extract_heading_texts(document: &Html, selector: &Selector) -> Vec<String> {
    document.select(selector).map(element_text).collect()
}
