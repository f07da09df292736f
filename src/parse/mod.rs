//! HTML parsing and on-page signal extraction.
//!
//! This module extracts the structural SEO fields of a page:
//! - Title, meta description, canonical link, meta robots
//! - Headings (H1 count/text, H2/H3 texts)
//! - Visible text and word count
//! - Internal links and image alt coverage
//! - Structured data type names (JSON-LD, microdata, raw-text fallback)
//!
//! All parsing is done using CSS selectors via the `scraper` crate.

mod content;
mod html;
mod links;
mod structured;

use log::debug;
use scraper::Html;

// Re-export public API
pub use content::{extract_visible_text, VisibleText};
pub use html::{
    extract_canonical_url, extract_h1_texts, extract_h2_texts, extract_h3_texts,
    extract_meta_description, extract_meta_robots, extract_title, CanonicalType,
};
pub use links::{audit_images, count_internal_links, request_host, ImageAudit};
pub use structured::{collect_types, extract_structured_data, StructuredData};

use crate::config::DEFAULT_META_ROBOTS;

/// Structural fields extracted from one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStructure {
    /// Trimmed text of the first `<title>`; empty when absent.
    pub title: String,
    /// Trimmed meta description; empty when absent.
    pub meta_description: String,
    /// Canonical href; empty when absent.
    pub canonical_url: String,
    /// Relation of the canonical href to the requested URL.
    pub canonical_type: CanonicalType,
    /// Robots directive as declared; `None` when the page declares none.
    pub meta_robots: Option<String>,
    /// Texts of all H1 elements in document order.
    pub h1_texts: Vec<String>,
    /// Texts of all H2 elements in document order.
    pub h2_texts: Vec<String>,
    /// Texts of all H3 elements in document order.
    pub h3_texts: Vec<String>,
    /// Visible text, word count and opening words.
    pub text: VisibleText,
    /// Internal link count (loose host-substring heuristic).
    pub internal_links: usize,
    /// Image alt coverage.
    pub images: ImageAudit,
}

impl PageStructure {
    /// Text of the first H1, or an empty string.
    pub fn h1(&self) -> &str {
        self.h1_texts.first().map(String::as_str).unwrap_or("")
    }

    /// Number of H1 elements.
    pub fn h1_count(&self) -> usize {
        self.h1_texts.len()
    }

    /// Declared robots directive, or the assumed `"index, follow"` default.
    pub fn meta_robots_or_default(&self) -> &str {
        self.meta_robots.as_deref().unwrap_or(DEFAULT_META_ROBOTS)
    }
}

/// Extracts all structural fields from a parsed document.
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `requested_url` - The URL that was requested (canonical comparison and
///   internal-link host)
pub fn extract_page_structure(document: &Html, requested_url: &str) -> PageStructure {
    let title = extract_title(document);
    let meta_description = extract_meta_description(document);
    let canonical_url = extract_canonical_url(document);
    let canonical_type = CanonicalType::classify(&canonical_url, requested_url);
    let meta_robots = extract_meta_robots(document);
    debug!(
        "Extracted head for {requested_url}: title={title:?}, canonical={canonical_type}, robots={meta_robots:?}"
    );

    let h1_texts = extract_h1_texts(document);
    let h2_texts = extract_h2_texts(document);
    let h3_texts = extract_h3_texts(document);

    let text = extract_visible_text(document);
    let host = request_host(requested_url);
    let internal_links = count_internal_links(document, host);
    let images = audit_images(document);
    debug!(
        "Extracted body for {requested_url}: {} H1, {} words, {} internal links, {}/{} images missing alt",
        h1_texts.len(),
        text.word_count,
        internal_links,
        images.missing_alt_count(),
        images.total
    );

    PageStructure {
        title,
        meta_description,
        canonical_url,
        canonical_type,
        meta_robots,
        h1_texts,
        h2_texts,
        h3_texts,
        text,
        internal_links,
        images,
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
