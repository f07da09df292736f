//! Link and image extraction.
//!
//! Internal links are detected with a deliberately loose heuristic: an href is
//! internal when it is root-relative (`/...`) or when the requested URL's host
//! appears anywhere in the href string. This is a substring test, not a parsed
//! host comparison, so `https://other.site/?ref=example.com` counts as internal
//! for `example.com` and `//cdn.example.com/x` counts too. This imprecision is
//! part of the reported `Internal_Links` semantics and is covered by tests.
//!
//! The host is the authority exactly as written in the requested URL: case,
//! IDN spelling, userinfo and any explicit port (default or not) are kept.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::config::UNKNOWN_IMAGE_SRC;
use crate::utils::parse_selector_unsafe;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a[href]", "ANCHOR_SELECTOR"));

static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("img", "IMAGE_SELECTOR"));

/// Image alt-text coverage of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageAudit {
    /// Total number of `<img>` elements.
    pub total: usize,
    /// Basenames of images without (or with an empty) `alt`, in document order.
    pub missing_alt_files: Vec<String>,
}

impl ImageAudit {
    /// Number of images lacking alt text.
    pub fn missing_alt_count(&self) -> usize {
        self.missing_alt_files.len()
    }
}

/// Raw authority of the requested URL: the text after `://` up to the next
/// `/`, `?` or `#`.
///
/// Returns `None` when the URL has no `://` or the authority is empty; in that
/// case only root-relative links are counted as internal.
pub fn request_host(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    (!authority.is_empty()).then_some(authority)
}

/// Counts `<a href>` elements considered internal for `host`.
pub fn count_internal_links(document: &Html, host: Option<&str>) -> usize {
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| href.starts_with('/') || host.is_some_and(|h| href.contains(h)))
        .count()
}

/// Audits alt-text coverage of every `<img>`.
///
/// An `alt` attribute that is present but empty counts as missing. The file
/// name reported for an offending image is the last `/`-separated segment of
/// its `src` (which may be empty for a trailing slash), or `unknown_src` when
/// the image has no `src` at all.
pub fn audit_images(document: &Html) -> ImageAudit {
    let mut audit = ImageAudit::default();

    for element in document.select(&IMAGE_SELECTOR) {
        audit.total += 1;
        let has_alt = element
            .value()
            .attr("alt")
            .is_some_and(|alt| !alt.is_empty());
        if has_alt {
            continue;
        }
        let src = element.value().attr("src").unwrap_or(UNKNOWN_IMAGE_SRC);
        let basename = src.rsplit('/').next().unwrap_or(src);
        audit.missing_alt_files.push(basename.to_string());
    }

    audit
}
