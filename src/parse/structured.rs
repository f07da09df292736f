//! Structured data (schema.org) type discovery.
//!
//! Types are discovered by three independent mechanisms, evaluated in order:
//! 1. JSON-LD: every `<script type="application/ld+json">` body is parsed and
//!    walked depth-first for `@type` values.
//! 2. Microdata: the last `/`-segment of every `itemtype` attribute.
//! 3. Raw-text fallback: only when 1 and 2 found nothing, a regex scan of the
//!    raw response for `"@type": "<value>"`. Catches JSON-LD that a strict
//!    parser rejects (trailing commas, unescaped newlines, HTML comments).
//!
//! A malformed script is skipped on its own; the other scripts and mechanisms
//! are unaffected.

use regex::Regex;
use scraper::{Html, Selector};
use serde_json::Value;
use std::sync::LazyLock;

use crate::utils::parse_selector_unsafe;

static JSON_LD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(r#"script[type="application/ld+json"]"#, "JSON_LD_SELECTOR")
});

static ITEMTYPE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("[itemtype]", "ITEMTYPE_SELECTOR"));

static RAW_TYPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r#""@type":\s*"([^"]+)""#, "RAW_TYPE_PATTERN"));

const TYPE_KEY: &str = "@type";

/// Helper function to compile a static regex pattern, panicking with a detailed
/// error message if compilation fails.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

/// Schema.org type names discovered on a page, grouped by mechanism.
///
/// Duplicates are kept; deduplication happens during classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredData {
    /// `@type` values found in parseable JSON-LD scripts.
    pub json_ld_types: Vec<String>,
    /// Trailing segments of `itemtype` attributes.
    pub microdata_types: Vec<String>,
    /// Regex matches over the raw response (empty unless both others are empty).
    pub fallback_types: Vec<String>,
    /// Number of JSON-LD scripts that failed to parse.
    pub malformed_json_ld: usize,
}

impl StructuredData {
    /// All discovered type names, in mechanism order.
    pub fn all_types(&self) -> impl Iterator<Item = &str> {
        self.json_ld_types
            .iter()
            .chain(&self.microdata_types)
            .chain(&self.fallback_types)
            .map(String::as_str)
    }

    /// True when no mechanism found anything.
    pub fn is_empty(&self) -> bool {
        self.json_ld_types.is_empty()
            && self.microdata_types.is_empty()
            && self.fallback_types.is_empty()
    }
}

/// Runs all three discovery mechanisms against a document.
///
/// # Arguments
///
/// * `document` - The parsed HTML document
/// * `raw_html` - The raw response text (for the regex fallback)
pub fn extract_structured_data(document: &Html, raw_html: &str) -> StructuredData {
    let mut data = StructuredData::default();

    for script in document.select(&JSON_LD_SELECTOR) {
        let body = script.text().collect::<String>();
        if body.trim().is_empty() {
            continue;
        }
        match parse_json_ld(&body) {
            Ok(value) => collect_types(&value, &mut data.json_ld_types),
            Err(e) => {
                data.malformed_json_ld += 1;
                log::debug!("Skipping malformed JSON-LD script: {e}");
            }
        }
    }

    data.microdata_types = extract_microdata_types(document);

    if data.json_ld_types.is_empty() && data.microdata_types.is_empty() {
        data.fallback_types = scan_raw_types(raw_html);
        if !data.fallback_types.is_empty() {
            log::debug!(
                "Structured data found only by raw-text fallback: {:?}",
                data.fallback_types
            );
        }
    }

    data
}

/// Parses one JSON-LD script body.
fn parse_json_ld(body: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(body)
}

/// Depth-first walk collecting every `@type` value.
///
/// A string `@type` contributes itself; an array contributes each string
/// element. Non-string entries are ignored. The walk continues into every
/// object value and array element, so nested entities (`author`, `@graph`,
/// `offers`, ...) are discovered too.
pub fn collect_types(value: &Value, types: &mut Vec<String>) {
    let mut stack = vec![value];

    while let Some(current) = stack.pop() {
        match current {
            Value::Object(map) => {
                match map.get(TYPE_KEY) {
                    Some(Value::String(name)) => types.push(name.clone()),
                    Some(Value::Array(names)) => types.extend(
                        names
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string),
                    ),
                    _ => {}
                }
                // Reverse so siblings are visited in document order
                stack.extend(map.values().rev());
            }
            Value::Array(items) => stack.extend(items.iter().rev()),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
        }
    }
}

/// Trailing `/`-segment of every `itemtype` attribute, in document order.
fn extract_microdata_types(document: &Html) -> Vec<String> {
    document
        .select(&ITEMTYPE_SELECTOR)
        .filter_map(|element| element.value().attr("itemtype"))
        .map(|itemtype| itemtype.rsplit('/').next().unwrap_or(itemtype).to_string())
        .collect()
}

/// Regex scan of the raw response for `"@type": "<value>"` pairs.
fn scan_raw_types(raw_html: &str) -> Vec<String> {
    RAW_TYPE_PATTERN
        .captures_iter(raw_html)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
