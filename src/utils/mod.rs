//! Utility functions.
//!
//! This module provides:
//! - Error message sanitization
//! - CSS selector parsing
//! - Small text helpers shared by the analysis stages

pub mod sanitize;
mod selector;

pub use selector::parse_selector_unsafe;

/// Joins items with `", "`, or returns `"None"` when there are none.
pub fn join_or_none<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        crate::config::NONE_LABEL.to_string()
    } else {
        items
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Renders a boolean check as `"Yes"` / `"No"`.
pub fn yes_no(value: bool) -> String {
    if value {
        crate::config::YES.to_string()
    } else {
        crate::config::NO.to_string()
    }
}
