//! The fixed-shape audit record.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::config::NOT_AVAILABLE;
use crate::utils::sanitize::sanitize_and_truncate_error_message;

/// Every key of a serialized [`AnalysisResult`], in output order.
///
/// Reporting and export consumers key off these exact names.
pub const RESULT_KEYS: &[&str] = &[
    "Status_Code",
    "Title",
    "Title_Length",
    "Meta_Description",
    "Meta_Desc_Length",
    "Canonical_URL",
    "Canonical_Type",
    "Meta_Robots",
    "H1",
    "H1_Count",
    "Word_Count",
    "Internal_Links",
    "Images",
    "Missing_Alt_Count",
    "Missing_Alt_Files",
    "Schema_Types",
    "Schema_Present",
    "Entity_Schema_Present",
    "Primary_Keyword",
    "Primary_in_Title",
    "Primary_in_H1",
    "Primary_in_URL",
    "Primary_in_Content",
    "Primary_in_First_100",
    "Primary_in_Meta_Desc",
    "Secondary_Keywords",
    "Secondary_in_H2",
    "Secondary_in_H3",
    "Secondary_in_Content_List",
    "Issues_List",
    "Has_Critical_Issues",
];

/// Outcome of the fetch as reported in `Status_Code`.
///
/// Serializes as a bare number for HTTP statuses and as a string for errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StatusCode {
    /// HTTP status of the response.
    Http(u16),
    /// `"Error: <message>"` for failures that produced no response.
    Error(String),
}

impl StatusCode {
    /// Builds the `"Error: <message>"` variant from any failure message.
    ///
    /// The message is stripped of control characters and length-capped.
    pub fn from_failure(message: impl fmt::Display) -> Self {
        let message = sanitize_and_truncate_error_message(&message.to_string());
        StatusCode::Error(format!("Error: {message}"))
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusCode::Http(code) => write!(f, "{code}"),
            StatusCode::Error(message) => f.write_str(message),
        }
    }
}

/// Serializes `None` as the `"N/A"` sentinel.
fn or_na<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_str(NOT_AVAILABLE),
    }
}

/// Audit record of one page.
///
/// There are two shapes: success (built from a fetched 200 document) and
/// error (every informational field `"N/A"`). Both serialize to exactly the
/// keys in [`RESULT_KEYS`]. On a successful page `Entity_Schema_Present` is
/// `null` when no entity types were found; the error shape carries `"N/A"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// HTTP status or error message.
    #[serde(rename = "Status_Code")]
    pub status_code: StatusCode,
    /// Page title.
    #[serde(rename = "Title")]
    pub title: String,
    /// Title length in characters.
    #[serde(rename = "Title_Length", serialize_with = "or_na")]
    pub title_length: Option<usize>,
    /// Meta description.
    #[serde(rename = "Meta_Description")]
    pub meta_description: String,
    /// Meta description length in characters.
    #[serde(rename = "Meta_Desc_Length", serialize_with = "or_na")]
    pub meta_desc_length: Option<usize>,
    /// Canonical href.
    #[serde(rename = "Canonical_URL")]
    pub canonical_url: String,
    /// `Self`, `Missing` or `Canonicalized`.
    #[serde(rename = "Canonical_Type")]
    pub canonical_type: String,
    /// Declared robots directive or the assumed default.
    #[serde(rename = "Meta_Robots")]
    pub meta_robots: String,
    /// First H1 text.
    #[serde(rename = "H1")]
    pub h1: String,
    /// Number of H1 elements.
    #[serde(rename = "H1_Count", serialize_with = "or_na")]
    pub h1_count: Option<usize>,
    /// Visible word count.
    #[serde(rename = "Word_Count", serialize_with = "or_na")]
    pub word_count: Option<usize>,
    /// Internal link count.
    #[serde(rename = "Internal_Links", serialize_with = "or_na")]
    pub internal_links: Option<usize>,
    /// Image count.
    #[serde(rename = "Images", serialize_with = "or_na")]
    pub images: Option<usize>,
    /// Images without alt text.
    #[serde(rename = "Missing_Alt_Count", serialize_with = "or_na")]
    pub missing_alt_count: Option<usize>,
    /// Basenames of images without alt text, or `"None"`.
    #[serde(rename = "Missing_Alt_Files")]
    pub missing_alt_files: String,
    /// Page-defining schema types, or `"None"`.
    #[serde(rename = "Schema_Types")]
    pub schema_types: String,
    /// `"Yes"` when a page-defining type was found.
    #[serde(rename = "Schema_Present")]
    pub schema_present: String,
    /// Entity schema types, when any were found; `"N/A"` in the error shape.
    #[serde(rename = "Entity_Schema_Present")]
    pub entity_schema_present: Option<String>,
    /// Primary keyword as supplied.
    #[serde(rename = "Primary_Keyword")]
    pub primary_keyword: String,
    /// `Yes` / `No` / `N/A`.
    #[serde(rename = "Primary_in_Title")]
    pub primary_in_title: String,
    /// `Yes` / `No` / `N/A`.
    #[serde(rename = "Primary_in_H1")]
    pub primary_in_h1: String,
    /// `Yes` / `No` / `N/A`.
    #[serde(rename = "Primary_in_URL")]
    pub primary_in_url: String,
    /// `Yes` / `No` / `N/A`.
    #[serde(rename = "Primary_in_Content")]
    pub primary_in_content: String,
    /// `Yes` / `No` / `N/A`.
    #[serde(rename = "Primary_in_First_100")]
    pub primary_in_first_100: String,
    /// `Yes` / `No` / `N/A`.
    #[serde(rename = "Primary_in_Meta_Desc")]
    pub primary_in_meta_desc: String,
    /// Secondary keywords as supplied, comma-joined.
    #[serde(rename = "Secondary_Keywords")]
    pub secondary_keywords: String,
    /// Secondary keywords found in H2 text, or `"None"`.
    #[serde(rename = "Secondary_in_H2")]
    pub secondary_in_h2: String,
    /// Secondary keywords found in H3 text, or `"None"`.
    #[serde(rename = "Secondary_in_H3")]
    pub secondary_in_h3: String,
    /// `"kw (n)"` entries for keywords found in the content, or `"None"`.
    #[serde(rename = "Secondary_in_Content_List")]
    pub secondary_in_content_list: String,
    /// Issues in rule order.
    #[serde(rename = "Issues_List", serialize_with = "or_na")]
    pub issues_list: Option<Vec<String>>,
    /// True when `issues_list` is non-empty.
    #[serde(rename = "Has_Critical_Issues", serialize_with = "or_na")]
    pub has_critical_issues: Option<bool>,
}

impl AnalysisResult {
    /// Builds the uniform error shape.
    pub fn error(status_code: StatusCode) -> Self {
        let na = || NOT_AVAILABLE.to_string();
        Self {
            status_code,
            title: na(),
            title_length: None,
            meta_description: na(),
            meta_desc_length: None,
            canonical_url: na(),
            canonical_type: na(),
            meta_robots: na(),
            h1: na(),
            h1_count: None,
            word_count: None,
            internal_links: None,
            images: None,
            missing_alt_count: None,
            missing_alt_files: na(),
            schema_types: na(),
            schema_present: na(),
            entity_schema_present: Some(na()),
            primary_keyword: na(),
            primary_in_title: na(),
            primary_in_h1: na(),
            primary_in_url: na(),
            primary_in_content: na(),
            primary_in_first_100: na(),
            primary_in_meta_desc: na(),
            secondary_keywords: na(),
            secondary_in_h2: na(),
            secondary_in_h3: na(),
            secondary_in_content_list: na(),
            issues_list: None,
            has_critical_issues: None,
        }
    }

    /// True for the error shape (anything but a 200 response).
    pub fn is_error(&self) -> bool {
        self.status_code != StatusCode::Http(200)
    }

    /// Issues, or an empty slice for the error shape.
    pub fn issues(&self) -> &[String] {
        self.issues_list.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_of(result: &AnalysisResult) -> Vec<String> {
        let value = serde_json::to_value(result).expect("serializable");
        value
            .as_object()
            .expect("object")
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn test_error_shape_has_every_key() {
        let result = AnalysisResult::error(StatusCode::Http(404));
        let mut keys = keys_of(&result);
        keys.sort();
        let mut expected: Vec<String> = RESULT_KEYS.iter().map(|k| k.to_string()).collect();
        expected.sort();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_error_shape_values_are_not_available() {
        let value = serde_json::to_value(AnalysisResult::error(StatusCode::Http(404)))
            .expect("serializable");
        assert_eq!(value["Status_Code"], 404);
        for key in RESULT_KEYS.iter().filter(|key| **key != "Status_Code") {
            assert_eq!(value[key], "N/A", "{key}");
        }
    }

    #[test]
    fn test_failure_status_is_prefixed_and_sanitized() {
        let status = StatusCode::from_failure("connection refused\u{0007}");
        assert_eq!(
            status,
            StatusCode::Error("Error: connection refused".to_string())
        );
        let value = serde_json::to_value(&status).expect("serializable");
        assert_eq!(value, "Error: connection refused");
        assert_eq!(status.to_string(), "Error: connection refused");
    }

    #[test]
    fn test_is_error() {
        assert!(AnalysisResult::error(StatusCode::Http(500)).is_error());
        assert!(AnalysisResult::error(StatusCode::from_failure("timeout")).is_error());
        assert!(AnalysisResult::error(StatusCode::Http(404)).issues().is_empty());
    }
}
