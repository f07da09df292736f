//! Shared export row building logic.
//!
//! Both exporters go through [`ExportRecord`] so CSV columns and JSONL keys
//! stay in sync.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::analysis::{AnalysisResult, RESULT_KEYS};
use crate::run::AuditRow;
use crate::store::{Priority, UrlStatus};

/// Tracking columns written ahead of the analysis keys.
pub const TRACKING_COLUMNS: &[&str] = &["Client", "url", "status", "priority", "last_audit"];

/// Separator between issues in a single CSV cell.
pub const ISSUE_SEPARATOR: &str = "; ";

/// One exported URL: tracking fields plus the flattened analysis result.
#[derive(Debug, Serialize)]
pub struct ExportRecord<'a> {
    #[serde(rename = "Client")]
    client: &'a str,
    url: &'a str,
    status: UrlStatus,
    priority: Priority,
    last_audit: &'a str,
    notes: &'a str,
    #[serde(flatten)]
    result: &'a AnalysisResult,
}

impl<'a> From<&'a AuditRow> for ExportRecord<'a> {
    fn from(row: &'a AuditRow) -> Self {
        Self {
            client: &row.client,
            url: &row.tracked.url,
            status: row.tracked.status,
            priority: row.tracked.priority,
            last_audit: &row.tracked.last_audit,
            notes: &row.tracked.notes,
            result: &row.result,
        }
    }
}

/// CSV header: tracking columns, then every analysis key in order.
pub fn csv_header() -> Vec<&'static str> {
    TRACKING_COLUMNS
        .iter()
        .chain(RESULT_KEYS.iter())
        .copied()
        .collect()
}

/// Renders one JSON value as a CSV cell.
fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(ISSUE_SEPARATOR),
        Some(other) => other.to_string(),
    }
}

/// Builds the CSV cells of one row, aligned with [`csv_header`].
pub fn csv_cells(record: &ExportRecord<'_>) -> serde_json::Result<Vec<String>> {
    let object = match serde_json::to_value(record)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    Ok(csv_header()
        .into_iter()
        .map(|column| cell(object.get(column)))
        .collect())
}
