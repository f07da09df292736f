//! Export functionality for audit reports.
//!
//! This module writes audit rows to CSV (flattened, for spreadsheets) or
//! JSONL (one object per URL, for programmatic use), to a file or stdout.

mod csv;
mod jsonl;
mod row;
mod types;

use std::path::Path;

use anyhow::Result;

pub use csv::export_csv;
pub use jsonl::export_jsonl;
pub use row::{csv_header, ExportRecord, ISSUE_SEPARATOR, TRACKING_COLUMNS};
pub use types::ExportFormat;

use crate::run::AuditRow;

/// Writes rows in `format` to `output`, or stdout when `None`.
///
/// Returns the number of records exported.
pub fn export_report(
    rows: &[AuditRow],
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<usize> {
    let writer = types::open_output(output)?;
    match format {
        ExportFormat::Csv => export_csv(rows, writer),
        ExportFormat::Jsonl => export_jsonl(rows, writer),
    }
}
