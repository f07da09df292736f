//! CSV export functionality.
//!
//! One row per audited URL; list values are flattened into single cells.

use std::io::Write;

use anyhow::Result;
use csv::Writer;

use crate::run::AuditRow;

use super::row::{csv_cells, csv_header, ExportRecord};

/// Writes audit rows as CSV.
///
/// # Returns
///
/// Returns the number of records exported, or an error if writing fails.
pub fn export_csv<W: Write>(rows: &[AuditRow], output: W) -> Result<usize> {
    let mut writer = Writer::from_writer(output);
    writer.write_record(csv_header())?;

    let mut record_count = 0;
    for row in rows {
        writer.write_record(csv_cells(&ExportRecord::from(row))?)?;
        record_count += 1;
    }

    writer.flush()?;
    Ok(record_count)
}
