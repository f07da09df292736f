//! JSONL export functionality.
//!
//! Each line is a complete JSON object representing one audited URL. Issues
//! stay a JSON array and `Status_Code` stays numeric for HTTP statuses.

use std::io::Write;

use anyhow::Result;

use crate::run::AuditRow;

use super::row::ExportRecord;

/// Writes audit rows as JSON Lines.
///
/// # Returns
///
/// Returns the number of records exported, or an error if writing fails.
pub fn export_jsonl<W: Write>(rows: &[AuditRow], mut writer: W) -> Result<usize> {
    let mut record_count = 0;
    for row in rows {
        serde_json::to_writer(&mut writer, &ExportRecord::from(row))?;
        writeln!(writer)?;
        record_count += 1;
    }
    writer.flush()?;
    Ok(record_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisResult, StatusCode, RESULT_KEYS};
    use crate::store::{Priority, TrackedUrl};
    use serde_json::Value;

    #[test]
    fn test_export_jsonl_one_object_per_line() {
        let mut tracked = TrackedUrl::new("https://acme.test/", "widgets", vec![]);
        tracked.priority = Priority::High;
        tracked.notes = "check hero copy".to_string();
        let rows = vec![
            AuditRow {
                client: "Acme".to_string(),
                index: 0,
                tracked: tracked.clone(),
                result: AnalysisResult::error(StatusCode::Http(500)),
            },
            AuditRow {
                client: "Acme".to_string(),
                index: 1,
                tracked,
                result: AnalysisResult::error(StatusCode::Http(404)),
            },
        ];

        let mut buffer = Vec::new();
        assert_eq!(export_jsonl(&rows, &mut buffer).expect("export succeeds"), 2);

        let text = String::from_utf8(buffer).expect("utf-8");
        let objects: Vec<Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).expect("valid JSON line"))
            .collect();
        assert_eq!(objects.len(), 2);
        let first = &objects[0];
        assert_eq!(first["Client"], "Acme");
        assert_eq!(first["priority"], "High");
        assert_eq!(first["notes"], "check hero copy");
        assert_eq!(first["Status_Code"], 500);
        for key in RESULT_KEYS {
            assert!(first.get(*key).is_some(), "missing {key}");
        }
        assert_eq!(objects[1]["Status_Code"], 404);
    }
}
