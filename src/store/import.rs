//! Bulk import of clients and URLs from CSV.
//!
//! Expected columns: `Client_ID`, `Target_URL`, optional `Primary_Keyword`,
//! and any number of columns whose header contains `Secondary_Keyword`.
//! Import is clean-and-fill: the store is emptied first, then rebuilt from the
//! rows. Rows are parsed completely before anything is cleared, so a malformed
//! file leaves the store untouched.

use std::io;
use std::path::Path;

use log::{debug, info, warn};

use super::{ClientStore, TrackedUrl};
use crate::error_handling::ImportError;

const CLIENT_COLUMN: &str = "Client_ID";
const URL_COLUMN: &str = "Target_URL";
const PRIMARY_COLUMN: &str = "Primary_Keyword";
const SECONDARY_MARKER: &str = "Secondary_Keyword";

/// Counts reported after an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Clients created
    pub new_clients: usize,
    /// URLs added (duplicates within a client are not counted)
    pub new_urls: usize,
    /// Rows skipped for an empty client or URL
    pub skipped_rows: usize,
}

struct ImportRow {
    client: String,
    tracked: TrackedUrl,
}

/// Imports from any CSV reader, replacing the store's contents.
///
/// # Errors
///
/// Returns [`ImportError::MissingColumn`] when `Client_ID` or `Target_URL` is
/// absent, [`ImportError::Csv`] for unreadable input and
/// [`ImportError::Store`] when the store cannot be written.
pub fn import_csv<R: io::Read>(
    store: &mut ClientStore,
    reader: R,
) -> Result<ImportSummary, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let position = |name: &str| headers.iter().position(|h| h == name);
    let client_idx = position(CLIENT_COLUMN).ok_or(ImportError::MissingColumn(CLIENT_COLUMN))?;
    let url_idx = position(URL_COLUMN).ok_or(ImportError::MissingColumn(URL_COLUMN))?;
    let primary_idx = position(PRIMARY_COLUMN);
    let secondary_idxs: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| h.contains(SECONDARY_MARKER))
        .map(|(i, _)| i)
        .collect();
    debug!(
        "Import columns: client={client_idx}, url={url_idx}, primary={primary_idx:?}, secondary={secondary_idxs:?}"
    );

    let mut rows = Vec::new();
    let mut summary = ImportSummary::default();
    for record in csv_reader.records() {
        let record = record?;
        let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

        let client = cell(client_idx);
        if client.is_empty() || client.eq_ignore_ascii_case("nan") {
            summary.skipped_rows += 1;
            continue;
        }
        let url = cell(url_idx);
        if url.is_empty() {
            warn!("Skipping row for client {client}: empty {URL_COLUMN}");
            summary.skipped_rows += 1;
            continue;
        }
        let primary = primary_idx.map(cell).unwrap_or("");
        let secondary = secondary_idxs
            .iter()
            .map(|&idx| cell(idx))
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect();

        rows.push(ImportRow {
            client: client.to_string(),
            tracked: TrackedUrl::new(url, primary, secondary),
        });
    }

    store.clear()?;
    for row in rows {
        if store.add_client(&row.client)? {
            summary.new_clients += 1;
        }
        if store.add_url(&row.client, row.tracked)? {
            summary.new_urls += 1;
        }
    }

    info!(
        "Imported {} new clients and {} new URLs ({} rows skipped)",
        summary.new_clients, summary.new_urls, summary.skipped_rows
    );
    Ok(summary)
}

/// Imports from a CSV file on disk.
///
/// # Errors
///
/// See [`import_csv`]; an unreadable file surfaces as [`ImportError::Csv`].
pub fn import_csv_path(
    store: &mut ClientStore,
    path: impl AsRef<Path>,
) -> Result<ImportSummary, ImportError> {
    let file = std::fs::File::open(path.as_ref()).map_err(csv::Error::from)?;
    import_csv(store, file)
}
