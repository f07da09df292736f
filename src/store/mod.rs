//! Client and tracked-URL persistence.
//!
//! The store is a single pretty-printed JSON file mapping client name to an
//! ordered list of [`TrackedUrl`]s. Every mutation is written through
//! immediately. A missing file is created empty; an unreadable or corrupt file
//! loads as empty (with a warning) so the tool stays usable.

pub mod import;
mod types;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

pub use import::{import_csv, import_csv_path, ImportSummary};
pub use types::{Priority, TrackedUrl, UrlStatus};

use crate::error_handling::StoreError;

/// Client name → tracked URLs, in insertion order per client.
pub type ClientMap = BTreeMap<String, Vec<TrackedUrl>>;

/// File-backed store of clients and their tracked URLs.
#[derive(Debug)]
pub struct ClientStore {
    path: PathBuf,
    clients: ClientMap,
}

impl ClientStore {
    /// Opens (or creates) the store at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] only when a missing file cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            debug!("Creating empty data file at {}", path.display());
            let store = Self {
                path,
                clients: ClientMap::new(),
            };
            store.save()?;
            return Ok(store);
        }

        let clients = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<ClientMap>(&content) {
                Ok(clients) => clients,
                Err(e) => {
                    warn!("Failed to parse {}: {e}; starting empty", path.display());
                    ClientMap::new()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {e}; starting empty", path.display());
                ClientMap::new()
            }
        };
        debug!(
            "Loaded {} clients from {}",
            clients.len(),
            path.display()
        );
        Ok(Self { path, clients })
    }

    fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.clients)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All clients and their URLs.
    pub fn clients(&self) -> &ClientMap {
        &self.clients
    }

    /// URLs tracked for `client`, if the client exists.
    pub fn urls(&self, client: &str) -> Option<&[TrackedUrl]> {
        self.clients.get(client).map(Vec::as_slice)
    }

    /// Number of tracked URLs across all clients.
    pub fn total_urls(&self) -> usize {
        self.clients.values().map(Vec::len).sum()
    }

    /// Number of tracked URLs audited at least once.
    pub fn audited_urls(&self) -> usize {
        self.clients
            .values()
            .flatten()
            .filter(|tracked| tracked.is_audited())
            .count()
    }

    /// Adds a client. Returns `false` when it already exists.
    pub fn add_client(&mut self, name: &str) -> Result<bool, StoreError> {
        if self.clients.contains_key(name) {
            return Ok(false);
        }
        self.clients.insert(name.to_string(), Vec::new());
        self.save()?;
        Ok(true)
    }

    /// Adds a URL to a client.
    ///
    /// Returns `false` when the client is unknown or already tracks the same
    /// URL string.
    pub fn add_url(&mut self, client: &str, tracked: TrackedUrl) -> Result<bool, StoreError> {
        let Some(urls) = self.clients.get_mut(client) else {
            return Ok(false);
        };
        if urls.iter().any(|existing| existing.url == tracked.url) {
            return Ok(false);
        }
        urls.push(tracked);
        self.save()?;
        Ok(true)
    }

    fn tracked_mut(&mut self, client: &str, index: usize) -> Result<&mut TrackedUrl, StoreError> {
        let urls = self
            .clients
            .get_mut(client)
            .ok_or_else(|| StoreError::UnknownClient(client.to_string()))?;
        urls.get_mut(index).ok_or_else(|| StoreError::UnknownUrl {
            client: client.to_string(),
            index,
        })
    }

    fn update(
        &mut self,
        client: &str,
        index: usize,
        apply: impl FnOnce(&mut TrackedUrl),
    ) -> Result<(), StoreError> {
        apply(self.tracked_mut(client, index)?);
        self.save()
    }

    /// Sets the workflow status of one URL.
    pub fn set_status(
        &mut self,
        client: &str,
        index: usize,
        status: UrlStatus,
    ) -> Result<(), StoreError> {
        self.update(client, index, |tracked| tracked.status = status)
    }

    /// Sets the priority of one URL.
    pub fn set_priority(
        &mut self,
        client: &str,
        index: usize,
        priority: Priority,
    ) -> Result<(), StoreError> {
        self.update(client, index, |tracked| tracked.priority = priority)
    }

    /// Replaces the notes of one URL.
    pub fn set_notes(&mut self, client: &str, index: usize, notes: &str) -> Result<(), StoreError> {
        self.update(client, index, |tracked| tracked.notes = notes.to_string())
    }

    /// Records the time of the last audit of one URL.
    pub fn mark_audited(
        &mut self,
        client: &str,
        index: usize,
        timestamp: &str,
    ) -> Result<(), StoreError> {
        self.update(client, index, |tracked| {
            tracked.last_audit = timestamp.to_string()
        })
    }

    /// Removes a client and its URLs. Returns `false` when it did not exist.
    pub fn remove_client(&mut self, name: &str) -> Result<bool, StoreError> {
        if self.clients.remove(name).is_none() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Removes one URL and returns it.
    pub fn remove_url(&mut self, client: &str, index: usize) -> Result<TrackedUrl, StoreError> {
        let urls = self
            .clients
            .get_mut(client)
            .ok_or_else(|| StoreError::UnknownClient(client.to_string()))?;
        if index >= urls.len() {
            return Err(StoreError::UnknownUrl {
                client: client.to_string(),
                index,
            });
        }
        let removed = urls.remove(index);
        self.save()?;
        Ok(removed)
    }

    /// Drops every client.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.clients.clear();
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_temp() -> (TempDir, ClientStore) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = ClientStore::open(temp_dir.path().join("clients.json"))
            .expect("Failed to open store");
        (temp_dir, store)
    }

    #[test]
    fn test_open_creates_empty_file() {
        let (temp_dir, store) = open_temp();
        let path = temp_dir.path().join("clients.json");
        assert!(path.exists());
        assert_eq!(fs::read_to_string(path).expect("readable"), "{}");
        assert!(store.clients().is_empty());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("clients.json");
        fs::write(&path, "{ not json").expect("Failed to write file");
        let store = ClientStore::open(&path).expect("corrupt file still opens");
        assert!(store.clients().is_empty());
    }

    #[test]
    fn test_add_client_and_duplicate() {
        let (_dir, mut store) = open_temp();
        assert!(store.add_client("Acme").expect("save"));
        assert!(!store.add_client("Acme").expect("save"));
        assert_eq!(store.urls("Acme").map(<[_]>::len), Some(0));
    }

    #[test]
    fn test_add_url_rejects_unknown_client_and_duplicates() {
        let (_dir, mut store) = open_temp();
        let tracked = TrackedUrl::new("https://acme.test/", "widgets", vec![]);
        assert!(!store.add_url("Nobody", tracked.clone()).expect("save"));

        store.add_client("Acme").expect("save");
        assert!(store.add_url("Acme", tracked.clone()).expect("save"));
        assert!(!store.add_url("Acme", tracked).expect("save"));
        assert_eq!(store.total_urls(), 1);
    }

    #[test]
    fn test_mutations_persist_across_reopen() {
        let (temp_dir, mut store) = open_temp();
        store.add_client("Acme").expect("save");
        store
            .add_url(
                "Acme",
                TrackedUrl::new("https://acme.test/", "widgets", vec!["blue".to_string()]),
            )
            .expect("save");
        store
            .set_status("Acme", 0, UrlStatus::InProgress)
            .expect("save");
        store.set_priority("Acme", 0, Priority::High).expect("save");
        store.set_notes("Acme", 0, "rewrite intro").expect("save");
        store
            .mark_audited("Acme", 0, "2024-05-01 09:30")
            .expect("save");

        let reopened =
            ClientStore::open(temp_dir.path().join("clients.json")).expect("reopen store");
        let tracked = &reopened.urls("Acme").expect("client exists")[0];
        assert_eq!(tracked.status, UrlStatus::InProgress);
        assert_eq!(tracked.priority, Priority::High);
        assert_eq!(tracked.notes, "rewrite intro");
        assert_eq!(tracked.last_audit, "2024-05-01 09:30");
        assert_eq!(tracked.secondary_keywords, vec!["blue"]);
        assert_eq!(reopened.audited_urls(), 1);
    }

    #[test]
    fn test_update_unknown_targets() {
        let (_dir, mut store) = open_temp();
        assert!(matches!(
            store.set_status("Nobody", 0, UrlStatus::Review),
            Err(StoreError::UnknownClient(_))
        ));
        store.add_client("Acme").expect("save");
        assert!(matches!(
            store.set_notes("Acme", 2, "x"),
            Err(StoreError::UnknownUrl { index: 2, .. })
        ));
    }

    #[test]
    fn test_remove_url_and_client() {
        let (_dir, mut store) = open_temp();
        store.add_client("Acme").expect("save");
        store
            .add_url("Acme", TrackedUrl::new("https://acme.test/a", "", vec![]))
            .expect("save");
        store
            .add_url("Acme", TrackedUrl::new("https://acme.test/b", "", vec![]))
            .expect("save");

        let removed = store.remove_url("Acme", 0).expect("index exists");
        assert_eq!(removed.url, "https://acme.test/a");
        assert_eq!(store.urls("Acme").expect("client")[0].url, "https://acme.test/b");
        assert!(store.remove_url("Acme", 5).is_err());

        assert!(store.remove_client("Acme").expect("save"));
        assert!(!store.remove_client("Acme").expect("save"));
    }

    #[test]
    fn test_clear() {
        let (_dir, mut store) = open_temp();
        store.add_client("Acme").expect("save");
        store.add_client("Globex").expect("save");
        store.clear().expect("save");
        assert!(store.clients().is_empty());
    }
}
