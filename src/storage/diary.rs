//! Tasting diary persistence.
//!
//! [`DiaryStore`] reads and writes the whole diary as one JSON array stored
//! under [`DIARY_KEY`]. A missing or unreadable diary is not an error for the
//! surrounding UI: [`DiaryStore::load_all`] logs the cause and returns an empty
//! list.

use crate::domain::error::{Result, SommelierError};
use crate::domain::DiaryEntry;
use crate::storage::backend::BlobStore;

/// Blob key holding the diary entries.
pub const DIARY_KEY: &str = "@wine_diary_entries";

/// Accessor for the persisted diary.
pub struct DiaryStore {
    store: Box<dyn BlobStore>,
}

impl std::fmt::Debug for DiaryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiaryStore").finish_non_exhaustive()
    }
}

impl DiaryStore {
    pub fn new(store: Box<dyn BlobStore>) -> Self {
        Self { store }
    }

    /// Loads every diary entry, defaulting to an empty list.
    ///
    /// Read and parse failures are logged and swallowed.
    #[must_use]
    pub fn load_all(&self) -> Vec<DiaryEntry> {
        let _span = tracing::debug_span!("diary_load_all").entered();

        match self.try_load_all() {
            Ok(entries) => {
                tracing::debug!(entry_count = entries.len(), "diary loaded");
                entries
            }
            Err(e) => {
                tracing::warn!(error = %e, "diary unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Loads every diary entry, reporting why the blob could not be used.
    ///
    /// An absent blob is an empty diary, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SommelierError::StorageRead`] if the blob cannot be read or is
    /// not a JSON array of diary entries.
    pub fn try_load_all(&self) -> Result<Vec<DiaryEntry>> {
        let Some(json) = self
            .store
            .get(DIARY_KEY)
            .map_err(|e| SommelierError::StorageRead(e.to_string()))?
        else {
            tracing::debug!("no diary blob stored");
            return Ok(Vec::new());
        };

        serde_json::from_str(&json)
            .map_err(|e| SommelierError::StorageRead(format!("failed to parse diary JSON: {e}")))
    }

    /// Replaces the whole diary with `entries`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the blob write fails. The previous
    /// diary stays intact in that case.
    pub fn save(&mut self, entries: &[DiaryEntry]) -> Result<()> {
        let _span = tracing::debug_span!("diary_save", entry_count = entries.len()).entered();

        let json = serde_json::to_string(entries)
            .map_err(|e| SommelierError::Storage(format!("failed to serialize diary: {e}")))?;

        self.store.set(DIARY_KEY, &json)?;
        tracing::debug!("diary saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn entry(id: &str) -> DiaryEntry {
        DiaryEntry {
            id: id.to_string(),
            date: "2024-05-01".to_string(),
            wine_name: "Rioja".to_string(),
            content: "Vanilla and cherry".to_string(),
        }
    }

    #[test]
    fn missing_blob_is_empty() {
        let store = DiaryStore::new(Box::new(MemoryStore::new()));
        assert!(store.load_all().is_empty());
        assert!(store.try_load_all().unwrap().is_empty());
    }

    #[test]
    fn corrupt_blob_is_empty_without_panicking() {
        let store = DiaryStore::new(Box::new(MemoryStore::with_blob(DIARY_KEY, "{not json")));
        assert!(store.load_all().is_empty());
        assert!(matches!(store.try_load_all(), Err(SommelierError::StorageRead(_))));
    }

    #[test]
    fn wrong_shape_is_empty() {
        let store = DiaryStore::new(Box::new(MemoryStore::with_blob(
            DIARY_KEY,
            r#"[{"id": 1, "note": "missing fields"}]"#,
        )));
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn save_overwrites_whole_diary() {
        let mut store = DiaryStore::new(Box::new(MemoryStore::new()));

        store.save(&[entry("a"), entry("b")]).unwrap();
        store.save(&[entry("c")]).unwrap();

        assert_eq!(store.load_all(), vec![entry("c")]);
    }

    #[test]
    fn reads_blob_written_by_other_clients() {
        let blob = r#"[{"id":"1712","date":"2024-04-10","wineName":"Barolo","content":"Firm tannins"}]"#;
        let store = DiaryStore::new(Box::new(MemoryStore::with_blob(DIARY_KEY, blob)));

        let entries = store.load_all();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].wine_name, "Barolo");
    }
}
