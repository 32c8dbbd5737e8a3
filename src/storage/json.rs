//! JSON file-based blob store.
//!
//! Each key maps to one file under a root directory. Writes go to a temporary
//! file first and are then renamed over the target, so a crash never leaves a
//! half-written blob behind.
//!
//! # File Layout
//!
//! ```text
//! <root>/
//!   wine_diary_entries.json   ← key "@wine_diary_entries"
//! ```

use crate::domain::error::Result;
use crate::storage::backend::BlobStore;
use std::path::{Path, PathBuf};

/// File-per-key blob store.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It is owned by the single worker thread.
#[derive(Debug)]
pub struct JsonFileStore {
    /// Directory holding one file per key.
    root: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(root: PathBuf) -> Result<Self> {
        tracing::debug!(root = ?root, "initializing JSON file store");
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Returns the store's root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the file backing `key`.
    ///
    /// Characters outside `[A-Za-z0-9_-]` are dropped, so `@wine_diary_entries`
    /// lives in `wine_diary_entries.json`. An empty result falls back to `blob`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut stem: String = key
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
            .collect();
        if stem.is_empty() {
            stem.push_str("blob");
        }
        self.root.join(format!("{stem}.json"))
    }
}

impl BlobStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        let _span = tracing::debug_span!("json_blob_get", path = ?path).entered();

        if !path.exists() {
            tracing::debug!("no blob stored");
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)?;
        tracing::debug!(bytes = contents.len(), "blob read");
        Ok(Some(contents))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let _span = tracing::debug_span!("json_blob_set", path = ?path, bytes = value.len()).entered();

        let tmp_path = path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, value)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &path)?;

        tracing::debug!("blob saved");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        let _span = tracing::debug_span!("json_blob_remove", path = ?path).entered();

        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_sanitized_into_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().to_path_buf()).unwrap();

        assert_eq!(
            store.path_for("@wine_diary_entries"),
            dir.path().join("wine_diary_entries.json")
        );
        assert_eq!(store.path_for("@/.."), dir.path().join("blob.json"));
    }

    #[test]
    fn set_then_get_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested")).unwrap();

        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "[1,2]").unwrap();
        store.set("k", "[3]").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[3]"));
        assert!(!store.path_for("k").with_extension("tmp").exists());

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}
