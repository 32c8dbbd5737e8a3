//! Blob store abstraction.
//!
//! This module defines the [`BlobStore`] trait: an opaque key-value store where
//! each key holds one string blob. The diary keeps its whole entry list under a
//! single key, so the trait stays minimal and mirrors what the worker thread
//! actually needs.

use crate::domain::error::Result;

/// Abstraction over key-value blob persistence.
///
/// Implementations are driven from the worker thread, which is what keeps reads
/// and writes off the plugin's render loop.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): one file per key, atomic writes (default)
/// - [`MemoryStore`](crate::storage::MemoryStore): in-process map for tests and fallback
///
/// # Examples
///
/// ```no_run
/// use sommelier::storage::{BlobStore, JsonFileStore};
/// use std::path::PathBuf;
///
/// let mut store = JsonFileStore::new(PathBuf::from("/tmp/sommelier"))?;
/// store.set("@wine_diary_entries", "[]")?;
/// assert_eq!(store.get("@wine_diary_entries")?.as_deref(), Some("[]"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait BlobStore: Send {
    /// Reads the blob stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing is stored under the key.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob exists but cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the blob stored under `key`.
    ///
    /// Readers observe either the previous blob or the new one, never a
    /// partial write.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes the blob stored under `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob exists but cannot be removed.
    fn remove(&mut self, key: &str) -> Result<()>;
}
