//! Error types for the Sommelier plugin.
//!
//! This module defines the crate-wide error type [`SommelierError`], the catalog
//! failure type [`CatalogError`], and a [`Result`] alias. All errors are
//! implemented with `thiserror`.
//!
//! `CatalogError` is kept separate because it travels inside application
//! events and must be `Clone + Eq`, which rules out wrapping `std::io::Error`.

use thiserror::Error;

/// Failure of a single catalog fetch.
///
/// Both variants surface to the user as the same generic, retryable error
/// state. The detail is only logged.
///
/// # Examples
///
/// ```
/// use sommelier::domain::CatalogError;
///
/// let err = CatalogError::Network { status: 503 };
/// assert_eq!(err.to_string(), "catalog request failed with HTTP status 503");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The endpoint answered with a status outside the success range.
    #[error("catalog request failed with HTTP status {status}")]
    Network {
        /// HTTP status code returned by the host.
        status: u16,
    },

    /// The response body was not a JSON array of wine records.
    #[error("catalog response could not be parsed: {0}")]
    Parse(String),
}

/// The main error type for Sommelier operations.
///
/// Consolidates storage, I/O and theme failures. Catalog failures never pass
/// through here: they travel inside events as [`CatalogError`].
#[derive(Debug, Error)]
pub enum SommelierError {
    /// A persisted blob was missing or corrupt.
    ///
    /// Readers that treat absence as "empty" downgrade this to an empty result.
    #[error("Storage read error: {0}")]
    StorageRead(String),

    /// Writing to the blob store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for Sommelier operations.
pub type Result<T> = std::result::Result<T, SommelierError>;
