//! Domain layer for the Sommelier plugin.
//!
//! Core types independent of Zellij APIs or storage concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`wine`]: Catalog records, categories and sort keys
//! - [`diary`]: Tasting diary entries

pub mod diary;
pub mod error;
pub mod wine;

pub use diary::DiaryEntry;
pub use error::{CatalogError, Result, SommelierError};
pub use wine::{Category, Rating, SortKey, WineItem};
