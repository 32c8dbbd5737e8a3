//! Storage layer for persistent diary data.
//!
//! This module provides the blob store abstraction and the diary accessor built
//! on top of it. All of it runs on the worker thread.
//!
//! # Modules
//!
//! - `backend`: Blob store trait
//! - `json`: File-per-key JSON store with atomic writes
//! - `memory`: In-memory store for tests and fallback
//! - `diary`: Diary accessor over a blob store

pub mod backend;
pub mod diary;
pub mod json;
pub mod memory;

pub use backend::BlobStore;
pub use diary::{DiaryStore, DIARY_KEY};
pub use json::JsonFileStore;
pub use memory::MemoryStore;
