//! Catalog access: request building, response decoding and load lifecycle.
//!
//! # Modules
//!
//! - [`client`]: Builds the per-category GET and decodes the endpoint's JSON
//! - [`controller`]: Loading / loaded / failed state machine with supersession

pub mod client;
pub mod controller;

pub use client::{ticket_from_context, CatalogClient, CatalogRequest, FetchTicket, DEFAULT_BASE_URL};
pub use controller::{LoadController, LoadState, Resolution, LOAD_FAILED_MESSAGE};
