//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the
//! domain/catalog/storage/worker layers. It never calls host functions: side
//! effects leave as [`Action`] values.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Key / Web result → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                  ↑                                        ↓
//!                                  └──────────── Worker Responses ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode state machine types
//! - [`pipeline`]: Pure search/filter/sort projection of the wine list
//! - [`router`]: Top-level view selection
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod pipeline;
pub mod router;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus};
pub use router::{NavIcon, Tab, TabRouter};
pub use state::{AppState, QuerySortState};
