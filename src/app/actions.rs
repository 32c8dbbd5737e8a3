//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event, so
//! several side effects can be queued atomically. The plugin runtime executes
//! them in order. Actions are plain data: the library never calls host
//! functions itself.
//!
//! # Example
//!
//! ```rust
//! use sommelier::app::Action;
//! use sommelier::worker::WorkerMessage;
//!
//! let actions = vec![Action::PostToWorker(WorkerMessage::load_diary())];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::catalog::CatalogRequest;
use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q').
    CloseFocus,

    /// Posts a message to the background worker thread.
    ///
    /// Used for diary reads and writes, which must not block the event loop.
    PostToWorker(WorkerMessage),

    /// Issues a catalog GET through the host.
    ///
    /// The result comes back as a web request event carrying the request's
    /// context map, from which the fetch ticket is recovered.
    FetchCatalog(CatalogRequest),
}
