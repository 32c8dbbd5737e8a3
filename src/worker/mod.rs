//! Background worker for diary storage operations.
//!
//! Blob I/O runs on a Zellij worker thread so the plugin UI never blocks on the
//! filesystem. Messages travel as JSON and carry tracing context.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::DiaryWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
