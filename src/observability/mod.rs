//! OpenTelemetry tracing exported to a local OTLP JSON file.
//!
//! The plugin runs inside the Zellij WASM sandbox with no collector to talk
//! to, so spans are serialized as OTLP JSON lines and appended to a rotating
//! file in the plugin data directory:
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → sommelier-otlp.json
//! ```
//!
//! Trace level comes from the `trace_level` plugin option and defaults to
//! `"info"`. Tracing is best effort: if the data directory cannot be created
//! the subscriber is simply not installed.
//!
//! # Usage
//!
//! ```rust,no_run
//! use sommelier::observability::init_tracing;
//! use sommelier::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;

/// `service.name` resource attribute attached to every exported batch.
pub const SERVICE_NAME: &str = "sommelier";

/// Instrumentation scope name for spans created by this crate.
pub const SCOPE_NAME: &str = "Sommelier";

/// Trace file name inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "sommelier-otlp.json";
