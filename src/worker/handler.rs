//! Worker implementation for diary storage operations.
//!
//! The worker owns the [`DiaryStore`] and runs on a thread spawned by Zellij,
//! keeping blob I/O off the plugin's render loop. This type is host-agnostic:
//! the plugin shim wraps it in a `ZellijWorker` and forwards payloads to
//! [`DiaryWorker::handle_payload`].

use crate::domain::DiaryEntry;
use crate::infrastructure::paths;
use crate::storage::{BlobStore, DiaryStore, JsonFileStore, MemoryStore};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Worker thread state for diary operations.
///
/// The store is initialized lazily on the first message so that constructing
/// the worker never touches the filesystem.
#[derive(Debug, Default)]
pub struct DiaryWorker {
    store: Option<DiaryStore>,
}

impl DiaryWorker {
    /// Creates a worker over an explicit blob store.
    #[must_use]
    pub fn with_store(store: Box<dyn BlobStore>) -> Self {
        Self {
            store: Some(DiaryStore::new(store)),
        }
    }

    /// Returns the diary store, initializing it on first use.
    ///
    /// Falls back to an in-memory store when the data directory is unusable.
    fn store(&mut self) -> &mut DiaryStore {
        self.store.get_or_insert_with(|| {
            let backend: Box<dyn BlobStore> = match JsonFileStore::new(paths::get_data_dir()) {
                Ok(store) => Box::new(store),
                Err(e) => {
                    tracing::warn!(error = %e, "file store unavailable, using in-memory diary");
                    Box::new(MemoryStore::new())
                }
            };
            DiaryStore::new(backend)
        })
    }

    fn handle_load_diary(&mut self) -> WorkerResponse {
        let entries = self.store().load_all();
        WorkerResponse::DiaryLoaded { entries }
    }

    fn handle_save_diary(&mut self, entries: &[DiaryEntry]) -> WorkerResponse {
        match self.store().save(entries) {
            Ok(()) => {
                tracing::debug!(entry_count = entries.len(), "diary save successful");
                WorkerResponse::DiarySaved {
                    count: entries.len(),
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "diary save failed");
                WorkerResponse::Error {
                    message: format!("save diary: {e}"),
                }
            }
        }
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// Returns a guard that must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadDiary { .. } => self.handle_load_diary(),
            WorkerMessage::SaveDiary { entries, .. } => self.handle_save_diary(&entries),
        }
    }

    /// Decodes a JSON payload, handles it, and encodes the response.
    ///
    /// Returns `None` when the payload is not a valid message or the response
    /// cannot be serialized; both cases are logged.
    pub fn handle_payload(&mut self, payload: &str) -> Option<String> {
        let message: WorkerMessage = match serde_json::from_str(payload) {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return None;
            }
        };

        let response = self.handle_message(message);

        serde_json::to_string(&response)
            .map_err(|e| tracing::debug!(error = %e, "failed to serialize worker response"))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DIARY_KEY;

    fn entry(id: &str) -> DiaryEntry {
        DiaryEntry {
            id: id.to_string(),
            date: "2024-06-01".to_string(),
            wine_name: "Txakoli".to_string(),
            content: "Spritzy".to_string(),
        }
    }

    #[test]
    fn load_from_empty_store_is_empty() {
        let mut worker = DiaryWorker::with_store(Box::new(MemoryStore::new()));
        assert_eq!(
            worker.handle_message(WorkerMessage::load_diary()),
            WorkerResponse::DiaryLoaded { entries: vec![] }
        );
    }

    #[test]
    fn corrupt_diary_loads_as_empty() {
        let mut worker =
            DiaryWorker::with_store(Box::new(MemoryStore::with_blob(DIARY_KEY, "[{]")));
        assert_eq!(
            worker.handle_message(WorkerMessage::load_diary()),
            WorkerResponse::DiaryLoaded { entries: vec![] }
        );
    }

    #[test]
    fn save_then_load_through_payloads() {
        let mut worker = DiaryWorker::with_store(Box::new(MemoryStore::new()));

        let save = serde_json::to_string(&WorkerMessage::save_diary(vec![entry("1")])).unwrap();
        let saved: WorkerResponse =
            serde_json::from_str(&worker.handle_payload(&save).unwrap()).unwrap();
        assert_eq!(saved, WorkerResponse::DiarySaved { count: 1 });

        let load = serde_json::to_string(&WorkerMessage::load_diary()).unwrap();
        let loaded: WorkerResponse =
            serde_json::from_str(&worker.handle_payload(&load).unwrap()).unwrap();
        assert_eq!(loaded, WorkerResponse::DiaryLoaded { entries: vec![entry("1")] });
    }

    #[test]
    fn garbage_payload_yields_no_response() {
        let mut worker = DiaryWorker::with_store(Box::new(MemoryStore::new()));
        assert_eq!(worker.handle_payload("not json"), None);
    }
}
