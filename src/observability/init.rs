//! Subscriber setup.

use super::{tracer, SCOPE_NAME, SERVICE_NAME, TRACE_FILE_NAME};
use crate::infrastructure::paths::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when the configuration does not set one.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber with file-based OTLP export.
///
/// Spans are filtered by `config.trace_level` (an [`EnvFilter`] directive such
/// as `"debug"` or `"sommelier=trace"`) and written to
/// `sommelier-otlp.json` in the plugin data directory.
///
/// Safe to call more than once; only the first successful call installs a
/// subscriber. Does nothing if the data directory cannot be created.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);

    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
