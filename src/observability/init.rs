//! Subscriber setup: `EnvFilter` plus an OpenTelemetry layer over the file
//! exporter.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::tracer;
use crate::infrastructure::paths;
use crate::Config;

/// Service and scope name attached to every exported span.
pub const SERVICE_NAME: &str = "MovieBrowser";

/// Trace file name inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "moviebrowser-otlp.json";

const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber.
///
/// Spans go to `/host/.local/share/zellij/moviebrowser/moviebrowser-otlp.json`,
/// filtered by `trace_level` (default `info`). Tracing is optional: if the data
/// directory cannot be created, or a subscriber is already installed, this
/// returns without doing anything.
pub fn init_tracing(config: &Config) {
    let data_dir = paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider =
        tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter_for(config))
        .with(otel_layer)
        .try_init();
}

fn filter_for(config: &Config) -> EnvFilter {
    let directives = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_defaults_to_info() {
        let filter = filter_for(&Config::default());
        assert!(filter.to_string().eq_ignore_ascii_case("info"));
    }

    #[test]
    fn malformed_level_falls_back_to_info() {
        let config = Config {
            trace_level: Some("moviebrowser=[[".to_string()),
            ..Config::default()
        };
        assert!(filter_for(&config).to_string().eq_ignore_ascii_case("info"));
    }

    #[test]
    fn configured_level_is_used() {
        let config = Config {
            trace_level: Some("debug".to_string()),
            ..Config::default()
        };
        assert!(filter_for(&config).to_string().eq_ignore_ascii_case("debug"));
    }
}
