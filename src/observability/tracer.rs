//! Tracer provider backed by a span exporter that writes to a local file.
//!
//! The plugin sandbox offers no network collector, so finished spans are
//! appended to a JSON lines file instead of being shipped over OTLP/gRPC.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::future::{self, BoxFuture};
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;

use super::file_writer::RotatingWriter;
use super::span_formatter::SpanFormatter;

/// Writes each exported batch as one OTLP/JSON line.
struct FileSpanExporter {
    /// Destination file with size-based rotation.
    writer: RotatingWriter,
    /// OTLP JSON serializer.
    formatter: SpanFormatter,
    /// Set by `shutdown`; later exports are rejected.
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    const fn new(writer: RotatingWriter, formatter: SpanFormatter) -> Self {
        Self {
            writer,
            formatter,
            is_shutdown: AtomicBool::new(false),
        }
    }

    /// Formats `batch` and appends it as one line.
    ///
    /// # Errors
    ///
    /// Returns a `TraceError` after shutdown or when the write fails.
    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(TraceError::from("file exporter is shut down"));
        }

        let line = self.formatter.format_batch(batch).to_string();
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    /// Exports a batch of spans.
    ///
    /// # Parameters
    ///
    /// * `batch` - Finished spans handed over by the simple span processor
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        Box::pin(future::ready(self.write_batch(&batch)))
    }

    /// Stops accepting exports. The file handle is closed on drop.
    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    // The resource is fixed when the formatter is built.
    fn set_resource(&mut self, _resource: &Resource) {}
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("formatter", &self.formatter)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Builds a provider exporting every span to `trace_file` as soon as it ends.
///
/// The simple (non-batching) processor is used because the plugin has no
/// background runtime to drive a batch processor.
///
/// # Parameters
///
/// * `trace_file` - JSON lines file receiving the spans
/// * `resource` - Resource attributes (service name) attached to every batch
/// * `scope` - Instrumentation scope name written into each document
pub fn create_tracer_provider(
    trace_file: PathBuf,
    resource: Resource,
    scope: &'static str,
) -> TracerProvider {
    let exporter = FileSpanExporter::new(
        RotatingWriter::new(trace_file),
        SpanFormatter::new(resource.clone(), scope),
    );

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
