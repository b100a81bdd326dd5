//! Tracing with file-based OpenTelemetry export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → JSON lines
//! ```
//!
//! Each batch of finished spans is written as one OTLP/JSON document to
//! `~/.local/share/zellij/moviebrowser/moviebrowser-otlp.json`. The file
//! rotates at 10 MB and the three newest rotations are kept.
//!
//! The level comes from the `trace_level` plugin option and defaults to
//! `info`. Fetch requests and completions are logged at `debug`, transport
//! failures at `warn`.
//!
//! ```rust,no_run
//! use moviebrowser::observability::init_tracing;
//! use moviebrowser::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin loaded");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
