//! Observability setup for flowprobe: structured logging with optional
//! OpenTelemetry span export.

pub mod tracing_setup;
