//! Adapter implementations for ledger ports.

pub mod memory;

mod tracing_sink;

pub use tracing_sink::TracingEventSink;
