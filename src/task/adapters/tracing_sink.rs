//! Event sink that forwards audit records to `tracing`.

use crate::task::{domain::LedgerEvent, ports::EventSink};

/// Emits each audit record as an `info` event on the `task_rewards::audit`
/// target, with the record serialised as JSON in the `payload` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl TracingEventSink {
    /// Creates a tracing-backed sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EventSink for TracingEventSink {
    fn emit(&self, event: LedgerEvent) {
        match serde_json::to_string(&event) {
            Ok(payload) => tracing::info!(
                target: "task_rewards::audit",
                event_type = event.event_type(),
                %payload,
                "audit record"
            ),
            Err(err) => tracing::error!(
                target: "task_rewards::audit",
                event_type = event.event_type(),
                error = %err,
                ?event,
                "audit record could not be serialised"
            ),
        }
    }
}
