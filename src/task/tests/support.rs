//! Shared helpers for ledger unit tests.

use crate::task::{
    domain::{LedgerEvent, ParticipantId},
    ports::EventSink,
};
use std::sync::Mutex;

mockall::mock! {
    pub Sink {}

    impl EventSink for Sink {
        fn emit(&self, event: LedgerEvent);
    }
}

/// Builds a participant identity from a known-good literal.
pub fn participant(name: &str) -> ParticipantId {
    ParticipantId::new(name).expect("test participant should be valid")
}

/// Sink that keeps every emitted event for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<LedgerEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<LedgerEvent> {
        self.events.lock().expect("sink lock").clone()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: LedgerEvent) {
        self.events.lock().expect("sink lock").push(event);
    }
}
