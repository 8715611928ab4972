//! Append-only in-memory audit log.

use std::sync::{Arc, PoisonError, RwLock};

use mockable::Clock;

use crate::task::{
    domain::{AuditRecord, LedgerEvent},
    ports::EventSink,
};

/// Append-only audit log that stamps each event with a sequence number and
/// the injected clock's time.
#[derive(Debug)]
pub struct InMemoryEventLog<C> {
    records: RwLock<Vec<AuditRecord>>,
    clock: Arc<C>,
}

impl<C> InMemoryEventLog<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty log.
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Returns a copy of every record in append order.
    #[must_use]
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the recorded events in append order.
    #[must_use]
    pub fn events(&self) -> Vec<LedgerEvent> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|record| record.event.clone())
            .collect()
    }

    /// Returns the number of records appended so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C> EventSink for InMemoryEventLog<C>
where
    C: Clock + Send + Sync,
{
    fn emit(&self, event: LedgerEvent) {
        // A poisoned lock still holds a consistent Vec: pushes are the only
        // writes and cannot leave it half-updated.
        let mut records = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let sequence = records.last().map_or(1, |last| last.sequence.saturating_add(1));
        records.push(AuditRecord {
            sequence,
            occurred_at: self.clock.utc(),
            event,
        });
    }
}
