//! Audit record sink port.

use crate::task::domain::LedgerEvent;
use std::sync::Arc;

/// Destination for audit records.
///
/// Emission is synchronous and infallible from the caller's point of view:
/// the ledger emits exactly one record per successful mutation and none on
/// failure, independent of how the sink transports them.
pub trait EventSink: Send + Sync {
    /// Appends one record.
    fn emit(&self, event: LedgerEvent);
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn emit(&self, event: LedgerEvent) {
        (**self).emit(event);
    }
}
