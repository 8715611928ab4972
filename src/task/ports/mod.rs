//! Port contracts for the task reward ledger.
//!
//! Ports define infrastructure-agnostic interfaces used by ledger services.

pub mod event_sink;
pub mod repository;

pub use event_sink::EventSink;
pub use repository::{
    EntityHandle, LedgerRepositoryError, LedgerRepositoryResult, ProfileRepository,
    TaskRepository,
};
