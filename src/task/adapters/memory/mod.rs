//! In-memory adapters for tests and embedded use.

mod event_log;
mod profile;
mod task;

pub use event_log::InMemoryEventLog;
pub use profile::InMemoryProfileRepository;
pub use task::InMemoryTaskRepository;
