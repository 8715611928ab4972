//! Task rewards: a task-and-reward ledger.
//!
//! Participants create tasks, assign them, and mark them complete to accrue
//! points. Points deterministically derive a level from a fixed five-tier
//! table, and every successful mutation emits an audit record.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure state machines with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and audit emission
//! - **Adapters**: Concrete implementations of ports
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use mockable::DefaultClock;
//! use task_rewards::task::{
//!     adapters::memory::{InMemoryEventLog, InMemoryProfileRepository, InMemoryTaskRepository},
//!     domain::ParticipantId,
//!     services::{CreateTaskRequest, TaskLedger},
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let clock = Arc::new(DefaultClock);
//! let (ledger, _admin) = TaskLedger::genesis(
//!     Arc::new(InMemoryTaskRepository::new()),
//!     Arc::new(InMemoryProfileRepository::new()),
//!     Arc::new(InMemoryEventLog::new(Arc::clone(&clock))),
//!     clock,
//! );
//!
//! let alice = ParticipantId::new("alice")?;
//! let profile = ledger.create_profile(&alice)?;
//! let task = ledger.create_task(&alice, CreateTaskRequest::new("Write docs", 120))?;
//! ledger.assign_task(&alice, task.id(), alice.clone())?;
//! let completion = ledger.complete_task(&alice, task.id(), profile.id())?;
//!
//! assert_eq!(completion.profile.level().value(), 2);
//! # Ok(())
//! # }
//! ```

pub mod task;
