//! Domain model for the task reward ledger.
//!
//! Aggregates validate every guard before writing, so a failed call leaves
//! them untouched. Emitting audit records is left to the service layer.

mod board;
mod capability;
mod error;
mod event;
mod ids;
mod level;
mod profile;
mod task;

pub use board::{PersistedBoardData, TaskBoard};
pub use capability::AdminCap;
pub use error::{ErrorCategory, InvalidParticipantIdError, PersistedStateError, TaskDomainError};
pub use event::{AssignedBy, AuditRecord, LedgerEvent};
pub use ids::{AdminCapId, BoardId, ParticipantId, ProfileId, TaskId};
pub use level::Level;
pub use profile::{Award, PersistedProfileData, UserProfile};
pub use task::{PersistedTaskData, Task, TaskPhase, TaskStatus};
