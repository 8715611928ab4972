//! Arena-style repository ports for exclusively held entities.
//!
//! Tasks and profiles are stored behind per-entity locks. A caller
//! checks out a handle and holds its lock for the whole operation, which
//! serialises conflicting mutations of the same entity.

use crate::task::domain::{ParticipantId, ProfileId, Task, TaskId, UserProfile};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Shared handle granting exclusive access to one stored entity.
pub type EntityHandle<T> = Arc<Mutex<T>>;

/// Result type for ledger repository operations.
pub type LedgerRepositoryResult<T> = Result<T, LedgerRepositoryError>;

/// Storage contract for tasks.
pub trait TaskRepository: Send + Sync {
    /// Stores a newly created task.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerRepositoryError::DuplicateTask`] when the identifier
    /// already exists.
    fn insert(&self, task: Task) -> LedgerRepositoryResult<()>;

    /// Returns the exclusive handle for a task, or `None` when unknown.
    fn checkout(&self, id: TaskId) -> LedgerRepositoryResult<Option<EntityHandle<Task>>>;

    /// Returns a snapshot of a task, or `None` when unknown.
    fn find_by_id(&self, id: TaskId) -> LedgerRepositoryResult<Option<Task>>;
}

/// Storage contract for user profiles.
pub trait ProfileRepository: Send + Sync {
    /// Stores a newly created profile.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerRepositoryError::DuplicateProfile`] when the
    /// identifier already exists or
    /// [`LedgerRepositoryError::DuplicateProfileOwner`] when the owner
    /// already has a profile.
    fn insert(&self, profile: UserProfile) -> LedgerRepositoryResult<()>;

    /// Returns the exclusive handle for a profile, or `None` when unknown.
    fn checkout(&self, id: ProfileId)
    -> LedgerRepositoryResult<Option<EntityHandle<UserProfile>>>;

    /// Returns a snapshot of a profile, or `None` when unknown.
    fn find_by_id(&self, id: ProfileId) -> LedgerRepositoryResult<Option<UserProfile>>;

    /// Returns a snapshot of the profile owned by `owner`, if any.
    fn find_by_owner(&self, owner: &ParticipantId)
    -> LedgerRepositoryResult<Option<UserProfile>>;
}

/// Errors returned by ledger repository implementations.
#[derive(Debug, Clone, Error)]
pub enum LedgerRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// A profile with the same identifier already exists.
    #[error("duplicate profile identifier: {0}")]
    DuplicateProfile(ProfileId),

    /// The participant already owns a profile.
    #[error("participant {0} already has a profile")]
    DuplicateProfileOwner(ParticipantId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl LedgerRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Wraps a poisoned lock.
    pub(crate) fn poisoned(err: &impl std::fmt::Display) -> Self {
        Self::persistence(std::io::Error::other(err.to_string()))
    }
}
