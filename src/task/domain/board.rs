//! Platform-wide task board counters.

use super::{BoardId, PersistedStateError, TaskDomainError};
use serde::{Deserialize, Serialize};

/// Parameter object for restoring the board from a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistedBoardData {
    /// Persisted board identifier.
    pub id: BoardId,
    /// Persisted created counter.
    pub total_tasks_created: u64,
    /// Persisted completed counter.
    pub total_tasks_completed: u64,
}

/// Shared tally of tasks created and completed.
///
/// Both counters only grow and are advanced with checked arithmetic, so an
/// exhausted counter is reported instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersistedBoardData")]
pub struct TaskBoard {
    id: BoardId,
    total_tasks_created: u64,
    total_tasks_completed: u64,
}

impl TaskBoard {
    pub(crate) fn new() -> Self {
        Self {
            id: BoardId::new(),
            total_tasks_created: 0,
            total_tasks_completed: 0,
        }
    }

    /// Reconstructs a board from persisted counters.
    ///
    /// # Errors
    ///
    /// Returns [`PersistedStateError::CompletedExceedsCreated`] when more
    /// tasks were completed than created.
    pub const fn from_persisted(data: PersistedBoardData) -> Result<Self, PersistedStateError> {
        if data.total_tasks_completed > data.total_tasks_created {
            return Err(PersistedStateError::CompletedExceedsCreated {
                created: data.total_tasks_created,
                completed: data.total_tasks_completed,
            });
        }
        Ok(Self {
            id: data.id,
            total_tasks_created: data.total_tasks_created,
            total_tasks_completed: data.total_tasks_completed,
        })
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> BoardId {
        self.id
    }

    /// Returns the number of tasks ever created.
    #[must_use]
    pub const fn total_tasks_created(&self) -> u64 {
        self.total_tasks_created
    }

    /// Returns the number of tasks ever completed.
    #[must_use]
    pub const fn total_tasks_completed(&self) -> u64 {
        self.total_tasks_completed
    }

    /// Checks that the created counter can advance.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::CounterOverflow`] at `u64::MAX`.
    pub const fn ensure_can_record_creation(&self) -> Result<(), TaskDomainError> {
        match self.total_tasks_created.checked_add(1) {
            Some(_) => Ok(()),
            None => Err(TaskDomainError::CounterOverflow { counter: "created" }),
        }
    }

    /// Checks that the completed counter can advance.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::CounterOverflow`] at `u64::MAX`.
    pub const fn ensure_can_record_completion(&self) -> Result<(), TaskDomainError> {
        match self.total_tasks_completed.checked_add(1) {
            Some(_) => Ok(()),
            None => Err(TaskDomainError::CounterOverflow {
                counter: "completed",
            }),
        }
    }

    /// Counts one newly created task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::CounterOverflow`] without modifying the
    /// board when the counter is exhausted.
    pub fn increment_created(&mut self) -> Result<u64, TaskDomainError> {
        self.ensure_can_record_creation()?;
        self.total_tasks_created += 1;
        Ok(self.total_tasks_created)
    }

    /// Counts one newly completed task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::CounterOverflow`] without modifying the
    /// board when the counter is exhausted.
    pub fn increment_completed(&mut self) -> Result<u64, TaskDomainError> {
        self.ensure_can_record_completion()?;
        self.total_tasks_completed += 1;
        Ok(self.total_tasks_completed)
    }

    #[cfg(test)]
    pub(crate) const fn with_totals(created: u64, completed: u64) -> Self {
        Self {
            id: BoardId::from_uuid(uuid::Uuid::nil()),
            total_tasks_created: created,
            total_tasks_completed: completed,
        }
    }
}

impl TryFrom<PersistedBoardData> for TaskBoard {
    type Error = PersistedStateError;

    fn try_from(data: PersistedBoardData) -> Result<Self, Self::Error> {
        Self::from_persisted(data)
    }
}
