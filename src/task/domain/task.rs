//! Task aggregate root and its lifecycle state machine.

use super::{AdminCap, ParticipantId, PersistedStateError, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Persisted task status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is open and may still be assigned or completed.
    Pending,
    /// Task has been completed. Terminal.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Returns whether the status admits no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Lifecycle phase combining status and assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskPhase {
    /// Pending with no assignee.
    Unassigned,
    /// Pending with an assignee.
    Assigned,
    /// Completed.
    Completed,
}

/// Parameter object for restoring a task from a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted reward.
    pub reward_points: u64,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted creator.
    pub creator: ParticipantId,
    /// Persisted assignee, if any.
    pub assignee: Option<ParticipantId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Task aggregate root.
///
/// Only `assignee` and `status` change after creation. Deserialization goes
/// through [`Task::from_persisted`], so a snapshot cannot describe a task
/// that [`Task::new`] and the lifecycle methods could never produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersistedTaskData")]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    reward_points: u64,
    status: TaskStatus,
    creator: ParticipantId,
    assignee: Option<ParticipantId>,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending, unassigned task owned by `creator`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank and
    /// [`TaskDomainError::InvalidRewardPoints`] when `reward_points` is zero.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        reward_points: u64,
        creator: ParticipantId,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let owned_title = title.into();
        if owned_title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        if reward_points == 0 {
            return Err(TaskDomainError::InvalidRewardPoints);
        }

        Ok(Self {
            id: TaskId::new(),
            title: owned_title,
            description: description.into(),
            reward_points,
            status: TaskStatus::Pending,
            creator,
            assignee: None,
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a task from persisted data.
    ///
    /// # Errors
    ///
    /// Returns [`PersistedStateError`] when the title is blank, the reward is
    /// zero, or a completed task has no assignee.
    pub fn from_persisted(data: PersistedTaskData) -> Result<Self, PersistedStateError> {
        if data.title.trim().is_empty() {
            return Err(PersistedStateError::BlankTitle);
        }
        if data.reward_points == 0 {
            return Err(PersistedStateError::ZeroReward);
        }
        if data.status.is_terminal() && data.assignee.is_none() {
            return Err(PersistedStateError::CompletedWithoutAssignee);
        }

        Ok(Self {
            id: data.id,
            title: data.title,
            description: data.description,
            reward_points: data.reward_points,
            status: data.status,
            creator: data.creator,
            assignee: data.assignee,
            created_at: data.created_at,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the points awarded on completion.
    #[must_use]
    pub const fn reward_points(&self) -> u64 {
        self.reward_points
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the participant that created the task.
    #[must_use]
    pub const fn creator(&self) -> &ParticipantId {
        &self.creator
    }

    /// Returns the current assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&ParticipantId> {
        self.assignee.as_ref()
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns whether the task has an assignee.
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.assignee.is_some()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> TaskPhase {
        match (self.status, self.assignee.is_some()) {
            (TaskStatus::Completed, _) => TaskPhase::Completed,
            (TaskStatus::Pending, true) => TaskPhase::Assigned,
            (TaskStatus::Pending, false) => TaskPhase::Unassigned,
        }
    }

    /// Assigns the task on behalf of its creator.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotCreator`] when `caller` did not create
    /// the task, [`TaskDomainError::TaskAlreadyCompleted`] for completed
    /// tasks, and [`TaskDomainError::TaskAlreadyAssigned`] when an assignee
    /// is already set.
    pub fn assign(
        &mut self,
        caller: &ParticipantId,
        assignee: ParticipantId,
    ) -> Result<(), TaskDomainError> {
        if *caller != self.creator {
            return Err(TaskDomainError::NotCreator);
        }
        self.ensure_pending()?;
        if self.assignee.is_some() {
            return Err(TaskDomainError::TaskAlreadyAssigned);
        }
        self.assignee = Some(assignee);
        Ok(())
    }

    /// Overwrites the assignee under administrator authority.
    ///
    /// Any existing assignee is replaced. Returns the previous assignee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TaskAlreadyCompleted`] for completed tasks.
    pub fn reassign(
        &mut self,
        _cap: &AdminCap,
        new_assignee: ParticipantId,
    ) -> Result<Option<ParticipantId>, TaskDomainError> {
        self.ensure_pending()?;
        Ok(self.assignee.replace(new_assignee))
    }

    /// Validates that `caller` may complete the task right now.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TaskAlreadyCompleted`],
    /// [`TaskDomainError::TaskNotAssigned`] or
    /// [`TaskDomainError::NotAssignee`], checked in that order.
    pub fn ensure_completable_by(&self, caller: &ParticipantId) -> Result<(), TaskDomainError> {
        self.ensure_pending()?;
        match &self.assignee {
            None => Err(TaskDomainError::TaskNotAssigned),
            Some(assignee) if assignee != caller => Err(TaskDomainError::NotAssignee),
            Some(_) => Ok(()),
        }
    }

    /// Moves the task into its terminal state and returns the reward.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Task::ensure_completable_by`].
    pub fn complete(&mut self, caller: &ParticipantId) -> Result<u64, TaskDomainError> {
        self.ensure_completable_by(caller)?;
        self.status = TaskStatus::Completed;
        Ok(self.reward_points)
    }

    const fn ensure_pending(&self) -> Result<(), TaskDomainError> {
        if self.status.is_terminal() {
            return Err(TaskDomainError::TaskAlreadyCompleted);
        }
        Ok(())
    }
}

impl TryFrom<PersistedTaskData> for Task {
    type Error = PersistedStateError;

    fn try_from(data: PersistedTaskData) -> Result<Self, Self::Error> {
        Self::from_persisted(data)
    }
}
