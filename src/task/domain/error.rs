//! Error taxonomy for task reward operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Broad class of a [`TaskDomainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Malformed creation input.
    Validation,
    /// The caller lacks the required role or credential.
    Authorization,
    /// The entity is in an incompatible lifecycle state.
    State,
    /// A counter would leave its representable range.
    Arithmetic,
}

/// Errors raised by guarded task, profile and board mutations.
///
/// Every variant is detected before any state is written, so a returned
/// error always means the targeted entities are unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The presented credential was not minted for this ledger.
    #[error("caller does not hold the administrator credential")]
    NotAdmin,

    /// The task has already reached its terminal state.
    #[error("task is already completed")]
    TaskAlreadyCompleted,

    /// Only the current assignee may complete the task.
    #[error("caller is not the task assignee")]
    NotAssignee,

    /// Completion requires an assignee.
    #[error("task has no assignee")]
    TaskNotAssigned,

    /// Reward points must be positive.
    #[error("reward points must be greater than zero")]
    InvalidRewardPoints,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// Normal assignment only applies to unassigned tasks.
    #[error("task is already assigned")]
    TaskAlreadyAssigned,

    /// Only the task creator may assign the task.
    #[error("caller is not the task creator")]
    NotCreator,

    /// A board counter cannot be incremented any further.
    #[error("{counter} counter overflow")]
    CounterOverflow {
        /// Name of the saturated counter.
        counter: &'static str,
    },

    /// A profile accumulator cannot absorb the award.
    #[error("profile point total overflow")]
    PointsOverflow,
}

impl TaskDomainError {
    /// Returns the stable identifier callers match on.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotAdmin => "NotAdmin",
            Self::TaskAlreadyCompleted => "TaskAlreadyCompleted",
            Self::NotAssignee => "NotAssignee",
            Self::TaskNotAssigned => "TaskNotAssigned",
            Self::InvalidRewardPoints => "InvalidRewardPoints",
            Self::EmptyTitle => "EmptyTitle",
            Self::TaskAlreadyAssigned => "TaskAlreadyAssigned",
            Self::NotCreator => "NotCreator",
            Self::CounterOverflow { .. } => "CounterOverflow",
            Self::PointsOverflow => "PointsOverflow",
        }
    }

    /// Returns the stable numeric abort code.
    #[must_use]
    pub const fn abort_code(&self) -> u64 {
        match self {
            Self::NotAdmin => 0,
            Self::TaskAlreadyCompleted => 1,
            Self::NotAssignee => 2,
            Self::TaskNotAssigned => 3,
            Self::InvalidRewardPoints => 4,
            Self::EmptyTitle => 5,
            Self::TaskAlreadyAssigned => 6,
            Self::NotCreator => 7,
            Self::CounterOverflow { .. } => 8,
            Self::PointsOverflow => 9,
        }
    }

    /// Returns the error class.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidRewardPoints | Self::EmptyTitle => ErrorCategory::Validation,
            Self::NotAdmin | Self::NotAssignee | Self::NotCreator => ErrorCategory::Authorization,
            Self::TaskAlreadyCompleted | Self::TaskNotAssigned | Self::TaskAlreadyAssigned => {
                ErrorCategory::State
            }
            Self::CounterOverflow { .. } | Self::PointsOverflow => ErrorCategory::Arithmetic,
        }
    }
}

/// Error returned when a participant identity is blank or malformed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid participant identity: '{0}'")]
pub struct InvalidParticipantIdError(pub String);

/// Error returned when a persisted snapshot breaks an aggregate invariant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersistedStateError {
    /// Level outside the five-tier table.
    #[error("level {0} is outside 1..=5")]
    LevelOutOfRange(u8),
    /// Task title is blank.
    #[error("task title must not be blank")]
    BlankTitle,
    /// Task reward is zero.
    #[error("task reward must be positive")]
    ZeroReward,
    /// Task is completed but was never assigned.
    #[error("completed task has no assignee")]
    CompletedWithoutAssignee,
    /// Stored level disagrees with the stored point total.
    #[error("level {stored} does not match {points} points")]
    LevelMismatch {
        /// Level found in the snapshot.
        stored: u8,
        /// Point total found in the snapshot.
        points: u64,
    },
    /// Fewer points than completed tasks, although every reward is positive.
    #[error("{points} points cannot come from {completed} completed tasks")]
    PointsBelowCompletions {
        /// Point total found in the snapshot.
        points: u64,
        /// Completed task count found in the snapshot.
        completed: u64,
    },
    /// Board reports more completions than creations.
    #[error("{completed} completed tasks exceed {created} created")]
    CompletedExceedsCreated {
        /// Created counter found in the snapshot.
        created: u64,
        /// Completed counter found in the snapshot.
        completed: u64,
    },
}
