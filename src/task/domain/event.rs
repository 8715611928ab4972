//! Audit records emitted by successful mutations.

use super::{Level, ParticipantId, ProfileId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Originator of an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "participant", rename_all = "snake_case")]
pub enum AssignedBy {
    /// The task creator assigned the task.
    Participant(ParticipantId),
    /// An administrator credential holder overrode the assignee.
    Admin,
}

/// Snapshot of a state change, captured at the moment it happened.
///
/// Events hold copies of the relevant fields rather than references to the
/// entities, so later mutations never alter a recorded event.
///
/// # Examples
///
/// ```rust
/// use task_rewards::task::domain::{LedgerEvent, ParticipantId, ProfileId};
///
/// let owner = ParticipantId::new("alice").expect("valid participant");
/// let event = LedgerEvent::ProfileCreated {
///     profile_id: ProfileId::new(),
///     owner,
/// };
/// assert_eq!(event.event_type(), "profile_created");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum LedgerEvent {
    /// A task was created.
    TaskCreated {
        /// Created task.
        task_id: TaskId,
        /// Participant that created it.
        creator: ParticipantId,
        /// Title at creation.
        title: String,
        /// Reward offered.
        reward_points: u64,
    },
    /// A task received an assignee.
    TaskAssigned {
        /// Assigned task.
        task_id: TaskId,
        /// New assignee.
        assignee: ParticipantId,
        /// Who performed the assignment.
        assigned_by: AssignedBy,
    },
    /// A task was completed.
    TaskCompleted {
        /// Completed task.
        task_id: TaskId,
        /// Assignee that completed it.
        completed_by: ParticipantId,
        /// Points awarded for the completion.
        points_awarded: u64,
    },
    /// A profile reached a higher level.
    UserLeveledUp {
        /// Profile that leveled up.
        profile_id: ProfileId,
        /// Profile owner.
        owner: ParticipantId,
        /// Level reached.
        new_level: Level,
        /// Point total when the level was reached.
        total_points: u64,
    },
    /// A profile was created.
    ProfileCreated {
        /// Created profile.
        profile_id: ProfileId,
        /// Profile owner.
        owner: ParticipantId,
    },
}

impl LedgerEvent {
    /// Returns the canonical event name.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::TaskCreated { .. } => "task_created",
            Self::TaskAssigned { .. } => "task_assigned",
            Self::TaskCompleted { .. } => "task_completed",
            Self::UserLeveledUp { .. } => "user_leveled_up",
            Self::ProfileCreated { .. } => "profile_created",
        }
    }
}

/// An event as stored in an append-only audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Position in the log, starting at 1 without gaps.
    pub sequence: u64,
    /// When the record was appended.
    pub occurred_at: DateTime<Utc>,
    /// Recorded event.
    pub event: LedgerEvent,
}
