//! Per-participant reward profile.

use super::{Level, ParticipantId, PersistedStateError, ProfileId, TaskDomainError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Outcome of awarding points to a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Award {
    /// Points added by this award.
    pub points: u64,
    /// Point total after the award.
    pub total_points: u64,
    /// New level, present only when the award raised it.
    pub level_up: Option<Level>,
}

/// Parameter object for restoring a profile from a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistedProfileData {
    /// Persisted profile identifier.
    pub id: ProfileId,
    /// Persisted owner.
    pub owner: ParticipantId,
    /// Persisted completion count.
    pub total_tasks_completed: u64,
    /// Persisted point total.
    pub total_points_earned: u64,
    /// Persisted level.
    pub level: Level,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Accumulator of completed tasks, points and the derived level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersistedProfileData")]
pub struct UserProfile {
    id: ProfileId,
    owner: ParticipantId,
    total_tasks_completed: u64,
    total_points_earned: u64,
    level: Level,
    created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Creates an empty level-one profile for `owner`.
    #[must_use]
    pub fn new(owner: ParticipantId, clock: &impl Clock) -> Self {
        Self {
            id: ProfileId::new(),
            owner,
            total_tasks_completed: 0,
            total_points_earned: 0,
            level: Level::MIN,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a profile from persisted data.
    ///
    /// # Errors
    ///
    /// Returns [`PersistedStateError::LevelMismatch`] when the level is not
    /// the one derived from the point total, and
    /// [`PersistedStateError::PointsBelowCompletions`] when the totals could
    /// not come from positive rewards.
    pub fn from_persisted(data: PersistedProfileData) -> Result<Self, PersistedStateError> {
        if data.level != Level::for_points(data.total_points_earned) {
            return Err(PersistedStateError::LevelMismatch {
                stored: data.level.value(),
                points: data.total_points_earned,
            });
        }
        if data.total_points_earned < data.total_tasks_completed {
            return Err(PersistedStateError::PointsBelowCompletions {
                points: data.total_points_earned,
                completed: data.total_tasks_completed,
            });
        }

        Ok(Self {
            id: data.id,
            owner: data.owner,
            total_tasks_completed: data.total_tasks_completed,
            total_points_earned: data.total_points_earned,
            level: data.level,
            created_at: data.created_at,
        })
    }

    /// Returns the profile identifier.
    #[must_use]
    pub const fn id(&self) -> ProfileId {
        self.id
    }

    /// Returns the owning participant.
    #[must_use]
    pub const fn owner(&self) -> &ParticipantId {
        &self.owner
    }

    /// Returns the number of tasks completed.
    #[must_use]
    pub const fn total_tasks_completed(&self) -> u64 {
        self.total_tasks_completed
    }

    /// Returns the cumulative points earned.
    #[must_use]
    pub const fn total_points_earned(&self) -> u64 {
        self.total_points_earned
    }

    /// Returns the current level.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Checks that an award of `points` would fit in both accumulators.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PointsOverflow`] when either counter would
    /// overflow.
    pub const fn ensure_can_award(&self, points: u64) -> Result<(), TaskDomainError> {
        if self.total_tasks_completed.checked_add(1).is_none()
            || self.total_points_earned.checked_add(points).is_none()
        {
            return Err(TaskDomainError::PointsOverflow);
        }
        Ok(())
    }

    /// Records one completed task worth `points` and recomputes the level.
    ///
    /// The level is rederived from the full point total on every award and
    /// only ever moves upward.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PointsOverflow`] without modifying the
    /// profile when either counter would overflow.
    pub fn award(&mut self, points: u64) -> Result<Award, TaskDomainError> {
        self.ensure_can_award(points)?;
        self.total_tasks_completed += 1;
        self.total_points_earned += points;
        let level_up = self.recompute_level();
        Ok(Award {
            points,
            total_points: self.total_points_earned,
            level_up,
        })
    }

    fn recompute_level(&mut self) -> Option<Level> {
        let derived = Level::for_points(self.total_points_earned);
        if derived > self.level {
            self.level = derived;
            return Some(derived);
        }
        None
    }
}

impl TryFrom<PersistedProfileData> for UserProfile {
    type Error = PersistedStateError;

    fn try_from(data: PersistedProfileData) -> Result<Self, Self::Error> {
        Self::from_persisted(data)
    }
}
