//! Fixed five-tier level table derived from cumulative points.

use super::PersistedStateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Participant level in the range `1..=5`.
///
/// A level is never stored independently of the points that produced it:
/// [`Level::for_points`] is the only way to derive one from a point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

/// Point thresholds ordered highest-first.
const THRESHOLDS: [(u64, Level); 4] = [
    (1000, Level(5)),
    (600, Level(4)),
    (300, Level(3)),
    (100, Level(2)),
];

impl Level {
    /// Starting level for every profile.
    pub const MIN: Self = Self(1);

    /// Highest reachable level.
    pub const MAX: Self = Self(5);

    /// Returns the level reached with `total_points`.
    ///
    /// A total exactly on a threshold reaches that tier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use task_rewards::task::domain::Level;
    ///
    /// assert_eq!(Level::for_points(99).value(), 1);
    /// assert_eq!(Level::for_points(100).value(), 2);
    /// assert_eq!(Level::for_points(5_000).value(), 5);
    /// ```
    #[must_use]
    pub fn for_points(total_points: u64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(threshold, _)| total_points >= *threshold)
            .map_or(Self::MIN, |(_, level)| *level)
    }

    /// Returns the numeric level.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for Level {
    type Error = PersistedStateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PersistedStateError::LevelOutOfRange(value))
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
