use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::TimestampMilliSeconds;
use std::time::SystemTime;

use super::{AchievementDefinition, BadgeDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnlockKind {
    Achievement,
    Badge,
}

/// Persisted proof that an achievement or badge was unlocked.
///
/// Stored as `{"unlockedAt": <epoch millis>, "seen": <bool>}` under the record's id.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockRecord {
    #[serde(rename = "unlockedAt")]
    #[serde_as(as = "TimestampMilliSeconds<i64>")]
    pub unlocked_at: SystemTime,
    #[serde(default)]
    pub seen: bool,
}

impl UnlockRecord {
    pub fn new(unlocked_at: SystemTime) -> Self {
        Self {
            unlocked_at,
            seen: false,
        }
    }
}

/// An achievement definition joined with its unlock record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockedAchievement {
    pub definition: AchievementDefinition,
    pub unlocked_at: SystemTime,
    pub seen: bool,
}

impl UnlockedAchievement {
    pub fn new(definition: AchievementDefinition, record: &UnlockRecord) -> Self {
        Self {
            definition,
            unlocked_at: record.unlocked_at,
            seen: record.seen,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockedBadge {
    pub definition: BadgeDefinition,
    pub unlocked_at: SystemTime,
    pub seen: bool,
}

impl UnlockedBadge {
    pub fn new(definition: BadgeDefinition, record: &UnlockRecord) -> Self {
        Self {
            definition,
            unlocked_at: record.unlocked_at,
            seen: record.seen,
        }
    }
}

/// One row of the full achievement grid, locked or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementStatus {
    pub definition: AchievementDefinition,
    pub record: Option<UnlockRecord>,
}

impl AchievementStatus {
    pub fn is_unlocked(&self) -> bool {
        self.record.is_some()
    }
}
