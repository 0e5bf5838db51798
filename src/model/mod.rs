mod achievement;
mod badge;
mod player_stats;
mod problem_timer;
mod unlock_record;

pub use achievement::{AchievementDefinition, AchievementRule};
pub use badge::{BadgeDefinition, BadgeProgress};
pub use player_stats::PlayerStats;
pub use problem_timer::ProblemTimer;
pub use unlock_record::{
    AchievementStatus, UnlockKind, UnlockRecord, UnlockedAchievement, UnlockedBadge,
};
