pub mod model;
pub mod progress;
pub mod storage;

pub use model::{AchievementDefinition, BadgeDefinition, BadgeProgress, PlayerStats};
pub use progress::{GameSession, ProgressionEngine, Settings};

fluent_i18n::i18n!("locales", fallback = "en");
