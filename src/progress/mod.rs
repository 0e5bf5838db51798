pub mod catalogue;
mod game_session;
pub mod progression_engine;
pub mod rule_evaluator;
pub mod settings;
pub mod stats_store;

pub use catalogue::{AchievementCatalogue, CatalogueError, KNOWN_GAMES};
pub use game_session::GameSession;
pub use progression_engine::{ProgressionEngine, SharedEngine};
pub use rule_evaluator::{evaluate_achievements, evaluate_badges, next_badge_progress};
pub use settings::Settings;
pub use stats_store::{StatsKey, StatsStore};
