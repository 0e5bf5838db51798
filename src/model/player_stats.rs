use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of everything the achievement rules can look at.
///
/// Assembled fresh from the stats store on every read; never persisted as a whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub total_problems: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub stars: u32,
    pub game_stats: BTreeMap<String, u32>,
    pub games_played: u32,
    pub fast_solves: u32,
}

impl PlayerStats {
    /// Completed problems for one game, 0 when the game was never played.
    pub fn completions_for(&self, game_id: &str) -> u32 {
        self.game_stats.get(game_id).copied().unwrap_or(0)
    }
}
