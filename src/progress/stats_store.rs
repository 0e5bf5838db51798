use log::{debug, error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::time::SystemTime;

use crate::model::{PlayerStats, UnlockKind, UnlockRecord};
use crate::storage::KeyValueStore;

/// Persisted field names, before the profile prefix is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsKey {
    Achievements,
    Badges,
    Stars,
    BestStreak,
    TotalProblems,
    GameStats,
    GamesPlayed,
    FastSolves,
}

impl StatsKey {
    pub const ALL: [StatsKey; 8] = [
        StatsKey::Achievements,
        StatsKey::Badges,
        StatsKey::Stars,
        StatsKey::BestStreak,
        StatsKey::TotalProblems,
        StatsKey::GameStats,
        StatsKey::GamesPlayed,
        StatsKey::FastSolves,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StatsKey::Achievements => "achievements",
            StatsKey::Badges => "badges",
            StatsKey::Stars => "stars",
            StatsKey::BestStreak => "best_streak",
            StatsKey::TotalProblems => "total_problems",
            StatsKey::GameStats => "game_stats",
            StatsKey::GamesPlayed => "games_played",
            StatsKey::FastSolves => "fast_solves",
        }
    }

    fn for_records(kind: UnlockKind) -> StatsKey {
        match kind {
            UnlockKind::Achievement => StatsKey::Achievements,
            UnlockKind::Badge => StatsKey::Badges,
        }
    }
}

/// Durable player counters and unlock records on top of a string key-value store.
///
/// Reads never fail: absent or unparsable values come back as their zero value.
/// Writes that fail are logged and dropped so that gameplay is never interrupted.
/// The running streak is session state and is not persisted.
#[derive(Debug)]
pub struct StatsStore<S: KeyValueStore> {
    store: S,
    prefix: String,
    fast_solve_threshold_ms: u64,
    current_streak: u32,
}

impl<S: KeyValueStore> StatsStore<S> {
    pub fn new(store: S, prefix: impl Into<String>, fast_solve_threshold_ms: u64) -> Self {
        Self {
            store,
            prefix: prefix.into(),
            fast_solve_threshold_ms,
            current_streak: 0,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn key(&self, key: StatsKey) -> String {
        format!("{}{}", self.prefix, key.name())
    }

    fn read_u32(&self, key: StatsKey) -> u32 {
        let Some(value) = self.store.get(&self.key(key)) else {
            return 0;
        };
        match value.trim().parse::<u32>() {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!("Treating malformed {} ({:?}) as 0: {}", key.name(), value, err);
                0
            }
        }
    }

    fn read_json<T: DeserializeOwned + Default>(&self, key: StatsKey) -> T {
        let Some(value) = self.store.get(&self.key(key)) else {
            return T::default();
        };
        match serde_json::from_str(&value) {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!("Treating malformed {} as empty: {}", key.name(), err);
                T::default()
            }
        }
    }

    fn write(&mut self, key: StatsKey, value: String) {
        let full_key = self.key(key);
        if let Err(err) = self.store.set(&full_key, value) {
            error!("Failed to persist {}: {}", full_key, err);
        }
    }

    fn write_u32(&mut self, key: StatsKey, value: u32) {
        self.write(key, value.to_string());
    }

    fn write_json<T: Serialize>(&mut self, key: StatsKey, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.write(key, json),
            Err(err) => error!("Failed to serialize {}: {}", key.name(), err),
        }
    }

    pub fn game_stats(&self) -> BTreeMap<String, u32> {
        self.read_json(StatsKey::GameStats)
    }

    pub fn stats(&self) -> PlayerStats {
        let game_stats = self.game_stats();
        PlayerStats {
            total_problems: self.read_u32(StatsKey::TotalProblems),
            current_streak: self.current_streak,
            best_streak: self.read_u32(StatsKey::BestStreak),
            stars: self.stars(),
            games_played: u32::try_from(game_stats.len()).unwrap_or(u32::MAX),
            game_stats,
            fast_solves: self.read_u32(StatsKey::FastSolves),
        }
    }

    pub fn stars(&self) -> u32 {
        self.read_u32(StatsKey::Stars)
    }

    pub fn is_fast_solve(&self, elapsed_ms: u64) -> bool {
        elapsed_ms > 0 && elapsed_ms < self.fast_solve_threshold_ms
    }

    /// The only mutator of gameplay counters.
    pub fn apply_completion(&mut self, game_id: &str, correct: bool, elapsed_ms: u64) {
        let total_problems = self.read_u32(StatsKey::TotalProblems).saturating_add(1);
        self.write_u32(StatsKey::TotalProblems, total_problems);

        if correct {
            self.current_streak = self.current_streak.saturating_add(1);
            let best_streak = self.read_u32(StatsKey::BestStreak);
            if self.current_streak > best_streak {
                self.write_u32(StatsKey::BestStreak, self.current_streak);
            }

            if self.is_fast_solve(elapsed_ms) {
                let fast_solves = self.read_u32(StatsKey::FastSolves).saturating_add(1);
                self.write_u32(StatsKey::FastSolves, fast_solves);
            }
        } else {
            self.current_streak = 0;
        }

        let mut game_stats = self.game_stats();
        let count = game_stats.entry(game_id.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        let games_played = u32::try_from(game_stats.len()).unwrap_or(u32::MAX);
        self.write_json(StatsKey::GameStats, &game_stats);
        // cached for readers of the raw layout; never read back
        self.write_u32(StatsKey::GamesPlayed, games_played);

        debug!(
            "Completion in {:?}: correct={} elapsed={}ms total={} streak={}",
            game_id, correct, elapsed_ms, total_problems, self.current_streak
        );
    }

    pub fn add_stars(&mut self, count: u32) {
        if count == 0 {
            return;
        }
        let stars = self.stars().saturating_add(count);
        self.write_u32(StatsKey::Stars, stars);
    }

    /// Stored entries as raw JSON, including ones that no longer parse as a record.
    fn raw_records(&self, kind: UnlockKind) -> BTreeMap<String, Value> {
        self.read_json(StatsKey::for_records(kind))
    }

    /// Readable unlock records. Damaged entries are skipped one by one.
    pub fn records(&self, kind: UnlockKind) -> BTreeMap<String, UnlockRecord> {
        self.raw_records(kind)
            .into_iter()
            .filter_map(|(id, value)| match serde_json::from_value(value) {
                Ok(record) => Some((id, record)),
                Err(err) => {
                    warn!("Skipping malformed {:?} record {}: {}", kind, id, err);
                    None
                }
            })
            .collect()
    }

    /// Every stored id, damaged entries included.
    pub fn unlocked_ids(&self, kind: UnlockKind) -> HashSet<String> {
        self.raw_records(kind).into_keys().collect()
    }

    /// Returns false, leaving the existing record untouched, when `id` is already unlocked.
    pub fn record_unlock(&mut self, kind: UnlockKind, id: &str, now: SystemTime) -> bool {
        let mut records = self.raw_records(kind);
        if records.contains_key(id) {
            return false;
        }
        let record = match serde_json::to_value(UnlockRecord::new(now)) {
            Ok(record) => record,
            Err(err) => {
                error!("Failed to serialize {:?} record {}: {}", kind, id, err);
                return false;
            }
        };
        records.insert(id.to_string(), record);
        self.write_json(StatsKey::for_records(kind), &records);
        info!("Unlocked {:?} {}", kind, id);
        true
    }

    pub fn mark_all_seen(&mut self, kind: UnlockKind) {
        let mut records = self.raw_records(kind);
        let mut changed = false;
        for record in records.values_mut().filter_map(Value::as_object_mut) {
            if record.get("seen") != Some(&Value::Bool(true)) {
                record.insert("seen".to_string(), Value::Bool(true));
                changed = true;
            }
        }
        if changed {
            self.write_json(StatsKey::for_records(kind), &records);
        }
    }

    pub fn reset_all(&mut self) {
        for key in StatsKey::ALL {
            let full_key = self.key(key);
            if let Err(err) = self.store.remove(&full_key) {
                error!("Failed to remove {}: {}", full_key, err);
            }
        }
        self.current_streak = 0;
        info!("Progress reset for profile {:?}", self.prefix);
    }
}
