use itertools::Itertools;
use log::{debug, info};
use std::cell::RefCell;
use std::cmp::Reverse;
use std::rc::Rc;
use std::time::SystemTime;

use super::catalogue::AchievementCatalogue;
use super::rule_evaluator::{evaluate_achievements, evaluate_badges, next_badge_progress};
use super::settings::Settings;
use super::stats_store::StatsStore;
use crate::model::{
    AchievementDefinition, AchievementStatus, BadgeProgress, PlayerStats, UnlockKind,
    UnlockedAchievement, UnlockedBadge,
};
use crate::storage::KeyValueStore;

pub type SharedEngine<S> = Rc<RefCell<ProgressionEngine<S>>>;

/// Entry point for every mini-game and display surface of one player profile.
pub struct ProgressionEngine<S: KeyValueStore> {
    stats_store: StatsStore<S>,
    catalogue: AchievementCatalogue,
}

impl<S: KeyValueStore> ProgressionEngine<S> {
    pub fn new(store: S, settings: &Settings) -> Self {
        Self::with_catalogue(store, settings, AchievementCatalogue::default())
    }

    pub fn with_catalogue(store: S, settings: &Settings, catalogue: AchievementCatalogue) -> Self {
        Self {
            stats_store: StatsStore::new(
                store,
                settings.profile.clone(),
                settings.fast_solve_threshold_ms,
            ),
            catalogue,
        }
    }

    pub fn into_shared(self) -> SharedEngine<S> {
        Rc::new(RefCell::new(self))
    }

    pub fn catalogue(&self) -> &AchievementCatalogue {
        &self.catalogue
    }

    pub fn store(&self) -> &S {
        self.stats_store.store()
    }

    /// Records one judged problem and returns the achievements it unlocked,
    /// in declaration order. Badge unlocks are recorded but not returned.
    pub fn record_completion(
        &mut self,
        game_id: &str,
        correct: bool,
        elapsed_ms: u64,
    ) -> Vec<AchievementDefinition> {
        self.record_completion_at(game_id, correct, elapsed_ms, SystemTime::now())
    }

    pub fn record_completion_at(
        &mut self,
        game_id: &str,
        correct: bool,
        elapsed_ms: u64,
        now: SystemTime,
    ) -> Vec<AchievementDefinition> {
        self.stats_store.apply_completion(game_id, correct, elapsed_ms);

        let stats = self.stats_store.stats();
        let already_unlocked = self.stats_store.unlocked_ids(UnlockKind::Achievement);
        let unlocked: Vec<AchievementDefinition> =
            evaluate_achievements(&self.catalogue, &stats, &already_unlocked)
                .into_iter()
                .cloned()
                .collect();

        for achievement in &unlocked {
            if self
                .stats_store
                .record_unlock(UnlockKind::Achievement, achievement.id, now)
            {
                self.stats_store.add_stars(achievement.star_reward);
            }
        }

        self.unlock_badges(now);

        if !unlocked.is_empty() {
            info!(
                "{} unlocked {}",
                game_id,
                unlocked.iter().map(|a| a.id).join(", ")
            );
        }
        unlocked
    }

    fn unlock_badges(&mut self, now: SystemTime) {
        let stars = self.stats_store.stars();
        let already_unlocked = self.stats_store.unlocked_ids(UnlockKind::Badge);
        let badge_ids: Vec<&'static str> =
            evaluate_badges(&self.catalogue, stars, &already_unlocked)
                .into_iter()
                .map(|badge| badge.id)
                .collect();

        for id in badge_ids {
            self.stats_store.record_unlock(UnlockKind::Badge, id, now);
        }
    }

    pub fn stats(&self) -> PlayerStats {
        self.stats_store.stats()
    }

    /// Most recent first; unlocks sharing a timestamp keep declaration order.
    pub fn unlocked_achievements(&self) -> Vec<UnlockedAchievement> {
        let records = self.stats_store.records(UnlockKind::Achievement);
        self.catalogue
            .achievements()
            .iter()
            .filter_map(|definition| {
                records
                    .get(definition.id)
                    .map(|record| UnlockedAchievement::new(definition.clone(), record))
            })
            .sorted_by_key(|unlocked| Reverse(unlocked.unlocked_at))
            .collect()
    }

    pub fn unseen_achievements(&self) -> Vec<UnlockedAchievement> {
        let records = self.stats_store.records(UnlockKind::Achievement);
        self.catalogue
            .achievements()
            .iter()
            .filter_map(|definition| {
                records
                    .get(definition.id)
                    .filter(|record| !record.seen)
                    .map(|record| UnlockedAchievement::new(definition.clone(), record))
            })
            .collect()
    }

    pub fn mark_achievements_seen(&mut self) {
        self.stats_store.mark_all_seen(UnlockKind::Achievement);
    }

    /// Definition order, i.e. ascending star threshold.
    pub fn unlocked_badges(&self) -> Vec<UnlockedBadge> {
        let records = self.stats_store.records(UnlockKind::Badge);
        self.catalogue
            .badges()
            .iter()
            .filter_map(|definition| {
                records
                    .get(definition.id)
                    .map(|record| UnlockedBadge::new(definition.clone(), record))
            })
            .collect()
    }

    pub fn unseen_badges(&self) -> Vec<UnlockedBadge> {
        self.unlocked_badges()
            .into_iter()
            .filter(|badge| !badge.seen)
            .collect()
    }

    pub fn mark_badges_seen(&mut self) {
        self.stats_store.mark_all_seen(UnlockKind::Badge);
    }

    pub fn next_badge_progress(&self) -> Option<BadgeProgress> {
        next_badge_progress(
            &self.catalogue,
            self.stats_store.stars(),
            &self.stats_store.unlocked_ids(UnlockKind::Badge),
        )
    }

    /// Every achievement in declaration order with its unlock record, if any.
    pub fn achievement_overview(&self) -> Vec<AchievementStatus> {
        let records = self.stats_store.records(UnlockKind::Achievement);
        self.catalogue
            .achievements()
            .iter()
            .map(|definition| AchievementStatus {
                definition: definition.clone(),
                record: records.get(definition.id).copied(),
            })
            .collect()
    }

    /// Unlocked achievements that still exist in the catalogue.
    pub fn unlocked_count(&self) -> usize {
        let records = self.stats_store.records(UnlockKind::Achievement);
        self.catalogue
            .achievements()
            .iter()
            .filter(|definition| records.contains_key(definition.id))
            .count()
    }

    /// Erases every persisted counter and record for this profile. Irreversible.
    pub fn reset_progress(&mut self) {
        debug!("Resetting progress");
        self.stats_store.reset_all();
    }
}
