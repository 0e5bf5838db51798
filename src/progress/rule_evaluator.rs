//! Pure unlock evaluation.
//!
//! Nothing here reads or writes storage, so re-running evaluation after any
//! stats change only ever yields the delta against what is already unlocked.

use log::trace;
use std::collections::HashSet;

use super::catalogue::AchievementCatalogue;
use crate::model::{AchievementDefinition, BadgeDefinition, BadgeProgress, PlayerStats};

/// Achievements not in `already_unlocked` whose rule now holds, in declaration order.
pub fn evaluate_achievements<'a>(
    catalogue: &'a AchievementCatalogue,
    stats: &PlayerStats,
    already_unlocked: &HashSet<String>,
) -> Vec<&'a AchievementDefinition> {
    catalogue
        .achievements()
        .iter()
        .filter(|achievement| !already_unlocked.contains(achievement.id))
        .filter(|achievement| {
            let satisfied = achievement.is_satisfied(stats);
            trace!(target: "rules", "{} -> {}", achievement.id, satisfied);
            satisfied
        })
        .collect()
}

/// Badges not in `already_unlocked` whose threshold `stars` reaches, lowest threshold first.
pub fn evaluate_badges<'a>(
    catalogue: &'a AchievementCatalogue,
    stars: u32,
    already_unlocked: &HashSet<String>,
) -> Vec<&'a BadgeDefinition> {
    catalogue
        .badges()
        .iter()
        .filter(|badge| !already_unlocked.contains(badge.id))
        .filter(|badge| badge.is_satisfied(stars))
        .collect()
}

/// Progress toward the lowest-threshold badge still locked, `None` once all are unlocked.
pub fn next_badge_progress(
    catalogue: &AchievementCatalogue,
    stars: u32,
    already_unlocked: &HashSet<String>,
) -> Option<BadgeProgress> {
    catalogue
        .badges()
        .iter()
        .find(|badge| !already_unlocked.contains(badge.id))
        .map(|badge| BadgeProgress::new(badge.clone(), stars))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unlocked(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_nothing_unlocks_for_fresh_stats() {
        let catalogue = AchievementCatalogue::default();
        let hits = evaluate_achievements(&catalogue, &PlayerStats::default(), &unlocked(&[]));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_declaration_order() {
        let catalogue = AchievementCatalogue::default();
        let stats = PlayerStats {
            total_problems: 100,
            current_streak: 10,
            fast_solves: 5,
            ..Default::default()
        };

        let hits = evaluate_achievements(&catalogue, &stats, &unlocked(&[]));
        assert_eq!(
            hits.iter().map(|hit| hit.id).collect::<Vec<_>>(),
            vec![
                "first-step",
                "super-starter",
                "math-master",
                "on-fire",
                "unstoppable",
                "quick-thinker",
                "dedicated-learner",
            ]
        );
    }

    #[test]
    fn test_skips_already_unlocked() {
        let catalogue = AchievementCatalogue::default();
        let stats = PlayerStats {
            total_problems: 10,
            ..Default::default()
        };

        let hits = evaluate_achievements(&catalogue, &stats, &unlocked(&["first-step"]));
        assert_eq!(
            hits.iter().map(|hit| hit.id).collect::<Vec<_>>(),
            vec!["super-starter"]
        );
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let catalogue = AchievementCatalogue::default();
        let stats = PlayerStats {
            total_problems: 12,
            current_streak: 6,
            ..Default::default()
        };
        let already = unlocked(&["first-step"]);

        let first = evaluate_achievements(&catalogue, &stats, &already);
        let second = evaluate_achievements(&catalogue, &stats, &already);
        assert_eq!(first, second);
        assert!(first.iter().all(|a| !already.contains(a.id)));
    }

    #[test]
    fn test_badges_by_stars() {
        let catalogue = AchievementCatalogue::default();

        assert!(evaluate_badges(&catalogue, 9, &unlocked(&[])).is_empty());

        let hits = evaluate_badges(&catalogue, 30, &unlocked(&[]));
        assert_eq!(
            hits.iter().map(|hit| hit.id).collect::<Vec<_>>(),
            vec!["bronze-star", "silver-star"]
        );

        let hits = evaluate_badges(&catalogue, 30, &unlocked(&["bronze-star"]));
        assert_eq!(hits.iter().map(|hit| hit.id).collect::<Vec<_>>(), vec!["silver-star"]);
    }

    #[test]
    fn test_next_badge_progress() {
        let catalogue = AchievementCatalogue::default();

        let progress = next_badge_progress(&catalogue, 9, &unlocked(&[])).unwrap();
        assert_eq!(progress.badge.id, "bronze-star");
        assert_eq!(progress.current, 9);
        assert_eq!(progress.needed, 10);
        assert_eq!(progress.progress_percent, 90.0);

        let progress = next_badge_progress(&catalogue, 12, &unlocked(&["bronze-star"])).unwrap();
        assert_eq!(progress.badge.id, "silver-star");
        assert_eq!(progress.needed, 25);
    }

    #[test]
    fn test_next_badge_progress_skips_out_of_order_unlocks() {
        let catalogue = AchievementCatalogue::default();
        let progress =
            next_badge_progress(&catalogue, 60, &unlocked(&["silver-star", "gold-star"])).unwrap();
        assert_eq!(progress.badge.id, "bronze-star");
        assert_eq!(progress.progress_percent, 100.0);
    }

    #[test]
    fn test_next_badge_progress_none_when_complete() {
        let catalogue = AchievementCatalogue::default();
        let all = unlocked(&["bronze-star", "silver-star", "gold-star", "diamond-star"]);
        assert!(next_badge_progress(&catalogue, 150, &all).is_none());
    }
}
