use std::collections::HashSet;
use thiserror::Error;

use crate::model::{AchievementDefinition, AchievementRule, BadgeDefinition};

/// Identifiers the bundled mini-games report completions under.
///
/// Informational only: completions for any other id are tracked all the same.
pub const KNOWN_GAMES: [&str; 9] = [
    "number-line-leap",
    "operation-pop",
    "math-stacker",
    "fact-family-farm",
    "place-value-puzzles",
    "storekeeper-stories",
    "pattern-painter",
    "galaxy-math-defender",
    "fraction-forest-run",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("Duplicate id in catalogue: {0}")]
    DuplicateId(String),
    #[error("Achievement {0} grants no stars")]
    ZeroStarReward(String),
    #[error("Badge {0} has a zero star threshold")]
    ZeroThreshold(String),
}

/// The static rule set: achievements in declaration order, badges by ascending threshold.
#[derive(Debug, Clone)]
pub struct AchievementCatalogue {
    achievements: Vec<AchievementDefinition>,
    badges: Vec<BadgeDefinition>,
}

impl Default for AchievementCatalogue {
    fn default() -> Self {
        Self {
            achievements: standard_achievements(),
            badges: standard_badges(),
        }
    }
}

impl AchievementCatalogue {
    pub fn new(
        achievements: Vec<AchievementDefinition>,
        mut badges: Vec<BadgeDefinition>,
    ) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::new();
        for achievement in &achievements {
            if !seen.insert(achievement.id) {
                return Err(CatalogueError::DuplicateId(achievement.id.to_string()));
            }
            if achievement.star_reward == 0 {
                return Err(CatalogueError::ZeroStarReward(achievement.id.to_string()));
            }
        }

        let mut seen = HashSet::new();
        for badge in &badges {
            if !seen.insert(badge.id) {
                return Err(CatalogueError::DuplicateId(badge.id.to_string()));
            }
            if badge.star_threshold == 0 {
                return Err(CatalogueError::ZeroThreshold(badge.id.to_string()));
            }
        }

        // stable, so equal thresholds keep declaration order
        badges.sort_by_key(|badge| badge.star_threshold);

        Ok(Self {
            achievements,
            badges,
        })
    }

    pub fn achievements(&self) -> &[AchievementDefinition] {
        &self.achievements
    }

    pub fn badges(&self) -> &[BadgeDefinition] {
        &self.badges
    }

    pub fn achievement(&self, id: &str) -> Option<&AchievementDefinition> {
        self.achievements.iter().find(|a| a.id == id)
    }

    pub fn badge(&self, id: &str) -> Option<&BadgeDefinition> {
        self.badges.iter().find(|b| b.id == id)
    }
}

fn standard_achievements() -> Vec<AchievementDefinition> {
    vec![
        AchievementDefinition::new("first-step", "👣", 1, AchievementRule::TotalProblems(1)),
        AchievementDefinition::new("super-starter", "🌟", 2, AchievementRule::TotalProblems(10)),
        AchievementDefinition::new("math-master", "👑", 5, AchievementRule::TotalProblems(50)),
        AchievementDefinition::new("on-fire", "🔥", 3, AchievementRule::CurrentStreak(5)),
        AchievementDefinition::new("unstoppable", "⚡", 5, AchievementRule::CurrentStreak(10)),
        AchievementDefinition::new(
            "frog-master",
            "🐸",
            2,
            AchievementRule::GameCompletions {
                game_id: "number-line-leap",
                count: 10,
            },
        ),
        AchievementDefinition::new(
            "balloon-popper",
            "🎈",
            3,
            AchievementRule::GameCompletions {
                game_id: "operation-pop",
                count: 50,
            },
        ),
        AchievementDefinition::new(
            "tower-builder",
            "🏗️",
            2,
            AchievementRule::GameCompletions {
                game_id: "math-stacker",
                count: 15,
            },
        ),
        AchievementDefinition::new(
            "farmer",
            "👨‍🌾",
            3,
            AchievementRule::GameCompletions {
                game_id: "fact-family-farm",
                count: 20,
            },
        ),
        AchievementDefinition::new(
            "builder",
            "🧱",
            2,
            AchievementRule::GameCompletions {
                game_id: "place-value-puzzles",
                count: 15,
            },
        ),
        AchievementDefinition::new(
            "shopkeeper",
            "🏪",
            2,
            AchievementRule::GameCompletions {
                game_id: "storekeeper-stories",
                count: 10,
            },
        ),
        AchievementDefinition::new(
            "pattern-pro",
            "🎨",
            3,
            AchievementRule::GameCompletions {
                game_id: "pattern-painter",
                count: 20,
            },
        ),
        AchievementDefinition::new("quick-thinker", "💨", 3, AchievementRule::FastSolves(5)),
        AchievementDefinition::new("game-explorer", "🗺️", 4, AchievementRule::GamesPlayed(7)),
        AchievementDefinition::new(
            "dedicated-learner",
            "📚",
            10,
            AchievementRule::TotalProblems(100),
        ),
    ]
}

fn standard_badges() -> Vec<BadgeDefinition> {
    vec![
        BadgeDefinition::new("bronze-star", "⭐", "#CD7F32", 10),
        BadgeDefinition::new("silver-star", "🌟", "#C0C0C0", 25),
        BadgeDefinition::new("gold-star", "✨", "#FFD700", 50),
        BadgeDefinition::new("diamond-star", "💎", "#B9F2FF", 100),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badge(id: &'static str, threshold: u32) -> BadgeDefinition {
        BadgeDefinition::new(id, "", "", threshold)
    }

    #[test]
    fn test_standard_catalogue_is_valid() {
        let standard = AchievementCatalogue::default();
        let validated = AchievementCatalogue::new(
            standard.achievements().to_vec(),
            standard.badges().to_vec(),
        )
        .unwrap();

        assert_eq!(validated.achievements().len(), 15);
        assert_eq!(validated.badges().len(), 4);
        assert_eq!(validated.achievements()[0].id, "first-step");
        let total_reward: u32 = standard.achievements().iter().map(|a| a.star_reward).sum();
        assert_eq!(total_reward, 50);
    }

    #[test]
    fn test_standard_catalogue_is_translated() {
        let standard = AchievementCatalogue::default();
        for achievement in standard.achievements() {
            assert_ne!(achievement.name(), achievement.id);
            assert!(!achievement.description().is_empty(), "{}", achievement.id);
        }
        for badge in standard.badges() {
            assert_ne!(badge.name(), badge.id);
            assert!(!badge.description().is_empty(), "{}", badge.id);
        }
    }

    #[test]
    fn test_badges_sorted_by_threshold() {
        let catalogue = AchievementCatalogue::new(
            vec![],
            vec![badge("gold", 50), badge("bronze", 10), badge("silver", 25)],
        )
        .unwrap();

        let ids: Vec<_> = catalogue.badges().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["bronze", "silver", "gold"]);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = AchievementCatalogue::new(vec![], vec![badge("a", 1), badge("a", 2)]);
        assert_eq!(
            result.unwrap_err(),
            CatalogueError::DuplicateId("a".to_string())
        );
    }

    #[test]
    fn test_rejects_zero_values() {
        let free = AchievementDefinition::new(
            "free",
            "",
            0,
            AchievementRule::TotalProblems(1),
        );
        assert_eq!(
            AchievementCatalogue::new(vec![free], vec![]).unwrap_err(),
            CatalogueError::ZeroStarReward("free".to_string())
        );
        assert_eq!(
            AchievementCatalogue::new(vec![], vec![badge("zero", 0)]).unwrap_err(),
            CatalogueError::ZeroThreshold("zero".to_string())
        );
    }

    #[test]
    fn test_lookup() {
        let catalogue = AchievementCatalogue::default();
        assert_eq!(catalogue.achievement("on-fire").unwrap().star_reward, 3);
        assert_eq!(catalogue.badge("gold-star").unwrap().star_threshold, 50);
        assert!(catalogue.achievement("missing").is_none());
    }
}
