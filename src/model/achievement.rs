use super::PlayerStats;
use fluent_i18n::t;

/// Unlock condition of an achievement, interpreted against a stats snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementRule {
    TotalProblems(u32),
    /// Consecutive correct answers in the running streak, not the best one.
    CurrentStreak(u32),
    GameCompletions {
        game_id: &'static str,
        count: u32,
    },
    FastSolves(u32),
    GamesPlayed(u32),
}

impl AchievementRule {
    pub fn is_satisfied(&self, stats: &PlayerStats) -> bool {
        match *self {
            AchievementRule::TotalProblems(threshold) => stats.total_problems >= threshold,
            AchievementRule::CurrentStreak(threshold) => stats.current_streak >= threshold,
            AchievementRule::GameCompletions { game_id, count } => {
                stats.completions_for(game_id) >= count
            }
            AchievementRule::FastSolves(threshold) => stats.fast_solves >= threshold,
            AchievementRule::GamesPlayed(threshold) => stats.games_played >= threshold,
        }
    }

    /// The counter value the rule compares against.
    pub fn threshold(&self) -> u32 {
        match *self {
            AchievementRule::TotalProblems(threshold)
            | AchievementRule::CurrentStreak(threshold)
            | AchievementRule::FastSolves(threshold)
            | AchievementRule::GamesPlayed(threshold) => threshold,
            AchievementRule::GameCompletions { count, .. } => count,
        }
    }
}

#[readonly::make]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementDefinition {
    pub id: &'static str,
    pub icon: &'static str,
    pub star_reward: u32,
    pub rule: AchievementRule,
}

impl AchievementDefinition {
    pub fn new(
        id: &'static str,
        icon: &'static str,
        star_reward: u32,
        rule: AchievementRule,
    ) -> Self {
        Self {
            id,
            icon,
            star_reward,
            rule,
        }
    }

    pub fn is_satisfied(&self, stats: &PlayerStats) -> bool {
        self.rule.is_satisfied(stats)
    }

    /// Display name in the active locale. Ids without a translation show the raw id.
    pub fn name(&self) -> String {
        match self.id {
            "first-step" => t!("achievement-first-step"),
            "super-starter" => t!("achievement-super-starter"),
            "math-master" => t!("achievement-math-master"),
            "on-fire" => t!("achievement-on-fire"),
            "unstoppable" => t!("achievement-unstoppable"),
            "frog-master" => t!("achievement-frog-master"),
            "balloon-popper" => t!("achievement-balloon-popper"),
            "tower-builder" => t!("achievement-tower-builder"),
            "farmer" => t!("achievement-farmer"),
            "builder" => t!("achievement-builder"),
            "shopkeeper" => t!("achievement-shopkeeper"),
            "pattern-pro" => t!("achievement-pattern-pro"),
            "quick-thinker" => t!("achievement-quick-thinker"),
            "game-explorer" => t!("achievement-game-explorer"),
            "dedicated-learner" => t!("achievement-dedicated-learner"),
            other => other.to_string(),
        }
    }

    pub fn description(&self) -> String {
        match self.id {
            "first-step" => t!("achievement-first-step-description"),
            "super-starter" => t!("achievement-super-starter-description"),
            "math-master" => t!("achievement-math-master-description"),
            "on-fire" => t!("achievement-on-fire-description"),
            "unstoppable" => t!("achievement-unstoppable-description"),
            "frog-master" => t!("achievement-frog-master-description"),
            "balloon-popper" => t!("achievement-balloon-popper-description"),
            "tower-builder" => t!("achievement-tower-builder-description"),
            "farmer" => t!("achievement-farmer-description"),
            "builder" => t!("achievement-builder-description"),
            "shopkeeper" => t!("achievement-shopkeeper-description"),
            "pattern-pro" => t!("achievement-pattern-pro-description"),
            "quick-thinker" => t!("achievement-quick-thinker-description"),
            "game-explorer" => t!("achievement-game-explorer-description"),
            "dedicated-learner" => t!("achievement-dedicated-learner-description"),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_with_game(game_id: &str, count: u32) -> PlayerStats {
        let mut stats = PlayerStats::default();
        stats.game_stats.insert(game_id.to_string(), count);
        stats.games_played = stats.game_stats.len() as u32;
        stats.total_problems = count;
        stats
    }

    #[test]
    fn test_total_problems_rule() {
        let rule = AchievementRule::TotalProblems(10);
        let mut stats = PlayerStats::default();
        stats.total_problems = 9;
        assert!(!rule.is_satisfied(&stats));
        stats.total_problems = 10;
        assert!(rule.is_satisfied(&stats));
    }

    #[test]
    fn test_streak_rule_uses_current_streak() {
        let rule = AchievementRule::CurrentStreak(5);
        let stats = PlayerStats {
            current_streak: 2,
            best_streak: 8,
            ..Default::default()
        };
        assert!(!rule.is_satisfied(&stats));
    }

    #[test]
    fn test_game_completions_rule() {
        let rule = AchievementRule::GameCompletions {
            game_id: "number-line-leap",
            count: 10,
        };
        assert!(!rule.is_satisfied(&PlayerStats::default()));
        assert!(!rule.is_satisfied(&stats_with_game("operation-pop", 30)));
        assert!(!rule.is_satisfied(&stats_with_game("number-line-leap", 9)));
        assert!(rule.is_satisfied(&stats_with_game("number-line-leap", 10)));
    }

    #[test]
    fn test_fast_solves_and_games_played_rules() {
        let stats = PlayerStats {
            fast_solves: 5,
            games_played: 6,
            ..Default::default()
        };
        assert!(AchievementRule::FastSolves(5).is_satisfied(&stats));
        assert!(!AchievementRule::GamesPlayed(7).is_satisfied(&stats));
    }

    #[test]
    fn test_translated_text() {
        let definition =
            AchievementDefinition::new("on-fire", "🔥", 3, AchievementRule::CurrentStreak(5));
        assert!(!definition.name().is_empty());
        assert_ne!(definition.name(), "on-fire");
        assert!(!definition.description().is_empty());
        assert_eq!(definition.rule.threshold(), 5);
    }

    #[test]
    fn test_untranslated_id_shows_raw_id() {
        let definition =
            AchievementDefinition::new("explorer", "🧭", 2, AchievementRule::GamesPlayed(2));
        assert_eq!(definition.name(), "explorer");
        assert_eq!(definition.description(), "");
    }
}
