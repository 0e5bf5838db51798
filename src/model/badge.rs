use fluent_i18n::t;

/// A star-total milestone. Unlocks once `stars >= star_threshold`.
#[readonly::make]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeDefinition {
    pub id: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub star_threshold: u32,
}

impl BadgeDefinition {
    pub fn new(
        id: &'static str,
        icon: &'static str,
        color: &'static str,
        star_threshold: u32,
    ) -> Self {
        Self {
            id,
            icon,
            color,
            star_threshold,
        }
    }

    pub fn is_satisfied(&self, stars: u32) -> bool {
        stars >= self.star_threshold
    }

    pub fn name(&self) -> String {
        match self.id {
            "bronze-star" => t!("badge-bronze-star"),
            "silver-star" => t!("badge-silver-star"),
            "gold-star" => t!("badge-gold-star"),
            "diamond-star" => t!("badge-diamond-star"),
            other => other.to_string(),
        }
    }

    pub fn description(&self) -> String {
        match self.id {
            "bronze-star" => t!("badge-bronze-star-description"),
            "silver-star" => t!("badge-silver-star-description"),
            "gold-star" => t!("badge-gold-star-description"),
            "diamond-star" => t!("badge-diamond-star-description"),
            _ => String::new(),
        }
    }
}

/// Progress toward the cheapest badge that is still locked.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeProgress {
    pub badge: BadgeDefinition,
    pub current: u32,
    pub needed: u32,
    /// Clamped to 100.
    pub progress_percent: f64,
}

impl BadgeProgress {
    pub fn new(badge: BadgeDefinition, current: u32) -> Self {
        let needed = badge.star_threshold;
        let progress_percent = if needed == 0 {
            100.0
        } else {
            (100.0 * current as f64 / needed as f64).min(100.0)
        };
        Self {
            badge,
            current,
            needed,
            progress_percent,
        }
    }

    pub fn stars_remaining(&self) -> u32 {
        self.needed.saturating_sub(self.current)
    }
}
