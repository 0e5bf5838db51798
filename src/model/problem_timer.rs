use std::time::{Duration, SystemTime};

/// Wall-clock timer for a single problem, excluding time spent paused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemTimer {
    pub started_timestamp: SystemTime,
    pub paused_timestamp: Option<SystemTime>,
    pub paused_duration: Duration,
}

impl ProblemTimer {
    pub fn started(now: SystemTime) -> Self {
        Self {
            started_timestamp: now,
            paused_timestamp: None,
            paused_duration: Duration::from_secs(0),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_timestamp.is_some()
    }

    pub fn elapsed(&self, now: SystemTime) -> Duration {
        let until_time = self.paused_timestamp.unwrap_or(now);

        until_time
            .duration_since(self.started_timestamp)
            .unwrap_or(Duration::default())
            .saturating_sub(self.paused_duration)
    }

    pub fn elapsed_ms(&self, now: SystemTime) -> u64 {
        u64::try_from(self.elapsed(now).as_millis()).unwrap_or(u64::MAX)
    }

    pub fn paused(&self, now: SystemTime) -> ProblemTimer {
        let mut new_state = self.clone();
        if new_state.paused_timestamp.is_none() {
            new_state.paused_timestamp = Some(now);
        }
        new_state
    }

    pub fn resumed(&self, now: SystemTime) -> ProblemTimer {
        let mut new_state = self.clone();
        if let Some(pause_time) = new_state.paused_timestamp.take() {
            new_state.paused_duration = new_state
                .paused_duration
                .saturating_add(now.duration_since(pause_time).unwrap_or(Duration::default()));
        }
        new_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_running() {
        let now = SystemTime::now();
        let timer = ProblemTimer::started(now);

        assert_eq!(timer.elapsed_ms(now + Duration::from_millis(3000)), 3000);
    }

    #[test]
    fn test_elapsed_while_paused() {
        let now = SystemTime::now();
        let timer = ProblemTimer::started(now).paused(now + Duration::from_secs(5));

        assert!(timer.is_paused());
        assert_eq!(
            timer.elapsed(now + Duration::from_secs(60)),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn test_elapsed_excludes_pause() {
        let now = SystemTime::now();
        let timer = ProblemTimer::started(now)
            .paused(now + Duration::from_secs(4))
            .resumed(now + Duration::from_secs(10));

        assert!(!timer.is_paused());
        // 12 seconds wall clock - 6 seconds paused
        assert_eq!(
            timer.elapsed(now + Duration::from_secs(12)),
            Duration::from_secs(6)
        );
    }

    #[test]
    fn test_clock_going_backwards_is_zero() {
        let now = SystemTime::now();
        let timer = ProblemTimer::started(now);

        assert_eq!(timer.elapsed_ms(now - Duration::from_secs(1)), 0);
    }
}
