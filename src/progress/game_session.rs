use std::time::SystemTime;

use super::progression_engine::ProgressionEngine;
use crate::model::{AchievementDefinition, ProblemTimer};
use crate::storage::KeyValueStore;

/// Per-mini-game glue: times the current problem and reports judged answers.
#[derive(Debug, Clone)]
pub struct GameSession {
    game_id: String,
    timer: Option<ProblemTimer>,
}

impl GameSession {
    pub fn new(game_id: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            timer: None,
        }
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn is_timing(&self) -> bool {
        self.timer.is_some()
    }

    pub fn start_problem(&mut self) {
        self.start_problem_at(SystemTime::now());
    }

    pub fn start_problem_at(&mut self, now: SystemTime) {
        self.timer = Some(ProblemTimer::started(now));
    }

    pub fn pause_problem_at(&mut self, now: SystemTime) {
        self.timer = self.timer.as_ref().map(|timer| timer.paused(now));
    }

    pub fn resume_problem_at(&mut self, now: SystemTime) {
        self.timer = self.timer.as_ref().map(|timer| timer.resumed(now));
    }

    pub fn record_correct_answer<S: KeyValueStore>(
        &mut self,
        engine: &mut ProgressionEngine<S>,
    ) -> Vec<AchievementDefinition> {
        self.record_correct_answer_at(engine, SystemTime::now())
    }

    /// Reports 0 ms when no problem was started, which never counts as a fast solve.
    pub fn record_correct_answer_at<S: KeyValueStore>(
        &mut self,
        engine: &mut ProgressionEngine<S>,
        now: SystemTime,
    ) -> Vec<AchievementDefinition> {
        let elapsed_ms = self
            .timer
            .take()
            .map(|timer| timer.elapsed_ms(now))
            .unwrap_or(0);
        engine.record_completion_at(&self.game_id, true, elapsed_ms, now)
    }

    pub fn record_incorrect_answer<S: KeyValueStore>(
        &mut self,
        engine: &mut ProgressionEngine<S>,
    ) -> Vec<AchievementDefinition> {
        self.timer = None;
        engine.record_completion(&self.game_id, false, 0)
    }
}
