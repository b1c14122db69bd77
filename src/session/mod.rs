//! Round session: streak, running score and target rotation
//!
//! Lives outside the pure validation core. The session decides which
//! target comes next and what streak value the next validation sees.

use crate::catalog::Catalog;
use crate::core::config::ScoringConfig;
use crate::core::types::GameMode;
use crate::spatial::Target;
use crate::validation::ValidationResult;
use ahash::AHashSet;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RoundSession {
    pub mode: GameMode,
    /// Rounds played so far
    pub round_number: u32,
    pub consecutive_correct: u32,
    pub best_streak: u32,
    pub hits: u32,
    pub total_score: u64,
    used_targets: AHashSet<String>,
}

impl RoundSession {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            round_number: 0,
            consecutive_correct: 0,
            best_streak: 0,
            hits: 0,
            total_score: 0,
            used_targets: AHashSet::new(),
        }
    }

    /// Pick an unused target for this session's mode
    ///
    /// Once every target has been used the rotation starts over.
    /// Returns `None` only when the catalog has no targets for the mode.
    pub fn next_target<'a, R: Rng + ?Sized>(&mut self, catalog: &'a Catalog, rng: &mut R) -> Option<&'a Target> {
        let targets = catalog.targets(self.mode);
        if targets.is_empty() {
            return None;
        }

        let mut unused: Vec<&Target> = targets
            .iter()
            .filter(|t| !self.used_targets.contains(&t.name))
            .collect();
        if unused.is_empty() {
            tracing::info!(mode = %self.mode, round = self.round_number, "All targets used, starting a new rotation");
            self.used_targets.clear();
            unused = targets.iter().collect();
        }

        unused.choose(rng).copied()
    }

    /// Streak value to pass to the next validation
    ///
    /// Counts the upcoming click as if it were a hit, so the second hit in
    /// a row is the first to earn a consecutive bonus.
    pub fn streak_for_next(&self) -> u32 {
        self.consecutive_correct.saturating_add(1)
    }

    /// Seconds left on the clock after `elapsed`, floored at zero
    pub fn time_left(&self, elapsed: Duration, config: &ScoringConfig) -> f64 {
        (config.round_duration_secs - elapsed.as_secs_f64()).max(0.0)
    }

    /// Fold one validation into the session
    pub fn record(&mut self, result: &ValidationResult) {
        self.round_number += 1;
        self.total_score += u64::from(result.score.total);
        self.used_targets.insert(result.target_name.clone());

        if result.is_correct {
            self.hits += 1;
            self.consecutive_correct += 1;
            self.best_streak = self.best_streak.max(self.consecutive_correct);
        } else {
            self.consecutive_correct = 0;
        }

        tracing::debug!(
            round = self.round_number,
            streak = self.consecutive_correct,
            total = self.total_score,
            "Recorded round"
        );
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.used_targets.contains(name)
    }

    /// Share of rounds answered correctly, 0.0 before the first round
    pub fn accuracy(&self) -> f64 {
        if self.round_number == 0 {
            0.0
        } else {
            self.hits as f64 / self.round_number as f64
        }
    }
}
