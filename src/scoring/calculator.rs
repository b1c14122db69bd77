//! Score Calculator
//!
//! Converts a click distance, the time left on the clock and the current
//! streak into a point breakdown. Each component is rounded on its own and
//! the total is their exact sum.

use crate::core::config::ScoringConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total: u32,
    pub base_points: u32,
    pub precision_bonus: u32,
    pub time_bonus: u32,
    pub consecutive_bonus: u32,
}

impl ScoreBreakdown {
    fn from_parts(base_points: u32, precision_bonus: u32, time_bonus: u32, consecutive_bonus: u32) -> Self {
        Self {
            // Validated configs cannot saturate; unvalidated ones must not panic
            total: base_points
                .saturating_add(precision_bonus)
                .saturating_add(time_bonus)
                .saturating_add(consecutive_bonus),
            base_points,
            precision_bonus,
            time_bonus,
            consecutive_bonus,
        }
    }
}

/// Score one click
///
/// Never fails: NaN or negative distance and time are read as 0.
pub fn calculate(
    distance_m: f64,
    time_left_secs: f64,
    consecutive_correct: u32,
    config: &ScoringConfig,
) -> ScoreBreakdown {
    let distance_m = sanitize("distance_m", distance_m);
    let time_left_secs = sanitize("time_left_secs", time_left_secs);
    let raw_time_bonus = raw_time_bonus(time_left_secs, config);

    if distance_m <= config.threshold_m {
        let closeness = (1.0 - distance_m / config.threshold_m).clamp(0.0, 1.0);
        let precision_bonus = round_points(closeness * config.precision_bonus_max as f64);
        let time_bonus = round_points(raw_time_bonus);
        let consecutive_bonus = if consecutive_correct > 1 {
            consecutive_correct
                .saturating_mul(config.consecutive_bonus)
                .min(config.max_consecutive_bonus)
        } else {
            0
        };

        ScoreBreakdown::from_parts(config.perfect_score, precision_bonus, time_bonus, consecutive_bonus)
    } else {
        let distance_km = distance_m / 1000.0;
        let falloff = 1.0 - distance_km / config.distance_penalty_factor_km;
        let base_points = round_points((config.max_distance_score as f64 * falloff).max(0.0));
        let time_bonus = round_points(raw_time_bonus / 2.0);

        ScoreBreakdown::from_parts(base_points, 0, time_bonus, 0)
    }
}

/// Unrounded time bonus, linear in the seconds left inside the window
fn raw_time_bonus(time_left_secs: f64, config: &ScoringConfig) -> f64 {
    if time_left_secs <= config.time_bonus_threshold_secs {
        time_left_secs / config.time_bonus_threshold_secs * config.time_bonus_max as f64
    } else {
        0.0
    }
}

fn sanitize(field: &'static str, value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        tracing::warn!(field, value, "Malformed score input, using 0");
        0.0
    } else {
        value
    }
}

fn round_points(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}
