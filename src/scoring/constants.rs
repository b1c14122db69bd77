//! Scoring constants - default tunings for both game modes
//!
//! These feed `ScoringConfig::default()`; pass a custom config to override.

// Hit branch
pub const PERFECT_SCORE: u32 = 2000;
pub const PRECISION_BONUS_MAX: u32 = 1000;

// Time bonus (seconds left on the round clock)
pub const TIME_BONUS_THRESHOLD_SECS: f64 = 10.0;
pub const TIME_BONUS_MAX: u32 = 500;
pub const ROUND_DURATION_SECS: f64 = 10.0;

// Miss branch (linear falloff to zero at the penalty distance)
pub const MAX_DISTANCE_SCORE: u32 = 1500;
pub const DISTANCE_PENALTY_FACTOR_KM: f64 = 3.0;

// Streaks
pub const CONSECUTIVE_BONUS: u32 = 200;
pub const MAX_CONSECUTIVE_BONUS: u32 = 1000;

// Hit radius per mode (meters)
pub const FAMOUS_PLACE_THRESHOLD_M: f64 = 100.0;
pub const NEIGHBORHOOD_THRESHOLD_M: f64 = 200.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_always_outscores_miss_base() {
        assert!(PERFECT_SCORE > MAX_DISTANCE_SCORE);
    }

    #[test]
    fn test_streak_cap_reachable() {
        assert!(MAX_CONSECUTIVE_BONUS >= CONSECUTIVE_BONUS);
        assert_eq!(MAX_CONSECUTIVE_BONUS % CONSECUTIVE_BONUS, 0);
    }

    #[test]
    fn test_round_fits_time_bonus_window() {
        assert!(ROUND_DURATION_SECS <= TIME_BONUS_THRESHOLD_SECS);
    }
}
