//! Scoring configuration with documented constants
//!
//! Every tunable of the score calculator lives in `ScoringConfig`. One
//! config exists per game mode, bundled in `GameConfig`, which can be
//! loaded from TOML.

use crate::core::error::{GeoError, Result};
use crate::core::types::GameMode;
use crate::scoring::constants::*;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// Tuning for one game mode
///
/// Immutable once built; the calculator never reads globals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    // === HIT DETECTION ===
    /// Maximum click-to-target distance (meters) that counts as a hit
    ///
    /// Inclusive: a click exactly at the threshold is a hit.
    pub threshold_m: f64,

    // === HIT BRANCH ===
    /// Base points awarded for any hit
    pub perfect_score: u32,

    /// Precision bonus at distance 0, falling linearly to 0 at the threshold
    pub precision_bonus_max: u32,

    // === TIME BONUS ===
    /// Seconds-left window in which the time bonus applies
    ///
    /// With more time left than this the bonus is 0. The default equals
    /// the round duration, so every answer falls inside the window.
    pub time_bonus_threshold_secs: f64,

    /// Time bonus awarded with the full window left (halved on a miss)
    pub time_bonus_max: u32,

    /// Length of one round on the clock
    pub round_duration_secs: f64,

    // === MISS BRANCH ===
    /// Points for a miss right at the threshold edge
    pub max_distance_score: u32,

    /// Distance (km) at which the miss score reaches 0
    pub distance_penalty_factor_km: f64,

    // === STREAKS ===
    /// Bonus per consecutive hit, applied from the second hit on
    pub consecutive_bonus: u32,

    /// Cap on the consecutive bonus
    pub max_consecutive_bonus: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            threshold_m: FAMOUS_PLACE_THRESHOLD_M,
            perfect_score: PERFECT_SCORE,
            precision_bonus_max: PRECISION_BONUS_MAX,
            time_bonus_threshold_secs: TIME_BONUS_THRESHOLD_SECS,
            time_bonus_max: TIME_BONUS_MAX,
            round_duration_secs: ROUND_DURATION_SECS,
            max_distance_score: MAX_DISTANCE_SCORE,
            distance_penalty_factor_km: DISTANCE_PENALTY_FACTOR_KM,
            consecutive_bonus: CONSECUTIVE_BONUS,
            max_consecutive_bonus: MAX_CONSECUTIVE_BONUS,
        }
    }
}

impl ScoringConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning for a given mode
    pub fn for_mode(mode: GameMode) -> Self {
        let threshold_m = match mode {
            GameMode::FamousPlaces => FAMOUS_PLACE_THRESHOLD_M,
            GameMode::Neighborhoods => NEIGHBORHOOD_THRESHOLD_M,
        };
        Self {
            threshold_m,
            ..Self::default()
        }
    }

    pub fn with_threshold(mut self, threshold_m: f64) -> Self {
        self.threshold_m = threshold_m;
        self
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !self.threshold_m.is_finite() || self.threshold_m <= 0.0 {
            return Err(GeoError::InvalidConfiguration(format!(
                "threshold_m ({}) must be a positive number",
                self.threshold_m
            )));
        }

        if !self.time_bonus_threshold_secs.is_finite() || self.time_bonus_threshold_secs <= 0.0 {
            return Err(GeoError::InvalidConfiguration(format!(
                "time_bonus_threshold_secs ({}) must be positive",
                self.time_bonus_threshold_secs
            )));
        }

        if !self.distance_penalty_factor_km.is_finite() || self.distance_penalty_factor_km <= 0.0 {
            return Err(GeoError::InvalidConfiguration(format!(
                "distance_penalty_factor_km ({}) must be positive",
                self.distance_penalty_factor_km
            )));
        }

        if !self.round_duration_secs.is_finite() || self.round_duration_secs <= 0.0 {
            return Err(GeoError::InvalidConfiguration(format!(
                "round_duration_secs ({}) must be positive",
                self.round_duration_secs
            )));
        }

        // Best possible hit and miss totals must fit the u32 score
        let best_hit = u64::from(self.perfect_score)
            + u64::from(self.precision_bonus_max)
            + u64::from(self.time_bonus_max)
            + u64::from(self.max_consecutive_bonus);
        let best_miss = u64::from(self.max_distance_score) + u64::from(self.time_bonus_max);
        if best_hit.max(best_miss) > u64::from(u32::MAX) {
            return Err(GeoError::InvalidConfiguration(format!(
                "maximum score ({}) does not fit in a u32",
                best_hit.max(best_miss)
            )));
        }

        Ok(())
    }
}

/// Per-mode scoring configuration
///
/// Fields missing from a TOML section, or a missing section, take that
/// mode's defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_neighborhoods", deserialize_with = "neighborhoods_section")]
    pub neighborhoods: ScoringConfig,
    #[serde(default = "default_famous_places", deserialize_with = "famous_places_section")]
    pub famous_places: ScoringConfig,
}

fn neighborhoods_section<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<ScoringConfig, D::Error> {
    section_over_defaults(deserializer, GameMode::Neighborhoods)
}

fn famous_places_section<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<ScoringConfig, D::Error> {
    section_over_defaults(deserializer, GameMode::FamousPlaces)
}

/// Overlay the section's keys on the mode's default table
fn section_over_defaults<'de, D: Deserializer<'de>>(
    deserializer: D,
    mode: GameMode,
) -> std::result::Result<ScoringConfig, D::Error> {
    let overrides = toml::Table::deserialize(deserializer)?;
    let mut merged = match toml::Value::try_from(ScoringConfig::for_mode(mode)) {
        Ok(toml::Value::Table(table)) => table,
        Ok(_) => return Err(D::Error::custom("scoring defaults did not serialize to a table")),
        Err(e) => return Err(D::Error::custom(e)),
    };
    merged.extend(overrides);
    toml::Value::Table(merged).try_into().map_err(D::Error::custom)
}

fn default_neighborhoods() -> ScoringConfig {
    ScoringConfig::for_mode(GameMode::Neighborhoods)
}

fn default_famous_places() -> ScoringConfig {
    ScoringConfig::for_mode(GameMode::FamousPlaces)
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            neighborhoods: default_neighborhoods(),
            famous_places: default_famous_places(),
        }
    }
}

impl GameConfig {
    pub fn for_mode(&self, mode: GameMode) -> &ScoringConfig {
        match mode {
            GameMode::Neighborhoods => &self.neighborhoods,
            GameMode::FamousPlaces => &self.famous_places,
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded scoring config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.neighborhoods.validate()?;
        self.famous_places.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ScoringConfig::default().validate().is_ok());
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_mode_thresholds() {
        let config = GameConfig::default();
        assert_eq!(config.for_mode(GameMode::FamousPlaces).threshold_m, 100.0);
        assert_eq!(config.for_mode(GameMode::Neighborhoods).threshold_m, 200.0);
    }

    #[test]
    fn test_non_positive_threshold_rejected() {
        for bad in [0.0, -5.0, f64::NAN] {
            let config = ScoringConfig::default().with_threshold(bad);
            assert!(matches!(
                config.validate(),
                Err(GeoError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_score_ceiling_overflow_rejected() {
        let toml = "[famous_places]\nthreshold_m = 100.0\nperfect_score = 4294967295\n";
        assert!(matches!(
            GameConfig::from_toml_str(toml),
            Err(GeoError::InvalidConfiguration(_))
        ));

        let at_ceiling = ScoringConfig {
            perfect_score: u32::MAX - PRECISION_BONUS_MAX - TIME_BONUS_MAX - MAX_CONSECUTIVE_BONUS,
            ..ScoringConfig::default()
        };
        assert!(at_ceiling.validate().is_ok());
    }

    #[test]
    fn test_partial_neighborhoods_keeps_its_threshold() {
        let config = GameConfig::from_toml_str("[neighborhoods]\nperfect_score = 3000\n")
            .expect("should parse");
        assert_eq!(config.neighborhoods.threshold_m, NEIGHBORHOOD_THRESHOLD_M);
        assert_eq!(config.neighborhoods.perfect_score, 3000);
        assert_eq!(config.famous_places, ScoringConfig::for_mode(GameMode::FamousPlaces));
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let toml = r#"
            [famous_places]
            threshold_m = 150.0
            perfect_score = 3000
        "#;
        let config = GameConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.famous_places.threshold_m, 150.0);
        assert_eq!(config.famous_places.perfect_score, 3000);
        assert_eq!(config.famous_places.time_bonus_max, TIME_BONUS_MAX);
        assert_eq!(config.neighborhoods, ScoringConfig::for_mode(GameMode::Neighborhoods));
    }

    #[test]
    fn test_invalid_toml_config_rejected() {
        let toml = r#"
            [neighborhoods]
            threshold_m = 0.0
        "#;
        assert!(matches!(
            GameConfig::from_toml_str(toml),
            Err(GeoError::InvalidConfiguration(_))
        ));
    }
}
