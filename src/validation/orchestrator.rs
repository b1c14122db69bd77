//! Validation Orchestrator: one click in, one scored result out

use super::messages::feedback;
use crate::core::config::ScoringConfig;
use crate::core::error::Result;
use crate::core::types::{GameMode, GeoPoint};
use crate::scoring::{calculate, ScoreBreakdown};
use crate::spatial::{evaluate, DistanceResult, Target};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub target_name: String,
    pub mode: GameMode,
    pub is_correct: bool,
    pub distance: DistanceResult,
    pub score: ScoreBreakdown,
    pub message: String,
}

/// Validate a click against a target
///
/// Pure: the same inputs always produce the same result.
pub fn validate(
    clicked: GeoPoint,
    target: &Target,
    time_left_secs: f64,
    consecutive_correct: u32,
    mode: GameMode,
    config: &ScoringConfig,
) -> Result<ValidationResult> {
    clicked.validate()?;
    let anchor = target.anchor_for(clicked)?;
    let distance = evaluate(clicked, anchor, config.threshold_m)?;
    let score = calculate(distance.distance_m, time_left_secs, consecutive_correct, config);
    let message = feedback(
        mode,
        distance.within_threshold,
        distance.distance_m,
        distance.direction,
        &target.name,
    );

    tracing::debug!(
        target_name = %target.name,
        distance_m = distance.distance_m,
        hit = distance.within_threshold,
        total = score.total,
        "Validated click"
    );

    Ok(ValidationResult {
        target_name: target.name.clone(),
        mode,
        is_correct: distance.within_threshold,
        distance,
        score,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GeoError;
    use crate::spatial::Direction;

    const SPOT: GeoPoint = GeoPoint { lat: -23.9618, lng: -46.3322 };

    fn places() -> ScoringConfig {
        ScoringConfig::for_mode(GameMode::FamousPlaces)
    }

    #[test]
    fn test_exact_click_on_place() {
        let target = Target::place("Monumento", SPOT);
        let result = validate(SPOT, &target, 10.0, 0, GameMode::FamousPlaces, &places()).unwrap();
        assert!(result.is_correct);
        assert_eq!(result.distance.distance_m, 0.0);
        assert_eq!(result.distance.precision, 1.0);
        assert_eq!(result.score.base_points, 2000);
        assert_eq!(result.target_name, "Monumento");
        assert!(result.message.starts_with("Perfeito!"));
    }

    #[test]
    fn test_miss_reports_direction() {
        let target = Target::place("Monumento", SPOT);
        // ~1.1 km south of the place
        let clicked = GeoPoint::new(-23.9718, -46.3322);
        let result = validate(clicked, &target, 4.0, 3, GameMode::FamousPlaces, &places()).unwrap();
        assert!(!result.is_correct);
        assert_eq!(result.distance.direction, Some(Direction::North));
        assert_eq!(result.score.consecutive_bonus, 0);
        assert!(result.message.contains("ao norte"));
    }

    #[test]
    fn test_click_inside_neighborhood_is_exact() {
        let target = Target::area(
            "Gonzaga",
            vec![
                GeoPoint::new(-23.972, -46.340),
                GeoPoint::new(-23.972, -46.325),
                GeoPoint::new(-23.960, -46.325),
                GeoPoint::new(-23.960, -46.340),
            ],
        );
        let config = ScoringConfig::for_mode(GameMode::Neighborhoods);
        let result = validate(SPOT, &target, 2.0, 2, GameMode::Neighborhoods, &config).unwrap();
        assert!(result.is_correct);
        assert_eq!(result.distance.distance_m, 0.0);
        assert_eq!(result.score.consecutive_bonus, 400);
        assert_eq!(
            result.message,
            "Perfeito! Você clicou dentro do bairro Gonzaga."
        );
    }

    #[test]
    fn test_deterministic() {
        let target = Target::place("Monumento", SPOT);
        let clicked = GeoPoint::new(-23.9621, -46.3318);
        let a = validate(clicked, &target, 6.5, 4, GameMode::FamousPlaces, &places()).unwrap();
        let b = validate(clicked, &target, 6.5, 4, GameMode::FamousPlaces, &places()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_click_rejected() {
        let target = Target::place("Monumento", SPOT);
        let clicked = GeoPoint::new(f64::NAN, -46.0);
        assert!(matches!(
            validate(clicked, &target, 5.0, 0, GameMode::FamousPlaces, &places()),
            Err(GeoError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let target = Target::place("Monumento", SPOT);
        let config = places().with_threshold(0.0);
        assert!(matches!(
            validate(SPOT, &target, 5.0, 0, GameMode::FamousPlaces, &config),
            Err(GeoError::InvalidConfiguration(_))
        ));
    }
}
