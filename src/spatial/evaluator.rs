//! Distance/direction evaluation of a single click

use super::direction::{direction_between, Direction};
use super::distance::haversine_m;
use crate::core::error::{GeoError, Result};
use crate::core::types::GeoPoint;
use serde::{Deserialize, Serialize};

/// Metrics for one click against one target point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    pub distance_m: f64,
    pub within_threshold: bool,
    /// 1.0 on the target, 0.0 at the threshold and beyond
    pub precision: f64,
    /// `None` only for an exact hit
    pub direction: Option<Direction>,
}

impl DistanceResult {
    pub fn is_exact_hit(&self) -> bool {
        self.distance_m == 0.0
    }
}

/// Measure `clicked` against `target` with a hit radius of `threshold_m`
pub fn evaluate(clicked: GeoPoint, target: GeoPoint, threshold_m: f64) -> Result<DistanceResult> {
    if !threshold_m.is_finite() {
        return Err(GeoError::InvalidInput(format!(
            "threshold {} is not a finite number",
            threshold_m
        )));
    }
    if threshold_m <= 0.0 {
        return Err(GeoError::InvalidConfiguration(format!(
            "threshold {} must be positive",
            threshold_m
        )));
    }
    clicked.validate()?;
    target.validate()?;

    let distance_m = haversine_m(clicked, target);
    let within_threshold = distance_m <= threshold_m;
    let precision = if within_threshold {
        (1.0 - distance_m / threshold_m).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let direction = if distance_m == 0.0 {
        None
    } else {
        direction_between(clicked, target)
    };

    Ok(DistanceResult {
        distance_m,
        within_threshold,
        precision,
        direction,
    })
}
