//! Great-circle distance on a spherical Earth

use crate::core::types::GeoPoint;

/// Earth radius used by the map widget the game was tuned against
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two points, in meters
///
/// Accurate to well under a meter against ellipsoidal libraries at
/// city scale (< 50 km). Inputs are assumed validated.
pub fn haversine_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    // min() guards asin against rounding just above 1.0 for antipodes
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}
