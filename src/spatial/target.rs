//! Quiz targets: famous places (points) and neighborhoods (polygons)

use crate::core::error::{GeoError, Result};
use crate::core::types::GeoPoint;
use geo::{Centroid, Closest, ClosestPoint, Contains, LineString, Point, Polygon};

#[derive(Debug, Clone, PartialEq)]
pub enum TargetGeometry {
    Point(GeoPoint),
    /// Exterior ring, not necessarily closed
    Area { boundary: Vec<GeoPoint> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub name: String,
    pub geometry: TargetGeometry,
}

impl Target {
    pub fn place(name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            name: name.into(),
            geometry: TargetGeometry::Point(location),
        }
    }

    pub fn area(name: impl Into<String>, boundary: Vec<GeoPoint>) -> Self {
        Self {
            name: name.into(),
            geometry: TargetGeometry::Area { boundary },
        }
    }

    pub fn validate(&self) -> Result<()> {
        match &self.geometry {
            TargetGeometry::Point(p) => p.validate(),
            TargetGeometry::Area { boundary } => {
                if boundary.len() < 3 {
                    return Err(GeoError::InvalidInput(format!(
                        "boundary of '{}' has {} vertices, need at least 3",
                        self.name,
                        boundary.len()
                    )));
                }
                boundary.iter().try_for_each(GeoPoint::validate)
            }
        }
    }

    /// Representative point: the place itself or the polygon centroid
    pub fn centroid(&self) -> Option<GeoPoint> {
        match &self.geometry {
            TargetGeometry::Point(p) => Some(*p),
            TargetGeometry::Area { boundary } => to_polygon(boundary).centroid().map(GeoPoint::from),
        }
    }

    /// Point-in-polygon; a place never contains a click
    pub fn contains(&self, clicked: GeoPoint) -> bool {
        match &self.geometry {
            TargetGeometry::Point(_) => false,
            TargetGeometry::Area { boundary } => {
                to_polygon(boundary).contains(&Point::<f64>::from(clicked))
            }
        }
    }

    /// The point a click is scored against
    ///
    /// For an area this is the click itself when inside, otherwise the
    /// nearest boundary point (planar in degrees, fine at city scale).
    pub fn anchor_for(&self, clicked: GeoPoint) -> Result<GeoPoint> {
        self.validate()?;
        match &self.geometry {
            TargetGeometry::Point(p) => Ok(*p),
            TargetGeometry::Area { boundary } => {
                let polygon = to_polygon(boundary);
                let click = Point::<f64>::from(clicked);
                if polygon.contains(&click) {
                    return Ok(clicked);
                }
                match polygon.exterior().closest_point(&click) {
                    Closest::Intersection(p) | Closest::SinglePoint(p) => Ok(p.into()),
                    Closest::Indeterminate => self.centroid().ok_or_else(|| {
                        GeoError::InvalidInput(format!("'{}' has a degenerate boundary", self.name))
                    }),
                }
            }
        }
    }
}

fn to_polygon(boundary: &[GeoPoint]) -> Polygon<f64> {
    let ring: Vec<(f64, f64)> = boundary.iter().map(|p| (p.lng, p.lat)).collect();
    Polygon::new(LineString::from(ring), vec![])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Target {
        Target::area(
            "Quadrado",
            vec![
                GeoPoint::new(-23.97, -46.34),
                GeoPoint::new(-23.97, -46.32),
                GeoPoint::new(-23.95, -46.32),
                GeoPoint::new(-23.95, -46.34),
            ],
        )
    }

    #[test]
    fn test_place_anchor_is_location() {
        let loc = GeoPoint::new(-23.9346, -46.3285);
        let target = Target::place("Praça Mauá", loc);
        assert_eq!(target.anchor_for(GeoPoint::new(-23.0, -46.0)).unwrap(), loc);
        assert!(!target.contains(loc));
    }

    #[test]
    fn test_click_inside_area_anchors_on_click() {
        let click = GeoPoint::new(-23.96, -46.33);
        let target = square();
        assert!(target.contains(click));
        assert_eq!(target.anchor_for(click).unwrap(), click);
    }

    #[test]
    fn test_click_outside_area_anchors_on_border() {
        let click = GeoPoint::new(-23.96, -46.30);
        let anchor = square().anchor_for(click).unwrap();
        assert!((anchor.lat - -23.96).abs() < 1e-9);
        assert!((anchor.lng - -46.32).abs() < 1e-9);
    }

    #[test]
    fn test_area_centroid() {
        let c = square().centroid().unwrap();
        assert!((c.lat - -23.96).abs() < 1e-9);
        assert!((c.lng - -46.33).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_area_rejected() {
        let target = Target::area(
            "Linha",
            vec![GeoPoint::new(-23.9, -46.3), GeoPoint::new(-23.8, -46.3)],
        );
        assert!(matches!(target.validate(), Err(GeoError::InvalidInput(_))));
        assert!(target.anchor_for(GeoPoint::new(-23.9, -46.3)).is_err());
    }
}
