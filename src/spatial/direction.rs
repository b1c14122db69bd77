//! Eight-way compass classification of click-to-target offsets

use crate::core::types::GeoPoint;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Portuguese name of the direction
    pub fn label(&self) -> &'static str {
        match self {
            Direction::North => "norte",
            Direction::South => "sul",
            Direction::East => "leste",
            Direction::West => "oeste",
            Direction::NorthEast => "nordeste",
            Direction::NorthWest => "noroeste",
            Direction::SouthEast => "sudeste",
            Direction::SouthWest => "sudoeste",
        }
    }

    /// Direction with its preposition, ready to embed in a sentence
    pub fn phrase(&self) -> &'static str {
        match self {
            Direction::North => "ao norte",
            Direction::South => "ao sul",
            Direction::East => "a leste",
            Direction::West => "a oeste",
            Direction::NorthEast => "a nordeste",
            Direction::NorthWest => "a noroeste",
            Direction::SouthEast => "a sudeste",
            Direction::SouthWest => "a sudoeste",
        }
    }
}

/// Classify a degree offset into one of 8 buckets
///
/// An axis wins when it is at least twice the other; an exact 2:1 ratio
/// therefore lands on the cardinal direction. Latitude is checked first.
/// Returns `None` for a zero offset.
pub fn classify(d_lat: f64, d_lng: f64) -> Option<Direction> {
    if d_lat == 0.0 && d_lng == 0.0 {
        return None;
    }

    let abs_lat = d_lat.abs();
    let abs_lng = d_lng.abs();

    let dir = if abs_lat >= 2.0 * abs_lng {
        if d_lat > 0.0 {
            Direction::North
        } else {
            Direction::South
        }
    } else if abs_lng >= 2.0 * abs_lat {
        if d_lng > 0.0 {
            Direction::East
        } else {
            Direction::West
        }
    } else {
        match (d_lat > 0.0, d_lng > 0.0) {
            (true, true) => Direction::NorthEast,
            (true, false) => Direction::NorthWest,
            (false, true) => Direction::SouthEast,
            (false, false) => Direction::SouthWest,
        }
    };

    Some(dir)
}

/// Direction the player should have gone: from the click towards the target
pub fn direction_between(clicked: GeoPoint, target: GeoPoint) -> Option<Direction> {
    classify(target.lat - clicked.lat, target.lng - clicked.lng)
}
