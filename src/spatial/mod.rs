//! Distance/direction evaluation and target geometry

pub mod direction;
pub mod distance;
pub mod evaluator;
pub mod target;

pub use direction::{classify, direction_between, Direction};
pub use distance::{haversine_m, EARTH_RADIUS_M};
pub use evaluator::{evaluate, DistanceResult};
pub use target::{Target, TargetGeometry};
