//! Geosantos - click-to-target scoring core for the O Caiçara quiz of Santos

pub mod catalog;
pub mod core;
pub mod scoring;
pub mod session;
pub mod spatial;
pub mod validation;

pub use crate::catalog::Catalog;
pub use crate::core::{GameConfig, GameMode, GeoError, GeoPoint, Result, ScoringConfig};
pub use crate::scoring::{calculate, ScoreBreakdown};
pub use crate::session::RoundSession;
pub use crate::spatial::{evaluate, Direction, DistanceResult, Target, TargetGeometry};
pub use crate::validation::{validate, ValidationResult};
