pub mod config;
pub mod error;
pub mod types;

pub use config::{GameConfig, ScoringConfig};
pub use error::{GeoError, Result};
pub use types::{GameMode, GeoPoint};
