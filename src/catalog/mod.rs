//! Target catalog loaded from TOML
//!
//! ```toml
//! [[famous_places]]
//! name = "Orquidário Municipal"
//! lat = -23.9686
//! lng = -46.3453
//!
//! [[neighborhoods]]
//! name = "Gonzaga"
//! boundary = [[-23.9722, -46.3400], [-23.9722, -46.3250], [-23.9600, -46.3250]]
//! ```
//!
//! Boundary vertices are `[lat, lng]` pairs.

use crate::core::error::{GeoError, Result};
use crate::core::types::{GameMode, GeoPoint};
use crate::spatial::Target;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlaceRecord {
    name: String,
    lat: f64,
    lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NeighborhoodRecord {
    name: String,
    boundary: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    famous_places: Vec<PlaceRecord>,
    #[serde(default)]
    neighborhoods: Vec<NeighborhoodRecord>,
}

/// Read-only reference data for both game modes
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub famous_places: Vec<Target>,
    pub neighborhoods: Vec<Target>,
}

impl Catalog {
    pub fn new(famous_places: Vec<Target>, neighborhoods: Vec<Target>) -> Self {
        Self {
            famous_places,
            neighborhoods,
        }
    }

    /// Parse and validate a TOML catalog
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;

        let famous_places = file
            .famous_places
            .into_iter()
            .map(|r| Target::place(r.name, GeoPoint::new(r.lat, r.lng)))
            .collect();
        let neighborhoods = file
            .neighborhoods
            .into_iter()
            .map(|r| {
                let boundary = r.boundary.iter().map(|[lat, lng]| GeoPoint::new(*lat, *lng)).collect();
                Target::area(r.name, boundary)
            })
            .collect();

        let catalog = Self::new(famous_places, neighborhoods);
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            places = catalog.famous_places.len(),
            neighborhoods = catalog.neighborhoods.len(),
            "Loaded target catalog"
        );
        Ok(catalog)
    }

    pub fn targets(&self, mode: GameMode) -> &[Target] {
        match mode {
            GameMode::Neighborhoods => &self.neighborhoods,
            GameMode::FamousPlaces => &self.famous_places,
        }
    }

    /// Case-insensitive lookup by name
    pub fn find(&self, mode: GameMode, name: &str) -> Result<&Target> {
        let wanted = name.trim().to_lowercase();
        self.targets(mode)
            .iter()
            .find(|t| t.name.to_lowercase() == wanted)
            .ok_or_else(|| GeoError::TargetNotFound(format!("{} ({})", name, mode)))
    }

    /// Reject invalid geometry and names repeated within a mode
    ///
    /// Names are compared case-insensitively, as `find` does.
    pub fn validate(&self) -> Result<()> {
        for mode in [GameMode::FamousPlaces, GameMode::Neighborhoods] {
            let mut seen = AHashSet::new();
            for target in self.targets(mode) {
                target.validate()?;
                if !seen.insert(target.name.to_lowercase()) {
                    return Err(GeoError::InvalidInput(format!(
                        "duplicate target '{}' in {}",
                        target.name, mode
                    )));
                }
            }
        }
        Ok(())
    }
}
