//! Static star catalog
//!
//! The catalog is loaded once at start-up and never mutated afterwards.

pub mod encoding;
pub mod error;
pub mod star;

pub use encoding::{StarColor, color_for, icon_size_for, size_for};
pub use error::CatalogError;
pub use star::{SpectralClass, StarId, StarRecord};

use std::collections::HashSet;
use std::{fs, path::Path};

/// Catalog shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../../data/stars.json");

/// Ordered, read-only collection of star records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    stars: Vec<StarRecord>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids.
    pub fn new(stars: Vec<StarRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(stars.len());
        for star in &stars {
            if !seen.insert(star.id.as_str()) {
                return Err(CatalogError::DuplicateId(star.id.to_string()));
            }
        }
        Ok(Self { stars })
    }

    /// Parses a catalog from a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let stars: Vec<StarRecord> = serde_json::from_str(json)?;
        Self::new(stars)
    }

    /// Loads a catalog from a JSON file at the given path.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let buf = fs::read_to_string(path)?;
        let catalog = Self::from_json(&buf)?;
        log::debug!("Loaded {} stars from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The embedded catalog of well-known stars.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Loads `path` if given, otherwise the embedded catalog.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::builtin(),
        }
    }

    pub fn stars(&self) -> &[StarRecord] {
        &self.stars
    }

    pub fn get(&self, id: &StarId) -> Option<&StarRecord> {
        self.stars.iter().find(|star| &star.id == id)
    }

    pub fn get_index(&self, index: usize) -> Option<&StarRecord> {
        self.stars.get(index)
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
