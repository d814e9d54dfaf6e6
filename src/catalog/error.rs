//! Error handling for the catalog module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog is not a valid JSON array of star records.
    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share the same id.
    #[error("Duplicate star id in catalog: {0}")]
    DuplicateId(String),
}
