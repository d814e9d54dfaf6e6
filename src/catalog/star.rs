//! Star records and spectral classification

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Unique identifier of a star within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarId(String);

impl StarId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StarId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Harvard spectral classes, hottest first.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralClass {
    /// Legend swatch as `(r, g, b)`.
    pub const fn swatch(&self) -> (u8, u8, u8) {
        match self {
            SpectralClass::O => (0x9b, 0xb0, 0xff),
            SpectralClass::B => (0xaa, 0xbf, 0xff),
            SpectralClass::A => (0xca, 0xd7, 0xff),
            SpectralClass::F => (0xf8, 0xf7, 0xff),
            SpectralClass::G => (0xff, 0xf4, 0xea),
            SpectralClass::K => (0xff, 0xcc, 0x6f),
            SpectralClass::M => (0xff, 0x63, 0x47),
        }
    }

    /// Nominal effective temperature range, as printed in the legend.
    pub const fn temperature_range(&self) -> &'static str {
        match self {
            SpectralClass::O => "> 30,000 K",
            SpectralClass::B => "10,000 - 30,000 K",
            SpectralClass::A => "7,500 - 10,000 K",
            SpectralClass::F => "6,000 - 7,500 K",
            SpectralClass::G => "5,200 - 6,000 K",
            SpectralClass::K => "3,700 - 5,200 K",
            SpectralClass::M => "< 3,700 K",
        }
    }

    /// Representative temperature (K) at which the class swatch is exact.
    pub const fn anchor_temperature(&self) -> f64 {
        match self {
            SpectralClass::O => 35_000.0,
            SpectralClass::B => 20_000.0,
            SpectralClass::A => 8_750.0,
            SpectralClass::F => 6_750.0,
            SpectralClass::G => 5_600.0,
            SpectralClass::K => 4_450.0,
            SpectralClass::M => 3_000.0,
        }
    }
}

/// A single catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarRecord {
    pub id: StarId,
    pub name: String,

    /// B-V color index (x coordinate).
    pub color_index: f64,
    /// Absolute visual magnitude (y coordinate, lower is brighter).
    pub absolute_magnitude: f64,

    /// Solar masses.
    pub mass: f64,
    /// Solar radii.
    pub radius: f64,
    /// Effective temperature in Kelvin.
    pub temperature: f64,
    /// Solar luminosities.
    pub luminosity: f64,

    pub apparent_magnitude: f64,
    /// [Fe/H] in dex.
    pub metallicity: f64,
    /// Millions of years.
    pub age: f64,

    pub spectral_class: SpectralClass,
    pub stellar_type: String,

    /// Light-years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constellation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovery_year: Option<i32>,
    /// Astronomical units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravitational_axis: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_type: Option<String>,

    pub has_exoplanets: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_spectral_classes_ordered_by_decreasing_temperature() {
        let anchors: Vec<f64> = SpectralClass::iter()
            .map(|c| c.anchor_temperature())
            .collect();
        assert_eq!(anchors.len(), 7);
        assert!(anchors.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_record_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "x", "name": "X", "colorIndex": 0.65, "absoluteMagnitude": 4.83,
            "mass": 1.0, "radius": 1.0, "temperature": 5778, "luminosity": 1.0,
            "apparentMagnitude": -26.74, "metallicity": 0.0, "age": 4600,
            "spectralClass": "G", "stellarType": "Enana amarilla", "hasExoplanets": true
        }"#;
        let star: StarRecord = serde_json::from_str(json).unwrap();
        assert_eq!(star.id.as_str(), "x");
        assert_eq!(star.spectral_class, SpectralClass::G);
        assert_eq!(star.distance, None);
        assert_eq!(star.constellation, None);
        assert_eq!(star.discovery_year, None);
        assert_eq!(star.gravitational_axis, None);
        assert_eq!(star.variable_type, None);
    }

    #[test]
    fn test_record_rejects_unknown_spectral_class() {
        let json = r#"{
            "id": "x", "name": "X", "colorIndex": 0.0, "absoluteMagnitude": 0.0,
            "mass": 1.0, "radius": 1.0, "temperature": 5778, "luminosity": 1.0,
            "apparentMagnitude": 0.0, "metallicity": 0.0, "age": 1,
            "spectralClass": "Q", "stellarType": "?", "hasExoplanets": false
        }"#;
        assert!(serde_json::from_str::<StarRecord>(json).is_err());
    }
}
