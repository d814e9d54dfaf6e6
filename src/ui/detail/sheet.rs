//! Detail view-model
//!
//! Everything the detail panel shows, already formatted. The TUI overlay
//! and the `show` command both print from this.

use crate::catalog::{StarColor, StarRecord, color_for, icon_size_for};
use crate::format::{
    format_age, format_distance, format_metallicity, format_number, to_fixed,
};
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BadgeKind {
    Constellation,
    HasExoplanets,
    NoExoplanets,
    Variable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub kind: BadgeKind,
    pub text: String,
}

/// A single labelled value, e.g. `Masa: 1.00 M☉`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyCard {
    pub label: &'static str,
    pub value: String,
    pub unit: Option<&'static str>,
}

impl PropertyCard {
    fn new(label: &'static str, value: String, unit: Option<&'static str>) -> Self {
        Self { label, value, unit }
    }

    /// Value with its unit appended.
    pub fn display_value(&self) -> String {
        match self.unit {
            Some(unit) => format!("{} {}", self.value, unit),
            None => self.value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPanel {
    pub title: &'static str,
    pub cards: Vec<PropertyCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailSheet {
    pub name: String,
    /// Spectral class and stellar type, e.g. `G - Enana amarilla`.
    pub classification: String,
    pub color: StarColor,
    /// Icon size in display units, see [`icon_size_for`].
    pub icon_size: f64,
    pub badges: Vec<Badge>,
    pub panels: Vec<PropertyPanel>,
}

impl DetailSheet {
    pub fn for_star(star: &StarRecord) -> Self {
        let mut badges = Vec::new();
        if let Some(constellation) = &star.constellation {
            badges.push(Badge {
                kind: BadgeKind::Constellation,
                text: format!("Constelación: {}", constellation),
            });
        }
        badges.push(if star.has_exoplanets {
            Badge {
                kind: BadgeKind::HasExoplanets,
                text: "Tiene exoplanetas".to_string(),
            }
        } else {
            Badge {
                kind: BadgeKind::NoExoplanets,
                text: "Sin exoplanetas conocidos".to_string(),
            }
        });
        if let Some(variable) = &star.variable_type {
            badges.push(Badge {
                kind: BadgeKind::Variable,
                text: format!("Variable: {}", variable),
            });
        }

        let physical = PropertyPanel {
            title: "Propiedades Físicas Fundamentales",
            cards: vec![
                PropertyCard::new("Masa", format_number(star.mass, 2), Some("M☉")),
                PropertyCard::new("Radio", format_number(star.radius, 2), Some("R☉")),
                PropertyCard::new(
                    "Temperatura Efectiva",
                    format_number(star.temperature, 2),
                    Some("K"),
                ),
                PropertyCard::new("Luminosidad", format_number(star.luminosity, 2), Some("L☉")),
            ],
        };

        let mut observational = vec![
            PropertyCard::new("Magnitud Aparente", to_fixed(star.apparent_magnitude, 2), None),
            PropertyCard::new("Magnitud Absoluta", to_fixed(star.absolute_magnitude, 2), None),
            PropertyCard::new("Índice de Color (B-V)", to_fixed(star.color_index, 3), None),
        ];
        if let Some(distance) = star.distance {
            observational.push(PropertyCard::new("Distancia", format_distance(distance), None));
        }

        let mut evolution = vec![
            PropertyCard::new("Metalicidad [Fe/H]", format_metallicity(star.metallicity), Some("dex")),
            PropertyCard::new("Edad", format_age(star.age), None),
        ];
        if let Some(axis) = star.gravitational_axis {
            evolution.push(PropertyCard::new(
                "Eje Gravitacional",
                format_number(axis, 2),
                Some("UA"),
            ));
        }
        if let Some(year) = star.discovery_year {
            evolution.push(PropertyCard::new("Año de Descubrimiento", year.to_string(), None));
        }

        Self {
            name: star.name.clone(),
            classification: format!("{} - {}", star.spectral_class, star.stellar_type),
            color: color_for(star.temperature),
            icon_size: icon_size_for(star.radius),
            badges,
            panels: vec![
                physical,
                PropertyPanel {
                    title: "Propiedades Observacionales",
                    cards: observational,
                },
                PropertyPanel {
                    title: "Composición y Evolución",
                    cards: evolution,
                },
            ],
        }
    }
}

impl fmt::Display for DetailSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", self.classification)?;
        writeln!(f, "Color: {}", self.color.to_hex())?;
        for badge in &self.badges {
            writeln!(f, "[{}]", badge.text)?;
        }
        for panel in &self.panels {
            writeln!(f)?;
            writeln!(f, "{}", panel.title)?;
            for card in &panel.cards {
                writeln!(f, "  {}: {}", card.label, card.display_value())?;
            }
        }
        Ok(())
    }
}
