//! Diagram utility functions
//!
//! Contains helper functions used across diagram components

use crate::events::Source;
use ratatui::prelude::Color;

/// Get a ratatui color for the part of the app an event came from
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Catalog => Color::Cyan,
        Source::Diagram => Color::Yellow,
        Source::Detail => Color::Green,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}
