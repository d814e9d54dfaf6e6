//! Event System
//!
//! Activity events raised by user interaction, shown in the activity panel

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// The part of the application an event originates from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// Catalog loading.
    Catalog,
    /// The scatter plot (hover, focus, point clicks).
    Diagram,
    /// The star detail overlay.
    Detail,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Selection,
    Dismissal,
    Navigation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn catalog_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Catalog, msg, event_type, log_level)
    }

    pub fn diagram_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Diagram, msg, event_type, log_level)
    }

    pub fn detail_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Detail, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_events_are_always_displayed() {
        let event = Event::diagram_with_level(
            "Estrella seleccionada: Vega".to_string(),
            EventType::Selection,
            LogLevel::Info,
        );
        assert!(event.should_display());
        assert_eq!(event.source, Source::Diagram);
        assert!(event.to_string().starts_with("Selection ["));
    }

    #[test]
    fn test_timestamp_format() {
        let event = Event::catalog_with_level(
            "Catálogo cargado".to_string(),
            EventType::Success,
            LogLevel::Info,
        );
        // "YYYY-MM-DD HH:MM:SS"
        assert_eq!(event.timestamp.len(), 19);
        assert_eq!(&event.timestamp[4..5], "-");
        assert_eq!(&event.timestamp[10..11], " ");
    }
}
