//! Diagram component modules
//!
//! Contains all individual rendering components

pub mod activity;
pub mod chart;
pub mod footer;
pub mod guide;
pub mod header;
pub mod legend;
pub mod tooltip;
