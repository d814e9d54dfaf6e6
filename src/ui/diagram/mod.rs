//! Scatter-plot screen
//!
//! Split into geometry, state and rendering components

pub mod components;
pub mod layout;
pub mod renderer;
pub mod state;
pub mod utils;

// Re-export main types and functions for external use
pub use layout::DiagramLayout;
pub use renderer::render_diagram;
pub use state::DiagramState;
