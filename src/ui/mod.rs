// Module declarations
mod app;
pub mod detail;
pub mod diagram;
pub mod selection;
pub mod shapes;
pub mod splash;
// Re-exports for external use
pub use app::{App, UIConfig, run};
