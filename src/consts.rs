pub mod cli_consts {
    //! Application Constants
    //!
    //! Fixed chart domains, UI timing and sizing, organized by functional area.

    // =============================================================================
    // ACTIVITY LOG
    // =============================================================================

    /// The maximum number of events to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 50;

    // =============================================================================
    // UI LOOP
    // =============================================================================

    /// UI timing configuration
    pub mod timing {
        use std::time::Duration;

        /// Interval between input polls (milliseconds)
        pub const POLL_INTERVAL_MS: u64 = 100;

        /// How long the splash screen stays up without input (milliseconds)
        pub const SPLASH_DURATION_MS: u64 = 1_500;

        /// Helper function to get the input poll interval
        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }

        /// Helper function to get the splash duration
        pub const fn splash_duration() -> Duration {
            Duration::from_millis(SPLASH_DURATION_MS)
        }
    }

    // =============================================================================
    // DIAGRAM
    // =============================================================================

    /// Fixed plot domains. Independent of the catalog contents so the real
    /// astrophysical range is always visible.
    pub mod domain {
        /// B-V color index, left to right.
        pub const COLOR_INDEX: (f64, f64) = (-0.5, 2.2);

        /// Absolute magnitude, bottom to top (brighter stars higher).
        pub const ABSOLUTE_MAGNITUDE: (f64, f64) = (16.0, -8.0);

        /// Spacing of interior x-axis ticks.
        pub const COLOR_INDEX_TICK_STEP: f64 = 0.5;

        /// Spacing of interior y-axis ticks.
        pub const MAGNITUDE_TICK_STEP: f64 = 4.0;
    }

    /// Pointer hit-testing configuration
    pub mod hit_test {
        /// Display units covered by one braille sub-cell.
        pub const DISPLAY_UNITS_PER_DOT: f64 = 4.0;

        /// Extra reach around a point, in braille dots.
        pub const TOLERANCE_DOTS: f64 = 2.0;
    }

    // =============================================================================
    // DETAIL VIEW
    // =============================================================================

    /// Detail overlay sizing
    pub mod detail {
        /// Maximum panel width (cells)
        pub const MAX_PANEL_WIDTH: u16 = 84;

        /// Maximum panel height (cells)
        pub const MAX_PANEL_HEIGHT: u16 = 30;

        /// Display units per terminal column when drawing the star icon
        pub const ICON_UNITS_PER_COLUMN: f64 = 10.0;
    }
}
