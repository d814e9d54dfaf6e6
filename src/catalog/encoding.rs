//! Visual encodings: physical star properties mapped to display properties.
//!
//! All functions here are pure. The chart and the detail view call them on
//! every frame, so identical input must always give identical output.

use super::star::SpectralClass;
use ratatui::style::Color;
use strum::IntoEnumIterator;

/// Smallest point radius on the chart, in display units.
pub const MIN_POINT_SIZE: f64 = 2.0;
/// Largest point radius on the chart, in display units.
pub const MAX_POINT_SIZE: f64 = 12.0;

/// Smallest detail-view icon, in display units.
pub const MIN_ICON_SIZE: f64 = 40.0;
/// Largest detail-view icon, in display units.
pub const MAX_ICON_SIZE: f64 = 100.0;

/// RGB color of a star as seen on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl StarColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the color as a hex string (e.g., "#FFF4EA")
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<SpectralClass> for StarColor {
    fn from(class: SpectralClass) -> Self {
        let (r, g, b) = class.swatch();
        StarColor::new(r, g, b)
    }
}

impl From<StarColor> for Color {
    fn from(color: StarColor) -> Self {
        Color::Rgb(color.r, color.g, color.b)
    }
}

/// Maps an effective temperature (K) to the color a star is drawn with.
///
/// Interpolates linearly between the spectral class swatches at their anchor
/// temperatures, so the chart agrees with the legend. Temperatures outside
/// the anchored range take the nearest end color.
pub fn color_for(temperature: f64) -> StarColor {
    // Anchors from coolest (M) to hottest (O).
    let anchors: Vec<(f64, StarColor)> = SpectralClass::iter()
        .rev()
        .map(|class| (class.anchor_temperature(), StarColor::from(class)))
        .collect();

    let (coolest_t, coolest) = anchors[0];
    let (hottest_t, hottest) = anchors[anchors.len() - 1];
    if temperature.is_nan() || temperature <= coolest_t {
        return coolest;
    }
    if temperature >= hottest_t {
        return hottest;
    }

    for pair in anchors.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if temperature <= t1 {
            let frac = (temperature - t0) / (t1 - t0);
            return StarColor::new(
                lerp(c0.r, c1.r, frac),
                lerp(c0.g, c1.g, frac),
                lerp(c0.b, c1.b, frac),
            );
        }
    }
    hottest
}

fn lerp(a: u8, b: u8, frac: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * frac).round() as u8
}

/// Maps a luminosity (L☉) to a chart point radius in display units.
///
/// Logarithmic so that luminosities spanning many orders of magnitude stay
/// comparable, clamped to [`MIN_POINT_SIZE`, `MAX_POINT_SIZE`].
pub fn size_for(luminosity: f64) -> f64 {
    if !luminosity.is_finite() || luminosity <= 0.0 {
        return if luminosity == f64::INFINITY {
            MAX_POINT_SIZE
        } else {
            MIN_POINT_SIZE
        };
    }
    (4.0 + 1.5 * luminosity.log10()).clamp(MIN_POINT_SIZE, MAX_POINT_SIZE)
}

/// Maps a stellar radius (R☉) to the detail-view icon size in display units.
pub fn icon_size_for(radius: f64) -> f64 {
    let size = (radius + 1.0).ln() * 20.0;
    if size.is_nan() {
        return MIN_ICON_SIZE;
    }
    size.clamp(MIN_ICON_SIZE, MAX_ICON_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Largest per-channel difference between two colors.
    fn channel_distance(a: StarColor, b: StarColor) -> u8 {
        a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
    }

    #[test]
    fn test_color_is_deterministic() {
        for t in [2_500.0, 3_700.0, 5_778.0, 9_940.0, 42_000.0] {
            assert_eq!(color_for(t), color_for(t));
        }
        for l in [1e-4, 1.0, 120_000.0] {
            assert_eq!(size_for(l), size_for(l));
        }
    }

    #[test]
    fn test_color_matches_stellar_appearance() {
        // Hot O-type star - blue-white
        let hot = color_for(32_000.0);
        assert!(hot.b > hot.r, "Hot stars should have more blue than red");

        // Sun-like - white-yellow
        let solar = color_for(5_800.0);
        assert!(solar.r >= solar.b);
        assert!(solar.g > 230 && solar.b > 220, "Solar-type should be near white");

        // Cool M-type star - red
        let cool = color_for(3_200.0);
        assert!(cool.r > cool.g && cool.r > cool.b);
        assert!(cool.g < 130, "Cool stars should be reddish");
    }

    #[test]
    fn test_color_agrees_with_legend_at_anchors() {
        for class in SpectralClass::iter() {
            assert_eq!(color_for(class.anchor_temperature()), StarColor::from(class));
        }
        assert_eq!(color_for(1_000.0), StarColor::from(SpectralClass::M));
        assert_eq!(color_for(80_000.0), StarColor::from(SpectralClass::O));
    }

    #[test]
    fn test_color_is_continuous() {
        let mut t = 2_000.0;
        while t < 40_000.0 {
            let a = color_for(t);
            let b = color_for(t + 100.0);
            assert!(channel_distance(a, b) <= 12, "jump between {}K and {}K", t, t + 100.0);
            t += 50.0;
        }
    }

    #[test]
    fn test_size_is_monotonic_and_bounded() {
        let mut previous = 0.0;
        let mut l = 1e-5;
        while l < 1e7 {
            let size = size_for(l);
            assert!(size >= previous);
            assert!((MIN_POINT_SIZE..=MAX_POINT_SIZE).contains(&size));
            previous = size;
            l *= 1.5;
        }
        assert_eq!(size_for(1e-5), MIN_POINT_SIZE);
        assert_eq!(size_for(1e7), MAX_POINT_SIZE);
        assert_eq!(size_for(1.0), 4.0);
    }

    #[test]
    fn test_size_handles_degenerate_luminosity() {
        assert_eq!(size_for(0.0), MIN_POINT_SIZE);
        assert_eq!(size_for(-3.0), MIN_POINT_SIZE);
        assert_eq!(size_for(f64::NAN), MIN_POINT_SIZE);
        assert_eq!(size_for(f64::INFINITY), MAX_POINT_SIZE);
    }

    #[test]
    fn test_icon_size_follows_log_curve() {
        // ln(2) * 20 ~= 13.86, below the floor.
        assert_eq!(icon_size_for(1.0), 40.0);
        assert_eq!(icon_size_for(1e6), 100.0);
        let r = 10.0_f64;
        assert!((icon_size_for(r) - (r + 1.0).ln() * 20.0).abs() < 1e-12);
        assert!(icon_size_for(10.0) < icon_size_for(50.0));
    }

    #[test]
    fn test_hex_rendering() {
        assert_eq!(StarColor::from(SpectralClass::K).to_hex(), "#FFCC6F");
    }
}
