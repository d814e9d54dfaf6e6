//! Canvas shapes shared by the diagram and the detail view.

use ratatui::style::Color;
use ratatui::widgets::canvas::{Painter, Shape};

/// Canvas bounds used everywhere: points are given in normalized coordinates.
pub const UNIT_BOUNDS: [f64; 2] = [0.0, 1.0];

/// A filled disc centred on a normalized point, with its radius in braille dots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarGlyph {
    pub x: f64,
    pub y: f64,
    pub radius_dots: f64,
    pub color: Color,
}

impl Shape for StarGlyph {
    fn draw(&self, painter: &mut Painter) {
        let Some((cx, cy)) = painter.get_point(self.x, self.y) else {
            return;
        };
        // Bottom-right corner of the unit square gives the grid extent.
        let Some((max_x, max_y)) = painter.get_point(UNIT_BOUNDS[1], UNIT_BOUNDS[0]) else {
            return;
        };

        let r = self.radius_dots.max(0.0).floor() as i64;
        let r_sq = (self.radius_dots * self.radius_dots).max(0.0);
        for oy in -r..=r {
            for ox in -r..=r {
                if (ox * ox + oy * oy) as f64 > r_sq + 0.5 {
                    continue;
                }
                let x = cx as i64 + ox;
                let y = cy as i64 + oy;
                if x < 0 || y < 0 || x > max_x as i64 || y > max_y as i64 {
                    continue;
                }
                painter.paint(x as usize, y as usize, self.color);
            }
        }
    }
}
