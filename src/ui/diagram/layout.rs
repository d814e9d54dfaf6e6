//! Diagram geometry
//!
//! Screen layout and the mapping between data coordinates, braille dots and
//! terminal cells. Drawing and pointer hit-testing both go through these
//! types so they can never disagree.

use crate::catalog::{Catalog, StarRecord, size_for};
use crate::consts::cli_consts::domain;
use crate::consts::cli_consts::hit_test::{DISPLAY_UNITS_PER_DOT, TOLERANCE_DOTS};
use crate::format::format_tick;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::widgets::{Block, Borders};

/// Braille dots per terminal cell, horizontally and vertically.
const DOTS_PER_CELL: (f64, f64) = (2.0, 4.0);

/// Width of the y-axis tick gutter (cells).
const Y_GUTTER_WIDTH: u16 = 4;

/// Width of the legend/activity column (cells).
const SIDE_COLUMN_WIDTH: u16 = 30;

/// A linear axis from `start` (left or bottom edge) to `end` (right or top edge).
///
/// `end < start` gives an inverted axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub start: f64,
    pub end: f64,
}

impl Axis {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// B-V color index axis.
    pub const fn color_index() -> Self {
        Self::new(domain::COLOR_INDEX.0, domain::COLOR_INDEX.1)
    }

    /// Absolute magnitude axis, inverted so brighter stars sit higher.
    pub const fn absolute_magnitude() -> Self {
        Self::new(domain::ABSOLUTE_MAGNITUDE.0, domain::ABSOLUTE_MAGNITUDE.1)
    }

    /// Position of `value` along the axis, 0.0 at `start` and 1.0 at `end`.
    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.start) / (self.end - self.start)
    }

    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Both endpoints plus every multiple of `step` strictly between them,
    /// ordered from `start` to `end`.
    pub fn ticks(&self, step: f64) -> Vec<f64> {
        let (lo, hi) = if self.is_inverted() {
            (self.end, self.start)
        } else {
            (self.start, self.end)
        };
        let eps = step * 1e-6;
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        let mut interior: Vec<f64> = (first..=last)
            .map(|k| k as f64 * step)
            .filter(|v| *v > lo + eps && *v < hi - eps)
            .collect();
        if self.is_inverted() {
            interior.reverse();
        }

        let mut ticks = Vec::with_capacity(interior.len() + 2);
        ticks.push(self.start);
        ticks.extend(interior);
        ticks.push(self.end);
        ticks
    }
}

/// Maps star coordinates onto a plot area drawn with a braille canvas over
/// the unit square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotGeometry {
    pub area: Rect,
    pub x: Axis,
    pub y: Axis,
}

impl PlotGeometry {
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            x: Axis::color_index(),
            y: Axis::absolute_magnitude(),
        }
    }

    fn resolution(&self) -> (f64, f64) {
        (
            self.area.width as f64 * DOTS_PER_CELL.0,
            self.area.height as f64 * DOTS_PER_CELL.1,
        )
    }

    /// Normalized canvas coordinates of a star, `None` if it lies outside the
    /// fixed domains.
    pub fn unit_point(&self, star: &StarRecord) -> Option<(f64, f64)> {
        let fx = self.x.fraction(star.color_index);
        let fy = self.y.fraction(star.absolute_magnitude);
        ((0.0..=1.0).contains(&fx) && (0.0..=1.0).contains(&fy)).then_some((fx, fy))
    }

    /// Braille dot holding the normalized point, counted from the top-left.
    ///
    /// Mirrors the canvas painter's own mapping.
    pub fn dot_for_unit(&self, fx: f64, fy: f64) -> Option<(f64, f64)> {
        let (res_x, res_y) = self.resolution();
        if res_x < 1.0 || res_y < 1.0 {
            return None;
        }
        Some((
            (fx * (res_x - 1.0)).floor(),
            ((1.0 - fy) * (res_y - 1.0)).floor(),
        ))
    }

    pub fn dot_for(&self, star: &StarRecord) -> Option<(f64, f64)> {
        let (fx, fy) = self.unit_point(star)?;
        self.dot_for_unit(fx, fy)
    }

    /// Terminal cell a star is drawn in.
    pub fn cell_for(&self, star: &StarRecord) -> Option<Position> {
        let (dx, dy) = self.dot_for(star)?;
        Some(Position::new(
            self.area.x + (dx / DOTS_PER_CELL.0) as u16,
            self.area.y + (dy / DOTS_PER_CELL.1) as u16,
        ))
    }

    /// Index of the star under `pos`, if any.
    ///
    /// The nearest star within reach wins; on equal distance the one drawn
    /// last (on top) wins.
    pub fn hit_test(&self, catalog: &Catalog, pos: Position) -> Option<usize> {
        if !self.area.contains(pos) {
            return None;
        }
        let px = (pos.x - self.area.x) as f64 * DOTS_PER_CELL.0 + (DOTS_PER_CELL.0 - 1.0) / 2.0;
        let py = (pos.y - self.area.y) as f64 * DOTS_PER_CELL.1 + (DOTS_PER_CELL.1 - 1.0) / 2.0;

        let mut best: Option<(usize, f64)> = None;
        for (index, star) in catalog.stars().iter().enumerate() {
            let Some((sx, sy)) = self.dot_for(star) else {
                continue;
            };
            let reach = size_for(star.luminosity) / DISPLAY_UNITS_PER_DOT + TOLERANCE_DOTS;
            let distance = (sx - px).hypot(sy - py);
            if distance <= reach && best.is_none_or(|(_, d)| distance <= d) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }

    /// One row of x-axis tick labels, `self.area.width` cells wide.
    ///
    /// Endpoint labels are placed first; interior labels that would touch an
    /// already placed label are dropped.
    pub fn x_tick_row(&self, ticks: &[f64]) -> String {
        let width = self.area.width as usize;
        let mut row = vec![' '; width];
        let mut placed: Vec<(usize, usize)> = Vec::new();

        for value in by_priority(ticks) {
            let label: Vec<char> = format_tick(value).chars().collect();
            if label.len() > width {
                continue;
            }
            let Some((dx, _)) = self.dot_for_unit(self.x.fraction(value), 0.0) else {
                continue;
            };
            let column = (dx / DOTS_PER_CELL.0) as usize;
            let start = column
                .saturating_sub(label.len() / 2)
                .min(width - label.len());
            let end = start + label.len();
            if placed.iter().any(|&(s, e)| start <= e && s <= end) {
                continue;
            }
            row[start..end].copy_from_slice(&label);
            placed.push((start, end));
        }
        row.into_iter().collect()
    }

    /// Row offsets (from the top of the plot) and labels for y-axis ticks.
    pub fn y_tick_rows(&self, ticks: &[f64]) -> Vec<(u16, String)> {
        let mut rows: Vec<(u16, String)> = Vec::new();
        for value in by_priority(ticks) {
            let Some((_, dy)) = self.dot_for_unit(0.0, self.y.fraction(value)) else {
                continue;
            };
            let row = (dy / DOTS_PER_CELL.1) as u16;
            if rows.iter().any(|(r, _)| *r == row) {
                continue;
            }
            rows.push((row, format_tick(value)));
        }
        rows.sort_by_key(|(row, _)| *row);
        rows
    }
}

/// Endpoints first, then interior ticks in axis order.
fn by_priority(ticks: &[f64]) -> Vec<f64> {
    match ticks {
        [] | [_] => ticks.to_vec(),
        [first, interior @ .., last] => {
            let mut ordered = vec![*first, *last];
            ordered.extend_from_slice(interior);
            ordered
        }
    }
}

/// Screen regions of the diagram screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramLayout {
    pub header: Rect,
    pub chart_block: Rect,
    pub y_ticks: Rect,
    pub x_ticks: Rect,
    pub x_label: Rect,
    pub legend: Rect,
    pub activity: Rect,
    pub guide: Rect,
    pub footer: Rect,
    pub plot: PlotGeometry,
}

impl DiagramLayout {
    pub fn new(area: Rect) -> Self {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(7),
                Constraint::Length(2),
            ])
            .margin(1)
            .split(area);

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(SIDE_COLUMN_WIDTH)])
            .split(main_chunks[1]);

        let chart_column = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Fill(1), Constraint::Length(1)])
            .split(body_chunks[0]);

        let side_column = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Fill(1)])
            .split(body_chunks[1]);

        let chart_block = chart_column[0];
        let chart_inner = Block::default().borders(Borders::ALL).inner(chart_block);
        let chart_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Fill(1), Constraint::Length(1)])
            .split(chart_inner);
        let plot_columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(Y_GUTTER_WIDTH), Constraint::Fill(1)])
            .split(chart_rows[0]);
        let tick_columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(Y_GUTTER_WIDTH), Constraint::Fill(1)])
            .split(chart_rows[1]);

        Self {
            header: main_chunks[0],
            chart_block,
            y_ticks: plot_columns[0],
            x_ticks: tick_columns[1],
            x_label: chart_column[1],
            legend: side_column[0],
            activity: side_column[1],
            guide: main_chunks[2],
            footer: main_chunks[3],
            plot: PlotGeometry::new(plot_columns[1]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StarId;

    fn plot() -> PlotGeometry {
        PlotGeometry::new(Rect::new(10, 5, 60, 20))
    }

    #[test]
    fn test_magnitude_axis_is_inverted() {
        let axis = Axis::absolute_magnitude();
        assert!(axis.is_inverted());
        // Brighter (more negative) magnitudes sit higher on screen.
        assert_eq!(axis.fraction(16.0), 0.0);
        assert_eq!(axis.fraction(-8.0), 1.0);
        assert!(axis.fraction(-5.0) > axis.fraction(4.83));
        assert!(!Axis::color_index().is_inverted());
    }

    #[test]
    fn test_ticks_include_domain_endpoints() {
        assert_eq!(
            Axis::color_index().ticks(0.5),
            vec![-0.5, 0.0, 0.5, 1.0, 1.5, 2.0, 2.2]
        );
        assert_eq!(
            Axis::absolute_magnitude().ticks(4.0),
            vec![16.0, 12.0, 8.0, 4.0, 0.0, -4.0, -8.0]
        );
    }

    #[test]
    fn test_brighter_star_is_drawn_higher() {
        let catalog = Catalog::builtin().unwrap();
        let plot = plot();
        let sun = plot.cell_for(catalog.get(&StarId::new("sol")).unwrap()).unwrap();
        let rigel = plot.cell_for(catalog.get(&StarId::new("rigel")).unwrap()).unwrap();
        let proxima = plot
            .cell_for(catalog.get(&StarId::new("proxima-centauri")).unwrap())
            .unwrap();
        assert!(rigel.y < sun.y);
        assert!(sun.y < proxima.y);
        // Bluer stars sit further left.
        assert!(rigel.x < sun.x && sun.x < proxima.x);
        for pos in [sun, rigel, proxima] {
            assert!(plot.area.contains(pos));
        }
    }

    #[test]
    fn test_hit_test_finds_star_under_pointer() {
        let catalog = Catalog::builtin().unwrap();
        let plot = plot();
        for star in catalog.stars() {
            let cell = plot.cell_for(star).unwrap();
            assert!(plot.hit_test(&catalog, cell).is_some(), "{}", star.name);
        }
        // Rigel sits alone in the top-left of the diagram.
        let rigel = catalog
            .stars()
            .iter()
            .position(|s| s.id == StarId::new("rigel"))
            .unwrap();
        let cell = plot.cell_for(&catalog.stars()[rigel]).unwrap();
        assert_eq!(plot.hit_test(&catalog, cell), Some(rigel));
    }

    #[test]
    fn test_hit_test_misses_empty_space_and_outside() {
        let catalog = Catalog::builtin().unwrap();
        let plot = plot();
        // Top-right corner: cool and extremely bright, nothing lives there.
        let corner = Position::new(plot.area.right() - 1, plot.area.y);
        assert_eq!(plot.hit_test(&catalog, corner), None);
        assert_eq!(plot.hit_test(&catalog, Position::new(0, 0)), None);
        assert_eq!(plot.hit_test(&Catalog::default(), Position::new(20, 10)), None);
    }

    #[test]
    fn test_x_tick_row_keeps_endpoints() {
        let plot = plot();
        let row = plot.x_tick_row(&plot.x.ticks(0.5));
        assert_eq!(row.chars().count(), 60);
        assert!(row.starts_with("-0.5"));
        assert!(row.trim_end().ends_with("2.2"));
        assert!(row.contains(" 1 "));
    }

    #[test]
    fn test_y_tick_rows_span_the_plot() {
        let plot = plot();
        let rows = plot.y_tick_rows(&plot.y.ticks(4.0));
        assert_eq!(rows.first(), Some(&(0, "-8".to_string())));
        assert_eq!(rows.last(), Some(&(19, "16".to_string())));
        assert_eq!(rows.len(), 7);
    }

    #[test]
    fn test_layout_fits_inside_area() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = DiagramLayout::new(area);
        assert!(layout.plot.area.width > 0 && layout.plot.area.height > 0);
        assert_eq!(layout.x_ticks.width, layout.plot.area.width);
        assert_eq!(layout.x_ticks.x, layout.plot.area.x);
        assert_eq!(layout.y_ticks.height, layout.plot.area.height);
        for rect in [layout.header, layout.legend, layout.guide, layout.footer] {
            assert!(area.contains(Position::new(rect.x, rect.y)));
        }
    }
}
