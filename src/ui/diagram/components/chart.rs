//! Scatter plot component
//!
//! Draws the braille canvas with the grid, every star of the catalog and
//! the axis labels around it.

use super::super::layout::DiagramLayout;
use super::super::state::{DiagramState, HoverOrigin};
use crate::catalog::{Catalog, color_for, size_for};
use crate::consts::cli_consts::domain::{COLOR_INDEX_TICK_STEP, MAGNITUDE_TICK_STEP};
use crate::consts::cli_consts::hit_test::DISPLAY_UNITS_PER_DOT;
use crate::ui::shapes::{StarGlyph, UNIT_BOUNDS};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const GRID_COLOR: Color = Color::Rgb(48, 54, 61);

pub fn render_chart(f: &mut Frame, layout: &DiagramLayout, catalog: &Catalog, state: &DiagramState) {
    let block = Block::default()
        .title("Magnitud Absoluta (más brillante ↑)")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(block, layout.chart_block);

    render_axis_labels(f, layout);

    let plot = layout.plot;
    if plot.area.width == 0 || plot.area.height == 0 {
        return;
    }

    let x_ticks = plot.x.ticks(COLOR_INDEX_TICK_STEP);
    let y_ticks = plot.y.ticks(MAGNITUDE_TICK_STEP);
    let hovered = state.hover();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(UNIT_BOUNDS)
        .y_bounds(UNIT_BOUNDS)
        .paint(|ctx| {
            for value in &x_ticks {
                let x = plot.x.fraction(*value);
                ctx.draw(&CanvasLine::new(x, 0.0, x, 1.0, GRID_COLOR));
            }
            for value in &y_ticks {
                let y = plot.y.fraction(*value);
                ctx.draw(&CanvasLine::new(0.0, y, 1.0, y, GRID_COLOR));
            }
            ctx.layer();

            for (index, star) in catalog.stars().iter().enumerate() {
                let Some((x, y)) = plot.unit_point(star) else {
                    continue;
                };
                let radius_dots = (size_for(star.luminosity) / DISPLAY_UNITS_PER_DOT).floor();
                if let Some(hover) = hovered.filter(|hover| hover.index == index) {
                    let ring = match hover.origin {
                        HoverOrigin::Pointer => Color::White,
                        HoverOrigin::Keyboard => Color::LightYellow,
                    };
                    ctx.draw(&StarGlyph {
                        x,
                        y,
                        radius_dots: radius_dots + 1.0,
                        color: ring,
                    });
                }
                ctx.draw(&StarGlyph {
                    x,
                    y,
                    radius_dots,
                    color: color_for(star.temperature).into(),
                });
            }
        });
    f.render_widget(canvas, plot.area);
}

fn render_axis_labels(f: &mut Frame, layout: &DiagramLayout) {
    let plot = layout.plot;
    let label_style = Style::default().fg(Color::Gray);

    for (row, label) in plot.y_tick_rows(&plot.y.ticks(MAGNITUDE_TICK_STEP)) {
        if row >= layout.y_ticks.height {
            continue;
        }
        let area = Rect::new(layout.y_ticks.x, layout.y_ticks.y + row, layout.y_ticks.width, 1);
        f.render_widget(
            Paragraph::new(label)
                .alignment(Alignment::Right)
                .style(label_style),
            area,
        );
    }

    f.render_widget(
        Paragraph::new(plot.x_tick_row(&plot.x.ticks(COLOR_INDEX_TICK_STEP))).style(label_style),
        layout.x_ticks,
    );

    f.render_widget(
        Paragraph::new("Índice de Color B-V (más azul ← → más rojo)")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan)),
        layout.x_label,
    );
}
