//! Detail overlay renderer

use super::layout::{DetailLayout, icon_cells};
use super::sheet::{BadgeKind, DetailSheet, PropertyPanel};
use crate::catalog::StarRecord;
use crate::ui::shapes::{StarGlyph, UNIT_BOUNDS};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::Canvas;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

const PANEL_BG: Color = Color::Rgb(22, 27, 34);

pub fn render_detail(f: &mut Frame, star: &StarRecord) {
    let layout = DetailLayout::new(f.area());
    let sheet = DetailSheet::for_star(star);

    // Dim whatever the diagram drew underneath.
    f.buffer_mut().set_style(
        layout.overlay,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    );
    f.render_widget(Clear, layout.panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(PANEL_BG));
    let inner = block.inner(layout.panel);
    f.render_widget(block, layout.panel);
    f.render_widget(
        Paragraph::new("[×]").style(
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ),
        layout.close_button,
    );

    let (icon_cols, icon_rows) = icon_cells(sheet.icon_size);
    let header_height = icon_rows.max(2 + sheet.badges.len() as u16);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(inner);

    render_header(f, rows[0], &sheet, (icon_cols, icon_rows));
    render_panels(f, rows[2], &sheet.panels);
}

fn render_header(f: &mut Frame, area: Rect, sheet: &DetailSheet, icon: (u16, u16)) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(icon.0 + 2), Constraint::Fill(1)])
        .split(area);

    let icon_area = Rect::new(
        columns[0].x + 1,
        columns[0].y,
        icon.0.min(columns[0].width.saturating_sub(1)),
        icon.1.min(columns[0].height),
    );
    let glyph = StarGlyph {
        x: 0.5,
        y: 0.5,
        radius_dots: (icon.0 as f64 - 1.0).max(0.0),
        color: sheet.color.into(),
    };
    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds(UNIT_BOUNDS)
            .y_bounds(UNIT_BOUNDS)
            .paint(move |ctx| ctx.draw(&glyph)),
        icon_area,
    );

    let mut lines = vec![
        Line::styled(
            sheet.name.clone(),
            Style::default()
                .fg(sheet.color.into())
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(sheet.classification.clone(), Style::default().fg(Color::Gray)),
    ];
    lines.extend(sheet.badges.iter().map(|badge| {
        let color = match badge.kind {
            BadgeKind::Constellation => Color::LightBlue,
            BadgeKind::HasExoplanets => Color::LightGreen,
            BadgeKind::NoExoplanets => Color::DarkGray,
            BadgeKind::Variable => Color::LightMagenta,
        };
        Line::from(Span::styled(
            format!("[{}]", badge.text),
            Style::default().fg(color),
        ))
    }));
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), columns[1]);
}

fn render_panels(f: &mut Frame, area: Rect, panels: &[PropertyPanel]) {
    // Two cards per row plus the panel's borders.
    let constraints: Vec<Constraint> = panels
        .iter()
        .map(|panel| Constraint::Length(panel.cards.len().div_ceil(2) as u16 + 2))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (panel, chunk) in panels.iter().zip(chunks.iter()) {
        let block = Block::default()
            .title(Span::styled(
                panel.title,
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(*chunk);
        f.render_widget(block, *chunk);

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);
        for (column, half) in halves.iter().enumerate() {
            let lines: Vec<Line> = panel
                .cards
                .iter()
                .skip(column)
                .step_by(2)
                .map(|card| {
                    Line::from(vec![
                        Span::styled(
                            format!("{}: ", card.label),
                            Style::default().fg(Color::Gray),
                        ),
                        Span::styled(
                            card.display_value(),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ])
                })
                .collect();
            f.render_widget(Paragraph::new(lines), *half);
        }
    }
}
