//! Hover tooltip
//!
//! Shown next to the hovered or focused star for as long as it stays under
//! the pointer (or focus).

use crate::catalog::{StarRecord, color_for};
use crate::format::{group_thousands, to_fixed};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub title: String,
    pub lines: Vec<String>,
    pub hint: &'static str,
}

impl Tooltip {
    pub fn for_star(star: &StarRecord) -> Self {
        Self {
            title: star.name.clone(),
            lines: vec![
                format!("Clase: {}", star.spectral_class),
                format!("Temperatura: {} K", group_thousands(star.temperature)),
                format!("Masa: {} M☉", to_fixed(star.mass, 2)),
            ],
            hint: "Haz clic para más detalles",
        }
    }

    /// Outer size including the border.
    pub fn size(&self) -> (u16, u16) {
        let inner = std::iter::once(self.title.as_str())
            .chain(self.lines.iter().map(String::as_str))
            .chain(std::iter::once(self.hint))
            .map(|s| Line::raw(s).width())
            .max()
            .unwrap_or(0);
        (inner as u16 + 2, self.lines.len() as u16 + 4)
    }
}

/// Box placed beside `anchor`: right of it when it fits, otherwise left,
/// always clamped inside `bounds`.
pub fn tooltip_area(anchor: Position, size: (u16, u16), bounds: Rect) -> Rect {
    let width = size.0.min(bounds.width);
    let height = size.1.min(bounds.height);

    let right = anchor.x.saturating_add(2);
    let x = if right.saturating_add(width) <= bounds.right() {
        right
    } else {
        anchor.x.saturating_sub(width + 1).max(bounds.x)
    };
    let y = anchor
        .y
        .saturating_sub(height / 2)
        .clamp(bounds.y, bounds.bottom().saturating_sub(height));
    Rect::new(x, y, width, height)
}

pub fn render_tooltip(f: &mut Frame, star: &StarRecord, anchor: Position, bounds: Rect) {
    let tooltip = Tooltip::for_star(star);
    let area = tooltip_area(anchor, tooltip.size(), bounds);

    let mut lines = vec![Line::styled(
        tooltip.title.clone(),
        Style::default()
            .fg(color_for(star.temperature).into())
            .add_modifier(Modifier::BOLD),
    )];
    lines.extend(tooltip.lines.iter().map(|l| Line::raw(l.clone())));
    lines.push(Line::styled(
        tooltip.hint,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::White));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(Color::Rgb(30, 34, 40))),
        area,
    );
}
