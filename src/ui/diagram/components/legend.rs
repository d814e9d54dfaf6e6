//! Spectral class legend
//!
//! Fixed reference data, independent of the loaded catalog.

use crate::catalog::SpectralClass;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use strum::IntoEnumIterator;

/// One line per spectral class, hottest first.
pub fn legend_lines() -> Vec<Line<'static>> {
    SpectralClass::iter()
        .map(|class| {
            let (r, g, b) = class.swatch();
            Line::from(vec![
                Span::styled("● ", Style::default().fg(Color::Rgb(r, g, b))),
                Span::styled(
                    format!("Tipo {}", class),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(": {}", class.temperature_range())),
            ])
        })
        .collect()
}

pub fn render_legend(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .title("TIPOS ESPECTRALES")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(legend_lines()).block(block), area);
}
