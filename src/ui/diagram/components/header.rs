//! Diagram header component
//!
//! Renders the title and a subtitle with the catalog size

use crate::catalog::Catalog;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_header(f: &mut Frame, area: Rect, catalog: &Catalog) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(2)])
        .split(area);

    let title = Paragraph::new("DIAGRAMA HR INTERACTIVO")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(title, header_chunks[0]);

    let subtitle = Paragraph::new(format!(
        "Hertzsprung-Russell · {} estrellas · haz clic en una estrella para ver sus propiedades",
        catalog.len()
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::Gray))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(subtitle, header_chunks[1]);
}
