//! Diagram footer component
//!
//! Renders footer with key hints

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer. The hints change while the detail view is open.
pub fn render_footer(f: &mut Frame, area: Rect, detail_open: bool) {
    let footer_text = if detail_open {
        "[Esc] Cerrar detalle | [Q] Salir"
    } else {
        "[Tab/←→] Recorrer estrellas | [Enter] Ver detalle | [Q] Salir"
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
