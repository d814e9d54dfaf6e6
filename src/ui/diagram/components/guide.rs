//! Reading guide below the chart

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

const GUIDE: [(&str, &str); 5] = [
    ("Eje X", "índice de color B-V; las estrellas azules y calientes a la izquierda, las rojas y frías a la derecha."),
    ("Eje Y", "magnitud absoluta; cuanto más arriba, más luminosa es la estrella."),
    ("Secuencia Principal", "la banda diagonal donde las estrellas fusionan hidrógeno, como el Sol."),
    ("Gigantes y Supergigantes", "arriba a la derecha: estrellas evolucionadas, enormes y brillantes."),
    ("Enanas Blancas", "abajo a la izquierda: núcleos calientes y tenues de estrellas ya extinguidas."),
];

pub fn render_guide(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = GUIDE
        .iter()
        .map(|(topic, text)| {
            Line::from(vec![
                Span::styled(
                    format!("• {}: ", topic),
                    Style::default()
                        .fg(Color::LightYellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(*text),
            ])
        })
        .collect();

    let block = Block::default()
        .title("¿CÓMO LEER ESTE DIAGRAMA?")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
