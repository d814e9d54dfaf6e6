//! Splash screen rendering module.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const LOGO_NAME: &str = r#"
  ██╗  ██╗  ██████╗       ██████╗   ██╗   █████╗    ██████╗
  ██║  ██║  ██╔══██╗      ██╔══██╗  ██║  ██╔══██╗  ██╔════╝
  ███████║  ██████╔╝      ██║  ██║  ██║  ███████║  ██║  ███╗
  ██╔══██║  ██╔══██╗      ██║  ██║  ██║  ██╔══██║  ██║   ██║
  ██║  ██║  ██║  ██║      ██████╔╝  ██║  ██║  ██║  ╚██████╔╝
  ╚═╝  ╚═╝  ╚═╝  ╚═╝      ╚═════╝   ╚═╝  ╚═╝  ╚═╝   ╚═════╝
"#;

/// Spectral sequence shown under the logo, hottest first.
const SEQUENCE: [(&str, Color); 7] = [
    ("O", Color::Rgb(0x9b, 0xb0, 0xff)),
    ("B", Color::Rgb(0xaa, 0xbf, 0xff)),
    ("A", Color::Rgb(0xca, 0xd7, 0xff)),
    ("F", Color::Rgb(0xf8, 0xf7, 0xff)),
    ("G", Color::Rgb(0xff, 0xf4, 0xea)),
    ("K", Color::Rgb(0xff, 0xcc, 0x6f)),
    ("M", Color::Rgb(0xff, 0x63, 0x47)),
];

pub fn render_splash(f: &mut Frame) {
    let mut lines: Vec<Line> = LOGO_NAME
        .trim_matches('\n')
        .lines()
        .map(|line| {
            Span::styled(
                line.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .into()
        })
        .collect();

    lines.push(Line::from(Span::raw(" ")));
    lines.push(Line::from(
        SEQUENCE
            .iter()
            .flat_map(|(letter, color)| {
                [
                    Span::styled("● ", Style::default().fg(*color)),
                    Span::styled(format!("{}  ", letter), Style::default().fg(*color)),
                ]
            })
            .collect::<Vec<_>>(),
    ));
    lines.push(
        Span::styled(
            format!("Diagrama Hertzsprung-Russell · versión {}", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::ITALIC),
        )
        .into(),
    );

    let logo_height = (lines.len() + 2) as u16;

    // Vertically center using layout
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min((f.area().height.saturating_sub(logo_height)) / 2),
            Constraint::Length(logo_height),
            Constraint::Min((f.area().height.saturating_sub(logo_height + 1)) / 2),
        ])
        .split(f.area());

    let centered_area: Rect = vertical_chunks[1];

    let logo = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));

    f.render_widget(logo, centered_area);
}
