//! Diagram activity panel component
//!
//! Renders activity logs with event formatting

use super::super::state::DiagramState;
use super::super::utils::{format_compact_timestamp, get_source_color};
use crate::events::EventType;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

pub fn render_activity_panel(f: &mut Frame, area: Rect, state: &DiagramState) {
    // Account for the top/bottom borders
    let max_logs = (area.height.saturating_sub(2)) as usize;
    let log_count = max_logs.max(1);

    let log_lines: Vec<Line> = state
        .activity_logs
        .iter()
        .filter(|event| event.should_display())
        .rev()
        .take(log_count)
        .map(|event| {
            let status_icon = match event.event_type {
                EventType::Success => "✓",
                EventType::Selection => "★",
                EventType::Dismissal => "×",
                EventType::Navigation => "›",
            };

            Line::from(vec![
                Span::raw(format!("{} ", status_icon)),
                Span::styled(
                    format!("{} ", format_compact_timestamp(&event.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    event.msg.clone(),
                    Style::default().fg(get_source_color(&event.source)),
                ),
            ])
        })
        .collect();

    let paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("Sin actividad")])
    } else {
        Paragraph::new(log_lines)
    };

    let block = Block::default()
        .title("ACTIVIDAD")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(paragraph.block(block).wrap(Wrap { trim: true }), area);
}
