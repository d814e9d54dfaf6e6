//! Star detail overlay
//!
//! Mounted only while a star is selected.

pub mod layout;
pub mod renderer;
pub mod sheet;

pub use layout::{ClickTarget, DetailLayout};
pub use renderer::render_detail;
pub use sheet::DetailSheet;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Calls `on_close` when a left click lands on the close button or on the
/// overlay. Clicks inside the panel and every other pointer event are
/// ignored.
pub fn handle_mouse<F>(area: Rect, mouse: MouseEvent, on_close: F)
where
    F: FnOnce(ClickTarget),
{
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let target = DetailLayout::new(area).target(Position::new(mouse.column, mouse.row));
    if target.dismisses() {
        on_close(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn click(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_only_dismissing_clicks_close() {
        let area = Rect::new(0, 0, 120, 40);
        let left = MouseEventKind::Down(MouseButton::Left);

        let mut closed = Vec::new();
        handle_mouse(area, click(left, 60, 20), |t| closed.push(t));
        handle_mouse(area, click(MouseEventKind::Moved, 2, 2), |t| closed.push(t));
        handle_mouse(area, click(MouseEventKind::Up(MouseButton::Left), 2, 2), |t| {
            closed.push(t)
        });
        assert!(closed.is_empty());

        handle_mouse(area, click(left, 2, 2), |t| closed.push(t));
        handle_mouse(area, click(left, 99, 5), |t| closed.push(t));
        assert_eq!(closed, vec![ClickTarget::Overlay, ClickTarget::CloseButton]);
    }
}
