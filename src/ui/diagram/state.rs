//! Diagram state management
//!
//! Transient view state of the scatter plot: which point is hovered or
//! focused, plus the activity log shown beside it.

use super::layout::PlotGeometry;
use crate::catalog::{Catalog, StarRecord};
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use std::collections::VecDeque;

/// How a point came to be highlighted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HoverOrigin {
    Pointer,
    Keyboard,
}

/// The star whose tooltip is showing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Hover {
    /// Index into the catalog.
    pub index: usize,
    pub origin: HoverOrigin,
}

#[derive(Debug)]
pub struct DiagramState {
    /// Whether to paint the dark background.
    pub with_background_color: bool,
    /// Activity logs for display (last 50 events)
    pub activity_logs: VecDeque<Event>,

    hover: Option<Hover>,
}

impl DiagramState {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
            activity_logs: VecDeque::new(),
            hover: None,
        }
    }

    pub fn hover(&self) -> Option<Hover> {
        self.hover
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Moves the keyboard focus to the next star in catalog order.
    pub fn focus_next(&mut self, catalog: &Catalog) -> Option<usize> {
        if catalog.is_empty() {
            return None;
        }
        let index = match self.hover {
            Some(hover) => (hover.index + 1) % catalog.len(),
            None => 0,
        };
        self.hover = Some(Hover {
            index,
            origin: HoverOrigin::Keyboard,
        });
        Some(index)
    }

    /// Moves the keyboard focus to the previous star in catalog order.
    pub fn focus_prev(&mut self, catalog: &Catalog) -> Option<usize> {
        if catalog.is_empty() {
            return None;
        }
        let index = match self.hover {
            Some(hover) => (hover.index + catalog.len() - 1) % catalog.len(),
            None => catalog.len() - 1,
        };
        self.hover = Some(Hover {
            index,
            origin: HoverOrigin::Keyboard,
        });
        Some(index)
    }

    /// Handles a pointer event over the plot.
    ///
    /// Motion updates the hover; a left-button press on a point calls
    /// `on_select` exactly once with that star. Everything else is ignored.
    pub fn handle_mouse<F>(
        &mut self,
        catalog: &Catalog,
        plot: &PlotGeometry,
        mouse: MouseEvent,
        mut on_select: F,
    ) where
        F: FnMut(&StarRecord),
    {
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                self.hover = plot.hit_test(catalog, pos).map(|index| Hover {
                    index,
                    origin: HoverOrigin::Pointer,
                });
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(star) = plot
                    .hit_test(catalog, pos)
                    .and_then(|index| catalog.get_index(index))
                {
                    on_select(star);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StarId;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn mouse(kind: MouseEventKind, pos: Position) -> MouseEvent {
        MouseEvent {
            kind,
            column: pos.x,
            row: pos.y,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn setup() -> (Catalog, PlotGeometry, Position) {
        let catalog = Catalog::builtin().unwrap();
        let plot = PlotGeometry::new(Rect::new(5, 3, 80, 24));
        let rigel = plot.cell_for(catalog.get(&StarId::new("rigel")).unwrap()).unwrap();
        (catalog, plot, rigel)
    }

    #[test]
    fn test_click_selects_exactly_once() {
        let (catalog, plot, rigel) = setup();
        let mut state = DiagramState::new(true);
        let mut selected = Vec::new();

        state.handle_mouse(
            &catalog,
            &plot,
            mouse(MouseEventKind::Down(MouseButton::Left), rigel),
            |star| selected.push(star.id.clone()),
        );
        // Release and drag never select.
        state.handle_mouse(
            &catalog,
            &plot,
            mouse(MouseEventKind::Up(MouseButton::Left), rigel),
            |star| selected.push(star.id.clone()),
        );
        state.handle_mouse(
            &catalog,
            &plot,
            mouse(MouseEventKind::Drag(MouseButton::Left), rigel),
            |star| selected.push(star.id.clone()),
        );
        assert_eq!(selected, vec![StarId::new("rigel")]);
    }

    #[test]
    fn test_click_on_empty_space_selects_nothing() {
        let (catalog, plot, _) = setup();
        let mut state = DiagramState::new(true);
        let mut calls = 0;
        let corner = Position::new(plot.area.right() - 1, plot.area.y);
        state.handle_mouse(
            &catalog,
            &plot,
            mouse(MouseEventKind::Down(MouseButton::Left), corner),
            |_| calls += 1,
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_hover_does_not_persist_after_pointer_leaves() {
        let (catalog, plot, rigel) = setup();
        let mut state = DiagramState::new(true);

        state.handle_mouse(&catalog, &plot, mouse(MouseEventKind::Moved, rigel), |_| {});
        let hover = state.hover().unwrap();
        assert_eq!(catalog.stars()[hover.index].name, "Rigel");
        assert_eq!(hover.origin, HoverOrigin::Pointer);

        let corner = Position::new(plot.area.right() - 1, plot.area.y);
        state.handle_mouse(&catalog, &plot, mouse(MouseEventKind::Moved, corner), |_| {});
        assert_eq!(state.hover(), None);
    }

    #[test]
    fn test_keyboard_focus_wraps() {
        let catalog = Catalog::builtin().unwrap();
        let mut state = DiagramState::new(true);
        assert_eq!(state.focus_next(&catalog), Some(0));
        assert_eq!(state.focus_prev(&catalog), Some(catalog.len() - 1));
        assert_eq!(state.focus_next(&catalog), Some(0));
        assert_eq!(state.hover().unwrap().origin, HoverOrigin::Keyboard);

        let empty = Catalog::default();
        let mut state = DiagramState::new(true);
        assert_eq!(state.focus_next(&empty), None);
        assert_eq!(state.focus_prev(&empty), None);
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut state = DiagramState::new(true);
        for i in 0..(MAX_ACTIVITY_LOGS + 5) {
            state.add_to_activity_log(Event::diagram_with_level(
                format!("event {}", i),
                crate::events::EventType::Navigation,
                crate::logging::LogLevel::Debug,
            ));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs.front().unwrap().msg, "event 5");
    }
}
