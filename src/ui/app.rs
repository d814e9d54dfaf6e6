//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::catalog::{Catalog, StarId};
use crate::consts::cli_consts::timing::{poll_interval, splash_duration};
use crate::events::{Event as ActivityEvent, EventType};
use crate::logging::LogLevel;
use crate::ui::detail::{self, ClickTarget, render_detail};
use crate::ui::diagram::{DiagramLayout, DiagramState, render_diagram};
use crate::ui::selection::Selection;
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent};
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The HR diagram, with the detail overlay on top while a star is selected.
    Diagram,
}

/// Whether the UI loop should keep running after an event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppControl {
    Continue,
    Quit,
}

/// How the detail view was dismissed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Dismissal {
    Click(ClickTarget),
    Escape,
}

impl Dismissal {
    fn describe(&self) -> &'static str {
        match self {
            Dismissal::Click(ClickTarget::CloseButton) => "botón cerrar",
            Dismissal::Click(_) => "clic fuera del panel",
            Dismissal::Escape => "tecla Esc",
        }
    }
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for the splash timeout.
    start_time: Instant,

    /// The read-only star catalog.
    catalog: Catalog,

    /// The star whose detail view is open, if any.
    selection: Selection,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Hover, focus and activity log of the diagram.
    diagram: DiagramState,

    /// Terminal area of the last frame, used to map pointer events.
    viewport: Rect,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(catalog: Catalog, ui_config: UIConfig) -> Self {
        let mut diagram = DiagramState::new(ui_config.with_background_color);
        diagram.add_to_activity_log(ActivityEvent::catalog_with_level(
            format!("Catálogo cargado: {} estrellas", catalog.len()),
            EventType::Success,
            LogLevel::Info,
        ));
        Self {
            start_time: Instant::now(),
            catalog,
            selection: Selection::None,
            current_screen: Screen::Splash,
            diagram,
            viewport: Rect::default(),
        }
    }

    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// Advances time-based transitions.
    pub fn tick(&mut self) {
        if self.current_screen == Screen::Splash && self.start_time.elapsed() >= splash_duration() {
            self.current_screen = Screen::Diagram;
        }
    }

    /// Opens the detail view for `id`, replacing any open one.
    pub fn select(&mut self, id: StarId) {
        let Some(star) = self.catalog.get(&id) else {
            return;
        };
        let msg = format!("Seleccionada: {}", star.name);
        log::info!("{}", msg);
        self.diagram.add_to_activity_log(ActivityEvent::diagram_with_level(
            msg,
            EventType::Selection,
            LogLevel::Info,
        ));
        self.diagram.clear_hover();
        self.selection.select(id);
    }

    fn close_detail(&mut self, how: Dismissal) {
        if let Some(star) = self.selection.resolve(&self.catalog) {
            let msg = format!("Detalle de {} cerrado ({})", star.name, how.describe());
            log::info!("{}", msg);
            self.diagram.add_to_activity_log(ActivityEvent::detail_with_level(
                msg,
                EventType::Dismissal,
                LogLevel::Info,
            ));
        }
        self.selection.clear();
    }

    pub fn handle_event(&mut self, event: Event) -> AppControl {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                AppControl::Continue
            }
            Event::Resize(width, height) => {
                self.viewport = Rect::new(0, 0, width, height);
                AppControl::Continue
            }
            _ => AppControl::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> AppControl {
        // Skip events that are not KeyEventKind::Press
        if key.kind == KeyEventKind::Release {
            return AppControl::Continue;
        }
        if key.code == KeyCode::Char('q') {
            return AppControl::Quit;
        }

        match self.current_screen {
            Screen::Splash => {
                if key.code == KeyCode::Esc {
                    return AppControl::Quit;
                }
                // Any other key skips the splash screen
                self.current_screen = Screen::Diagram;
            }
            Screen::Diagram if self.selection.is_active() => {
                if key.code == KeyCode::Esc {
                    self.close_detail(Dismissal::Escape);
                }
            }
            Screen::Diagram => match key.code {
                KeyCode::Esc => return AppControl::Quit,
                KeyCode::Tab | KeyCode::Right => {
                    let focused = self.diagram.focus_next(&self.catalog);
                    self.log_focus(focused);
                }
                KeyCode::BackTab | KeyCode::Left => {
                    let focused = self.diagram.focus_prev(&self.catalog);
                    self.log_focus(focused);
                }
                KeyCode::Enter => {
                    if let Some(id) = self
                        .diagram
                        .hover()
                        .and_then(|hover| self.catalog.get_index(hover.index))
                        .map(|star| star.id.clone())
                    {
                        self.select(id);
                    }
                }
                _ => {}
            },
        }
        AppControl::Continue
    }

    fn log_focus(&mut self, focused: Option<usize>) {
        if let Some(star) = focused.and_then(|index| self.catalog.get_index(index)) {
            log::debug!("Focus moved to {}", star.id);
            self.diagram.add_to_activity_log(ActivityEvent::diagram_with_level(
                format!("Foco: {}", star.name),
                EventType::Navigation,
                LogLevel::Debug,
            ));
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.current_screen != Screen::Diagram {
            return;
        }

        if self.selection.is_active() {
            let mut dismissed = None;
            detail::handle_mouse(self.viewport, mouse, |target| dismissed = Some(target));
            if let Some(target) = dismissed {
                self.close_detail(Dismissal::Click(target));
            }
            return;
        }

        let layout = DiagramLayout::new(self.viewport);
        let mut picked = None;
        self.diagram
            .handle_mouse(&self.catalog, &layout.plot, mouse, |star| {
                picked = Some(star.id.clone())
            });
        if let Some(id) = picked {
            self.select(id);
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| {
            app.set_viewport(f.area());
            render(f, &app);
        })?;

        if event::poll(poll_interval())? && app.handle_event(event::read()?) == AppControl::Quit {
            return Ok(());
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Diagram => {
            let selected = app.selection.resolve(&app.catalog);
            render_diagram(f, &app.catalog, &app.diagram, selected.is_some());
            if let Some(star) = selected {
                render_detail(f, star);
            }
        }
    }
}
