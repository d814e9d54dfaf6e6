//! Detail overlay geometry

use crate::consts::cli_consts::detail::{ICON_UNITS_PER_COLUMN, MAX_PANEL_HEIGHT, MAX_PANEL_WIDTH};
use ratatui::layout::{Position, Rect};

/// Width of the `[×]` button.
const CLOSE_BUTTON_WIDTH: u16 = 3;

/// What a click on the detail screen landed on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    CloseButton,
    /// Anywhere inside the panel other than the close button.
    Content,
    /// The dimmed background around the panel.
    Overlay,
}

impl ClickTarget {
    pub fn dismisses(&self) -> bool {
        !matches!(self, ClickTarget::Content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailLayout {
    pub overlay: Rect,
    pub panel: Rect,
    pub close_button: Rect,
}

impl DetailLayout {
    pub fn new(area: Rect) -> Self {
        let width = area.width.min(MAX_PANEL_WIDTH);
        let height = area.height.min(MAX_PANEL_HEIGHT);
        let panel = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );
        // Sits on the top border, one cell in from the corner.
        let close_button = Rect::new(
            panel.right().saturating_sub(CLOSE_BUTTON_WIDTH + 1).max(panel.x),
            panel.y,
            CLOSE_BUTTON_WIDTH.min(panel.width),
            panel.height.min(1),
        );
        Self {
            overlay: area,
            panel,
            close_button,
        }
    }

    pub fn target(&self, pos: Position) -> ClickTarget {
        if self.close_button.contains(pos) {
            ClickTarget::CloseButton
        } else if self.panel.contains(pos) {
            ClickTarget::Content
        } else {
            ClickTarget::Overlay
        }
    }
}

/// Cell size `(columns, rows)` of the star icon for an icon size in
/// display units. Cells are about twice as tall as wide.
pub fn icon_cells(icon_size: f64) -> (u16, u16) {
    let columns = (icon_size / ICON_UNITS_PER_COLUMN).round().max(1.0) as u16;
    (columns, columns.div_ceil(2))
}
