//! Diagram main renderer

use super::components::{activity, chart, footer, guide, header, legend, tooltip};
use super::layout::DiagramLayout;
use super::state::DiagramState;
use crate::catalog::Catalog;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_diagram(f: &mut Frame, catalog: &Catalog, state: &DiagramState, detail_open: bool) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let layout = DiagramLayout::new(f.area());

    header::render_header(f, layout.header, catalog);
    chart::render_chart(f, &layout, catalog, state);
    legend::render_legend(f, layout.legend);
    activity::render_activity_panel(f, layout.activity, state);
    guide::render_guide(f, layout.guide);
    footer::render_footer(f, layout.footer, detail_open);

    if let Some(star) = state
        .hover()
        .and_then(|hover| catalog.get_index(hover.index))
    {
        if let Some(anchor) = layout.plot.cell_for(star) {
            tooltip::render_tooltip(f, star, anchor, f.area());
        }
    }
}
