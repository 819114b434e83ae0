//! Visual gallery: filter chips, sort order, every matching example

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use super::{render_chips, render_details, render_example_list, split_body};
use crate::catalog::Catalog;
use crate::cli::output::{count_line, NO_MATCHES};
use crate::cli::tui::finder::state::GalleryState;
use crate::cli::tui::finder::theme::Theme;

pub const HELP: &[(&str, &str)] = &[
    ("←→", "Filter"),
    ("Space", "Toggle"),
    ("s", "Sort"),
    ("c", "Clear"),
    ("↑↓", "Move"),
];

pub fn render(frame: &mut Frame, area: Rect, state: &GalleryState, catalog: &Catalog, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let sort = state.filters.session.sort_option();
    render_chips(
        frame,
        chunks[0],
        &state.filters,
        format!(" Filters • Sort by {} ", sort.label()),
        true,
        theme,
    );

    let results = state.results(catalog);
    let (list_area, detail_area) = split_body(chunks[1]);
    render_example_list(
        frame,
        list_area,
        format!(" {} ", count_line(results.len())),
        &results,
        Some(state.selected_index),
        NO_MATCHES,
        theme,
    );
    render_details(frame, detail_area, state.highlighted(catalog), theme);
}
