//! Simple search: text box, optional filter chips, result list

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{render_chips, render_details, render_example_list, split_body};
use crate::catalog::Catalog;
use crate::cli::output::NO_MATCHES;
use crate::cli::tui::finder::state::{SimpleFocus, SimpleState};
use crate::cli::tui::finder::theme::Theme;

pub const HELP: &[(&str, &str)] = &[
    ("Type", "Search"),
    ("↑↓", "Move"),
    ("Ctrl+F", "Filters"),
    ("Space", "Toggle filter"),
    ("c", "Clear"),
];

pub fn render(frame: &mut Frame, area: Rect, state: &SimpleState, catalog: &Catalog, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Length(3), // Filter chips
            Constraint::Min(5),    // Results
        ])
        .split(area);

    render_search_box(frame, chunks[0], state, theme);

    let session = &state.filters.session;
    let chip_title = if session.has_active_filters() {
        " Filters (c to clear) ".to_string()
    } else {
        " Filters ".to_string()
    };
    render_chips(
        frame,
        chunks[1],
        &state.filters,
        chip_title,
        state.focus == SimpleFocus::Filters,
        theme,
    );

    let results = state.results(catalog);
    let (list_area, detail_area) = split_body(chunks[2]);
    let selected = (state.focus == SimpleFocus::Results).then_some(state.selected_index);
    render_example_list(
        frame,
        list_area,
        format!(" Results ({}) ", results.len()),
        &results,
        selected,
        NO_MATCHES,
        theme,
    );
    render_details(frame, detail_area, state.highlighted(catalog), theme);
}

fn render_search_box(frame: &mut Frame, area: Rect, state: &SimpleState, theme: &Theme) {
    let focused = state.focus == SimpleFocus::Search;
    let mut spans = vec![Span::raw(state.search_input.value().to_string())];
    if focused {
        spans.push(Span::styled("█", theme.focused));
    } else if state.search_input.value().is_empty() {
        spans.push(Span::styled(
            "Search examples by keyword, technology, or use case...",
            theme.muted,
        ));
    }

    let block = Block::default().borders(Borders::ALL).title(" Search ");
    let block = if focused {
        block.border_style(theme.focused)
    } else {
        block
    };
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
