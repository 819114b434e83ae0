//! Browse by category

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{render_details, render_example_list, split_body};
use crate::catalog::Catalog;
use crate::cli::output::NO_CATEGORY_MATCHES;
use crate::cli::tui::finder::state::{CategoryState, CATEGORY_CHOICES};
use crate::cli::tui::finder::theme::Theme;

pub const HELP: &[(&str, &str)] = &[("←→", "Category"), ("↑↓", "Move"), ("Enter", "Select")];

pub fn render(frame: &mut Frame, area: Rect, state: &CategoryState, catalog: &Catalog, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let spans: Vec<Span> = CATEGORY_CHOICES
        .iter()
        .enumerate()
        .flat_map(|(i, choice)| {
            let style = if i == state.choice_index {
                theme.active_chip
            } else {
                theme.muted
            };
            [Span::styled(format!(" {} ", choice.label()), style), Span::raw(" ")]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title(" Select Category ")),
        chunks[0],
    );

    let visible = state.browser.visible(catalog);
    let (list_area, detail_area) = split_body(chunks[1]);
    render_example_list(
        frame,
        list_area,
        format!(" {} ", state.browser.selection().label()),
        &visible,
        Some(state.selected_index),
        NO_CATEGORY_MATCHES,
        theme,
    );
    render_details(frame, detail_area, state.highlighted(catalog), theme);
}
