//! Learning paths

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{render_details, split_body};
use crate::catalog::Catalog;
use crate::cli::tui::finder::state::PathsState;
use crate::cli::tui::finder::theme::Theme;
use crate::paths::PathKind;

pub const HELP: &[(&str, &str)] = &[("←→", "Path"), ("↑↓", "Step")];

pub fn render(frame: &mut Frame, area: Rect, state: &PathsState, catalog: &Catalog, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(6)])
        .split(area);

    let tabs: Vec<Span> = PathKind::ALL
        .iter()
        .flat_map(|kind| {
            let style = if *kind == state.kind {
                theme.active_chip
            } else {
                theme.muted
            };
            [Span::styled(format!(" {} ", kind.label()), style), Span::raw(" ")]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(tabs))
            .block(Block::default().borders(Borders::ALL).title(" Choose a path ")),
        chunks[0],
    );

    let path = state.path();
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(path.title, theme.highlight),
            Span::raw("  "),
            Span::raw(path.description),
        ]))
        .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let (list_area, detail_area) = split_body(chunks[2]);
    let items: Vec<ListItem> = path
        .resolve(catalog)
        .into_iter()
        .map(|(step, example)| {
            ListItem::new(vec![
                Line::from(Span::styled(step.title, theme.focused)),
                Line::from(format!("  {}", step.description)),
                Line::from(Span::styled(format!("  {}", example.title), theme.muted)),
            ])
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Steps "))
        .highlight_style(theme.selected);
    let mut list_state = ListState::default().with_selected(Some(state.step_index));
    frame.render_stateful_widget(list, list_area, &mut list_state);

    let example = state.highlighted(catalog);
    render_details(frame, detail_area, Some(&example), theme);
}
