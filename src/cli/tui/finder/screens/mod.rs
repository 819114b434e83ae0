//! Screen modules for the finder, one per mode

pub mod category;
pub mod gallery;
pub mod paths;
pub mod quiz;
pub mod simple;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use super::state::{FilterChip, FilterPanel, FinderState};
use super::theme::Theme;
use crate::catalog::{Catalog, Example};
use crate::session::FinderMode;

/// Render the whole finder: mode tabs, the active mode, help bar
pub fn render(frame: &mut Frame, state: &FinderState, catalog: &Catalog, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Mode tabs
            Constraint::Min(10),   // Mode body
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    render_tabs(frame, chunks[0], state.mode, theme);

    let help: &[(&str, &str)] = match state.mode {
        FinderMode::Simple => {
            simple::render(frame, chunks[1], &state.simple, catalog, theme);
            simple::HELP
        }
        FinderMode::Quiz => {
            quiz::render(frame, chunks[1], &state.quiz, catalog, theme);
            quiz::HELP
        }
        FinderMode::Category => {
            category::render(frame, chunks[1], &state.category, catalog, theme);
            category::HELP
        }
        FinderMode::Gallery => {
            gallery::render(frame, chunks[1], &state.gallery, catalog, theme);
            gallery::HELP
        }
        FinderMode::Paths => {
            paths::render(frame, chunks[1], &state.paths, catalog, theme);
            paths::HELP
        }
    };

    render_help(frame, chunks[2], help, theme);
}

fn render_tabs(frame: &mut Frame, area: Rect, mode: FinderMode, theme: &Theme) {
    let titles: Vec<Line> = FinderMode::ALL.iter().map(|m| Line::from(m.label())).collect();
    let tabs = Tabs::new(titles)
        .select(mode.index())
        .highlight_style(theme.focused)
        .block(Block::default().borders(Borders::ALL).title(" Find the perfect example "));
    frame.render_widget(tabs, area);
}

fn render_help(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], theme: &Theme) {
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in keys.iter().chain(GLOBAL_HELP).enumerate() {
        if i > 0 {
            spans.push(Span::styled("  •  ", theme.muted));
        }
        spans.push(Span::styled(*key, theme.help_key));
        spans.push(Span::raw(format!(" {action}")));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).style(theme.help_bar), area);
}

const GLOBAL_HELP: &[(&str, &str)] = &[("Tab", "Mode"), ("Esc", "Quit")];

/// List and detail panes side by side
pub(super) fn split_body(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Bordered list of examples with a highlighted row
pub(super) fn render_example_list(
    frame: &mut Frame,
    area: Rect,
    title: String,
    examples: &[&Example],
    selected: Option<usize>,
    empty_message: &str,
    theme: &Theme,
) {
    let block = Block::default().borders(Borders::ALL).title(title);

    if examples.is_empty() {
        let message = Paragraph::new(Span::styled(empty_message, theme.muted))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    let items: Vec<ListItem> = examples
        .iter()
        .map(|example| {
            let mut spans = vec![
                Span::raw(example.title.clone()),
                Span::raw("  "),
                Span::styled(
                    example.difficulty.label(),
                    theme.difficulty_style(example.difficulty),
                ),
            ];
            if example.is_new {
                spans.push(Span::styled("  New", theme.new_badge));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selected)
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Detail pane for one example
pub(super) fn render_details(
    frame: &mut Frame,
    area: Rect,
    example: Option<&Example>,
    theme: &Theme,
) {
    let block = Block::default().borders(Borders::ALL).title(" Details ");
    let Some(example) = example else {
        frame.render_widget(
            Paragraph::new(Span::styled("Nothing selected", theme.muted)).block(block),
            area,
        );
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(example.title.clone(), theme.highlight)),
        Line::from(example.description.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                example.difficulty.label(),
                theme.difficulty_style(example.difficulty),
            ),
            Span::raw(format!("  {}", example.categories_display())),
        ]),
    ];
    if let Some(time) = &example.estimated_time {
        lines.push(Line::from(Span::styled(format!("Time: {time}"), theme.muted)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(example.long_description.clone()));
    if !example.user_stories.is_empty() {
        lines.push(Line::from(""));
        for story in &example.user_stories {
            lines.push(Line::from(Span::styled(format!("\"{story}\""), theme.muted)));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(example.url.clone(), theme.help_key)));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

/// Row of filter chips; the cursor chip is only marked when `focused`
pub(super) fn render_chips(
    frame: &mut Frame,
    area: Rect,
    panel: &FilterPanel,
    title: String,
    focused: bool,
    theme: &Theme,
) {
    let mut spans = Vec::new();
    for (i, chip) in FilterChip::ALL.iter().enumerate() {
        let mut style = if chip.is_active(&panel.session) {
            theme.active_chip
        } else {
            theme.muted
        };
        if focused && i == panel.chip_index {
            style = style.patch(theme.focused);
        }
        spans.push(Span::styled(format!(" {} ", chip.label()), style));
        spans.push(Span::raw(" "));
    }

    let block = Block::default().borders(Borders::ALL).title(title);
    let block = if focused {
        block.border_style(theme.focused)
    } else {
        block
    };
    frame.render_widget(
        Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }).block(block),
        area,
    );
}
