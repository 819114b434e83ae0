//! Quiz finder: four questions, then recommendations

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{render_details, render_example_list, split_body};
use crate::catalog::Catalog;
use crate::cli::output::NO_RECOMMENDATIONS;
use crate::cli::tui::finder::state::QuizScreenState;
use crate::cli::tui::finder::theme::Theme;
use crate::quiz::Question;

pub const HELP: &[(&str, &str)] = &[
    ("↑↓", "Option"),
    ("Enter", "Choose"),
    ("→", "Next"),
    ("←", "Previous"),
    ("r", "Start over"),
];

pub fn render(frame: &mut Frame, area: Rect, state: &QuizScreenState, catalog: &Catalog, theme: &Theme) {
    match state.quiz.current_question() {
        Some(question) => render_question(frame, area, state, question, theme),
        None => render_results(frame, area, state, catalog, theme),
    }
}

fn render_question(
    frame: &mut Frame,
    area: Rect,
    state: &QuizScreenState,
    question: Question,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress
            Constraint::Length(3), // Question
            Constraint::Min(5),    // Options
            Constraint::Length(1), // Status
        ])
        .split(area);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Question {} of {} ",
            state.quiz.current_step() + 1,
            Question::COUNT
        )))
        .gauge_style(theme.highlight)
        .percent(state.quiz.progress_percent());
    frame.render_widget(gauge, chunks[0]);

    frame.render_widget(
        Paragraph::new(Span::styled(question.prompt(), theme.highlight))
            .block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );

    let chosen = state.quiz.answer_for(question);
    let items: Vec<ListItem> = question
        .options()
        .iter()
        .map(|option| {
            let marker = if Some(option.answer) == chosen { "(•) " } else { "( ) " };
            ListItem::new(Line::from(vec![Span::raw(marker), Span::raw(option.label)]))
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(theme.selected);
    let mut list_state = ListState::default().with_selected(Some(state.option_index));
    frame.render_stateful_widget(list, chunks[2], &mut list_state);

    let status = if state.quiz.can_advance() {
        Span::styled(" Press → to continue", theme.muted)
    } else {
        Span::styled(" Choose an option to continue", theme.muted)
    };
    frame.render_widget(Paragraph::new(status), chunks[3]);
}

fn render_results(
    frame: &mut Frame,
    area: Rect,
    state: &QuizScreenState,
    catalog: &Catalog,
    theme: &Theme,
) {
    let recommendations = state.recommendations(catalog);
    let (list_area, detail_area) = split_body(area);
    render_example_list(
        frame,
        list_area,
        " Your Recommended Examples ".to_string(),
        &recommendations,
        Some(state.selected_index),
        NO_RECOMMENDATIONS,
        theme,
    );
    render_details(frame, detail_area, state.highlighted(catalog), theme);
}
