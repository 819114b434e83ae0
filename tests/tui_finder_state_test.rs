use example_finder::catalog::{Category, Difficulty};
use example_finder::cli::commands::FinderContext;
use example_finder::cli::tui::finder::app::App;
use example_finder::cli::tui::finder::events::AppEvent;
use example_finder::cli::tui::finder::state::{FilterChip, SimpleFocus};
use example_finder::quiz::Question;
use example_finder::session::FinderMode;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn press(app: &mut App, code: KeyCode) {
    app.handle_event(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .unwrap();
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn test_tab_cycles_modes() {
    let mut app = App::new(FinderContext::builtin());
    assert_eq!(app.state().mode, FinderMode::Simple);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().mode, FinderMode::Quiz);
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.state().mode, FinderMode::Paths);
}

#[test]
fn test_typing_updates_search() {
    let mut app = App::new(FinderContext::builtin());
    type_text(&mut app, "quiz");
    assert!(!app.should_quit());
    assert_eq!(app.state().simple.search_input.value(), "quiz");
    assert_eq!(
        app.state().simple.filters.session.filters().query.as_deref(),
        Some("quiz")
    );
}

#[test]
fn test_simple_filter_chips() {
    let mut app = App::new(FinderContext::builtin());
    app.handle_event(AppEvent::Key(KeyEvent::new(
        KeyCode::Char('f'),
        KeyModifiers::CONTROL,
    )))
    .unwrap();
    assert_eq!(app.state().simple.focus, SimpleFocus::Filters);

    press(&mut app, KeyCode::Right);
    assert_eq!(
        app.state().simple.filters.current_chip(),
        FilterChip::Category(Category::Defi)
    );
    press(&mut app, KeyCode::Char(' '));
    let results = app.state().simple.results(app.catalog());
    assert!(results.iter().all(|e| e.has_category(Category::Defi)));

    press(&mut app, KeyCode::Char('c'));
    assert!(!app.state().simple.filters.session.has_active_filters());
}

#[test]
fn test_quiz_mode_walkthrough() {
    let mut app = App::new(FinderContext::builtin());
    press(&mut app, KeyCode::Tab);

    // Blocked without an answer
    press(&mut app, KeyCode::Right);
    assert_eq!(app.state().quiz.quiz.current_question(), Some(Question::Experience));

    for _ in 0..4 {
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Right);
    }
    assert!(app.state().quiz.quiz.is_completed());
    let recommendations = app.state().quiz.recommendations(app.catalog());
    assert!(recommendations.len() <= 3);
    assert!(recommendations.iter().all(|e| e.difficulty == Difficulty::Beginner));

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.state().quiz.quiz.current_step(), 0);
    assert!(!app.state().quiz.quiz.is_completed());
}

#[test]
fn test_category_mode_selection() {
    let mut app = App::new(FinderContext::builtin());
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().mode, FinderMode::Category);

    press(&mut app, KeyCode::Left);
    assert_eq!(app.state().category.browser.visible(app.catalog()).len(), 1);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().category.browser.selected_id(), Some("keyless"));
}

#[test]
fn test_q_quits_outside_search() {
    let mut app = App::new(FinderContext::builtin());
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_escape_quits() {
    let mut app = App::new(FinderContext::builtin());
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());
}
