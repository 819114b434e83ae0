use std::time::{Duration, Instant};

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    DefaultTerminal, Frame,
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::events::AppEvent;
use super::state::*;
use super::theme::Theme;
use crate::catalog::Catalog;
use crate::cli::commands::FinderContext;
use crate::quiz::QuizTransition;
use crate::session::FinderMode;
use crate::Result;

const TICK: Duration = Duration::from_millis(50);

/// Main application struct
pub struct App {
    context: FinderContext,
    state: FinderState,
    should_quit: bool,
    theme: Theme,
    /// Last time Ctrl+C was pressed
    last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new app instance, opening in the configured mode
    pub fn new(context: FinderContext) -> Self {
        let config = &context.config.config;
        let state = FinderState::new(config.default_mode, config.default_sort);
        Self {
            context,
            state,
            should_quit: false,
            theme: Theme::default(),
            last_ctrl_c: None,
        }
    }

    pub fn state(&self) -> &FinderState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        self.context.catalog()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application
    pub async fn run(mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
        let input = tokio::task::spawn_blocking(move || read_input(event_tx));

        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Closing the receiver stops the reader
        drop(event_rx);
        ratatui::restore();
        if let Err(e) = input.await {
            tracing::debug!("input reader ended abnormally: {}", e);
        }
        result
    }

    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            match time::timeout(TICK, event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event)?,
                Ok(None) => break,
                Err(_) => self.handle_event(AppEvent::Tick)?,
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        super::screens::render(frame, &self.state, self.context.catalog(), &self.theme);
    }

    /// Handle an event
    pub fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        let AppEvent::Key(key) = event else {
            return Ok(());
        };

        if let Some(transition) = self.handle_global_key(key) {
            self.apply(transition);
            return Ok(());
        }

        let catalog = self.context.catalog();
        let transition = match self.state.mode {
            FinderMode::Simple => Self::handle_simple_key(&mut self.state.simple, catalog, key),
            FinderMode::Quiz => Self::handle_quiz_key(&mut self.state.quiz, catalog, key)?,
            FinderMode::Category => Self::handle_category_key(&mut self.state.category, catalog, key),
            FinderMode::Gallery => Self::handle_gallery_key(&mut self.state.gallery, catalog, key),
            FinderMode::Paths => Self::handle_paths_key(&mut self.state.paths, key),
        };

        if let Some(transition) = transition {
            self.apply(transition);
        }
        Ok(())
    }

    fn apply(&mut self, transition: StateTransition) {
        match transition {
            StateTransition::NextMode => self.state.mode = self.state.mode.next(),
            StateTransition::PreviousMode => self.state.mode = self.state.mode.previous(),
            StateTransition::Quit => self.should_quit = true,
        }
        tracing::trace!(mode = %self.state.mode, "finder transition");
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Option<StateTransition> {
        match key.code {
            KeyCode::Esc => Some(StateTransition::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                // Double Ctrl+C within a second exits
                let now = Instant::now();
                if let Some(last) = self.last_ctrl_c {
                    if now.duration_since(last).as_millis() < 1000 {
                        return Some(StateTransition::Quit);
                    }
                }
                self.last_ctrl_c = Some(now);
                None
            }
            KeyCode::Tab => Some(StateTransition::NextMode),
            KeyCode::BackTab => Some(StateTransition::PreviousMode),
            KeyCode::Char('q') | KeyCode::Char('Q') if !self.state.is_typing() => {
                Some(StateTransition::Quit)
            }
            _ => None,
        }
    }

    fn handle_simple_key(
        state: &mut SimpleState,
        catalog: &Catalog,
        key: KeyEvent,
    ) -> Option<StateTransition> {
        match state.focus {
            SimpleFocus::Search => match key.code {
                KeyCode::Down => state.focus = SimpleFocus::Results,
                KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    state.focus = SimpleFocus::Filters
                }
                _ => {
                    state.search_input.handle_event(&Event::Key(key));
                    state.sync_query();
                }
            },
            SimpleFocus::Filters => match key.code {
                KeyCode::Left => state.filters.previous_chip(),
                KeyCode::Right => state.filters.next_chip(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    state.filters.toggle_current();
                    state.selected_index = 0;
                }
                KeyCode::Char('c') => {
                    state.filters.session.clear();
                    state.search_input = Input::default();
                    state.selected_index = 0;
                }
                KeyCode::Up | KeyCode::Char('/') => state.focus = SimpleFocus::Search,
                KeyCode::Down => state.focus = SimpleFocus::Results,
                _ => {}
            },
            SimpleFocus::Results => match key.code {
                KeyCode::Up if state.selected_index == 0 => state.focus = SimpleFocus::Search,
                KeyCode::Up => state.selected_index -= 1,
                KeyCode::Down => {
                    let count = state.results(catalog).len();
                    if state.selected_index + 1 < count {
                        state.selected_index += 1;
                    }
                }
                KeyCode::Char('f') => state.focus = SimpleFocus::Filters,
                KeyCode::Char('/') => state.focus = SimpleFocus::Search,
                _ => {}
            },
        }
        None
    }

    fn handle_gallery_key(
        state: &mut GalleryState,
        catalog: &Catalog,
        key: KeyEvent,
    ) -> Option<StateTransition> {
        match key.code {
            KeyCode::Left => state.filters.previous_chip(),
            KeyCode::Right => state.filters.next_chip(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                state.filters.toggle_current();
                state.selected_index = 0;
            }
            KeyCode::Char('s') => state.cycle_sort(),
            KeyCode::Char('c') => {
                state.filters.session.clear();
                state.selected_index = 0;
            }
            KeyCode::Up => state.selected_index = state.selected_index.saturating_sub(1),
            KeyCode::Down => {
                if state.selected_index + 1 < state.results(catalog).len() {
                    state.selected_index += 1;
                }
            }
            _ => {}
        }
        None
    }

    fn handle_category_key(
        state: &mut CategoryState,
        catalog: &Catalog,
        key: KeyEvent,
    ) -> Option<StateTransition> {
        match key.code {
            KeyCode::Left => state.previous_category(),
            KeyCode::Right => state.next_category(),
            KeyCode::Up => state.selected_index = state.selected_index.saturating_sub(1),
            KeyCode::Down => {
                if state.selected_index + 1 < state.browser.visible(catalog).len() {
                    state.selected_index += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => state.select_current(catalog),
            _ => {}
        }
        None
    }

    fn handle_quiz_key(
        state: &mut QuizScreenState,
        catalog: &Catalog,
        key: KeyEvent,
    ) -> Result<Option<StateTransition>> {
        if key.code == KeyCode::Char('r') {
            state.reset();
            return Ok(None);
        }

        if state.quiz.is_completed() {
            match key.code {
                KeyCode::Up => state.selected_index = state.selected_index.saturating_sub(1),
                KeyCode::Down => {
                    if state.selected_index + 1 < state.recommendations(catalog).len() {
                        state.selected_index += 1;
                    }
                }
                _ => {}
            }
            return Ok(None);
        }

        match key.code {
            KeyCode::Up => state.option_index = state.option_index.saturating_sub(1),
            KeyCode::Down => {
                if state.option_index + 1 < state.option_count() {
                    state.option_index += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => state.quiz.select_option(state.option_index)?,
            KeyCode::Right | KeyCode::Char('n') => {
                if let QuizTransition::Advanced(_) | QuizTransition::Completed = state.quiz.next() {
                    Self::sync_option_cursor(state);
                }
            }
            KeyCode::Left | KeyCode::Char('p') => {
                if state.quiz.previous() {
                    Self::sync_option_cursor(state);
                }
            }
            _ => {}
        }
        Ok(None)
    }

    /// Point the option cursor at the current question's answer
    fn sync_option_cursor(state: &mut QuizScreenState) {
        state.selected_index = 0;
        state.option_index = state
            .quiz
            .current_question()
            .and_then(|question| {
                let answer = state.quiz.answer_for(question)?;
                question.options().iter().position(|o| o.answer == answer)
            })
            .unwrap_or(0);
    }

    fn handle_paths_key(state: &mut PathsState, key: KeyEvent) -> Option<StateTransition> {
        match key.code {
            KeyCode::Left => state.previous_path(),
            KeyCode::Right => state.next_path(),
            KeyCode::Up => state.step_index = state.step_index.saturating_sub(1),
            KeyCode::Down => {
                if state.step_index + 1 < state.path().steps.len() {
                    state.step_index += 1;
                }
            }
            _ => {}
        }
        None
    }
}

/// Forward key and resize events until the receiver goes away
fn read_input(tx: UnboundedSender<AppEvent>) {
    while !tx.is_closed() {
        match event::poll(TICK) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                tracing::warn!("terminal input error: {}", e);
                break;
            }
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                let _ = tx.send(AppEvent::Key(key));
            }
            Ok(Event::Resize(width, height)) => {
                let _ = tx.send(AppEvent::Resize(width, height));
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("terminal input error: {}", e);
                break;
            }
        }
    }
}
