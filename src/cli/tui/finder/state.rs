use tui_input::Input;

use crate::catalog::{Catalog, Category, Difficulty, Example};
use crate::paths::{LearningPath, PathKind};
use crate::query::SortOption;
use crate::quiz::QuizState;
use crate::session::{CategoryBrowser, CategorySelection, FilterSession, FinderMode};

/// Top-level state: one sub-state per mode, all kept alive while switching
#[derive(Debug, Default)]
pub struct FinderState {
    pub mode: FinderMode,
    pub simple: SimpleState,
    pub quiz: QuizScreenState,
    pub category: CategoryState,
    pub gallery: GalleryState,
    pub paths: PathsState,
}

impl FinderState {
    pub fn new(mode: FinderMode, default_sort: SortOption) -> Self {
        Self {
            mode,
            simple: SimpleState::with_sort(default_sort),
            gallery: GalleryState::with_sort(default_sort),
            ..Self::default()
        }
    }

    /// Whether typed characters belong to a text input
    pub fn is_typing(&self) -> bool {
        self.mode == FinderMode::Simple && self.simple.focus == SimpleFocus::Search
    }

    /// The example the current mode is pointing at, for the detail pane
    pub fn highlighted(&self, catalog: &Catalog) -> Option<Example> {
        match self.mode {
            FinderMode::Simple => self.simple.highlighted(catalog).cloned(),
            FinderMode::Quiz => self.quiz.highlighted(catalog).cloned(),
            FinderMode::Category => self.category.highlighted(catalog).cloned(),
            FinderMode::Gallery => self.gallery.highlighted(catalog).cloned(),
            FinderMode::Paths => Some(self.paths.highlighted(catalog)),
        }
    }
}

/// A toggleable filter chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChip {
    Category(Category),
    Difficulty(Difficulty),
    NewOnly,
}

impl FilterChip {
    pub const ALL: [FilterChip; 10] = [
        FilterChip::Category(Category::Basics),
        FilterChip::Category(Category::Defi),
        FilterChip::Category(Category::Nft),
        FilterChip::Category(Category::Social),
        FilterChip::Category(Category::Infrastructure),
        FilterChip::Category(Category::Auth),
        FilterChip::Difficulty(Difficulty::Beginner),
        FilterChip::Difficulty(Difficulty::Intermediate),
        FilterChip::Difficulty(Difficulty::Advanced),
        FilterChip::NewOnly,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FilterChip::Category(category) => category.label(),
            FilterChip::Difficulty(difficulty) => difficulty.label(),
            FilterChip::NewOnly => "New",
        }
    }

    pub fn toggle(&self, session: &mut FilterSession) {
        match self {
            FilterChip::Category(category) => session.toggle_category(*category),
            FilterChip::Difficulty(difficulty) => session.toggle_difficulty(*difficulty),
            FilterChip::NewOnly => session.toggle_new_only(),
        }
    }

    pub fn is_active(&self, session: &FilterSession) -> bool {
        match self {
            FilterChip::Category(category) => session.is_category_selected(*category),
            FilterChip::Difficulty(difficulty) => {
                session.filters().difficulty == Some(*difficulty)
            }
            FilterChip::NewOnly => session.filters().only_new,
        }
    }
}

/// Filter chips plus a cursor over them
#[derive(Debug, Clone, Default)]
pub struct FilterPanel {
    pub session: FilterSession,
    pub chip_index: usize,
}

impl FilterPanel {
    pub fn with_sort(sort: SortOption) -> Self {
        Self {
            session: FilterSession::with_sort(sort),
            chip_index: 0,
        }
    }

    pub fn next_chip(&mut self) {
        self.chip_index = (self.chip_index + 1) % FilterChip::ALL.len();
    }

    pub fn previous_chip(&mut self) {
        self.chip_index = (self.chip_index + FilterChip::ALL.len() - 1) % FilterChip::ALL.len();
    }

    pub fn current_chip(&self) -> FilterChip {
        FilterChip::ALL[self.chip_index % FilterChip::ALL.len()]
    }

    pub fn toggle_current(&mut self) {
        let chip = self.current_chip();
        chip.toggle(&mut self.session);
    }
}

/// Which part of the simple search screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimpleFocus {
    #[default]
    Search,
    Filters,
    Results,
}

/// Simple search mode
#[derive(Debug, Default)]
pub struct SimpleState {
    pub search_input: Input,
    pub filters: FilterPanel,
    pub focus: SimpleFocus,
    pub selected_index: usize,
}

impl SimpleState {
    pub fn with_sort(sort: SortOption) -> Self {
        Self {
            filters: FilterPanel::with_sort(sort),
            ..Self::default()
        }
    }

    /// Push the input text into the session
    pub fn sync_query(&mut self) {
        let query = self.search_input.value().to_string();
        self.filters.session.set_query(&query);
        self.selected_index = 0;
    }

    pub fn results<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Example> {
        self.filters.session.results(catalog)
    }

    pub fn highlighted<'a>(&self, catalog: &'a Catalog) -> Option<&'a Example> {
        self.results(catalog).get(self.selected_index).copied()
    }
}

/// Gallery mode
#[derive(Debug, Default)]
pub struct GalleryState {
    pub filters: FilterPanel,
    pub selected_index: usize,
}

impl GalleryState {
    pub fn with_sort(sort: SortOption) -> Self {
        Self {
            filters: FilterPanel::with_sort(sort),
            selected_index: 0,
        }
    }

    pub fn results<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Example> {
        self.filters.session.results(catalog)
    }

    pub fn highlighted<'a>(&self, catalog: &'a Catalog) -> Option<&'a Example> {
        self.results(catalog).get(self.selected_index).copied()
    }

    pub fn cycle_sort(&mut self) {
        let next = self.filters.session.sort_option().next();
        self.filters.session.set_sort(next);
        self.selected_index = 0;
    }
}

/// Category chooser options, "All Categories" first
pub const CATEGORY_CHOICES: [CategorySelection; 7] = [
    CategorySelection::All,
    CategorySelection::Category(Category::Basics),
    CategorySelection::Category(Category::Defi),
    CategorySelection::Category(Category::Nft),
    CategorySelection::Category(Category::Social),
    CategorySelection::Category(Category::Infrastructure),
    CategorySelection::Category(Category::Auth),
];

/// Category browsing mode
#[derive(Debug, Default)]
pub struct CategoryState {
    pub browser: CategoryBrowser,
    pub choice_index: usize,
    pub selected_index: usize,
}

impl CategoryState {
    pub fn next_category(&mut self) {
        self.set_choice((self.choice_index + 1) % CATEGORY_CHOICES.len());
    }

    pub fn previous_category(&mut self) {
        self.set_choice((self.choice_index + CATEGORY_CHOICES.len() - 1) % CATEGORY_CHOICES.len());
    }

    fn set_choice(&mut self, index: usize) {
        self.choice_index = index;
        self.browser.set_selection(CATEGORY_CHOICES[index]);
        self.browser.clear_selected();
        self.selected_index = 0;
    }

    /// Mark the example under the cursor as selected
    pub fn select_current(&mut self, catalog: &Catalog) {
        if let Some(example) = self.browser.visible(catalog).get(self.selected_index) {
            self.browser.select(example.id.clone());
        }
    }

    pub fn highlighted<'a>(&self, catalog: &'a Catalog) -> Option<&'a Example> {
        self.browser
            .selected(catalog)
            .or_else(|| self.browser.visible(catalog).get(self.selected_index).copied())
    }
}

/// Quiz mode: the state machine plus an option cursor
#[derive(Debug, Default)]
pub struct QuizScreenState {
    pub quiz: QuizState,
    pub option_index: usize,
    pub selected_index: usize,
}

impl QuizScreenState {
    pub fn option_count(&self) -> usize {
        self.quiz
            .current_question()
            .map(|q| q.options().len())
            .unwrap_or(0)
    }

    pub fn reset(&mut self) {
        self.quiz.reset();
        self.option_index = 0;
        self.selected_index = 0;
    }

    pub fn recommendations<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Example> {
        self.quiz.recommendations(&catalog.all())
    }

    pub fn highlighted<'a>(&self, catalog: &'a Catalog) -> Option<&'a Example> {
        self.recommendations(catalog).get(self.selected_index).copied()
    }
}

/// Learning paths mode
#[derive(Debug, Default)]
pub struct PathsState {
    pub kind: PathKind,
    pub step_index: usize,
}

impl PathsState {
    pub fn path(&self) -> LearningPath {
        self.kind.path()
    }

    pub fn next_path(&mut self) {
        let index = PathKind::ALL.iter().position(|k| *k == self.kind).unwrap_or(0);
        self.kind = PathKind::ALL[(index + 1) % PathKind::ALL.len()];
        self.step_index = 0;
    }

    pub fn previous_path(&mut self) {
        let index = PathKind::ALL.iter().position(|k| *k == self.kind).unwrap_or(0);
        self.kind = PathKind::ALL[(index + PathKind::ALL.len() - 1) % PathKind::ALL.len()];
        self.step_index = 0;
    }

    pub fn highlighted(&self, catalog: &Catalog) -> Example {
        let path = self.path();
        let step = path.steps[self.step_index.min(path.steps.len() - 1)];
        step.resolve(catalog)
    }
}

/// Mode switches requested by key handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateTransition {
    NextMode,
    PreviousMode,
    Quit,
}
