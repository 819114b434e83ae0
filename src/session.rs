//! Per-session browsing state
//!
//! A [`FilterSession`] backs the simple search and gallery modes, a
//! [`CategoryBrowser`] backs the category chooser. Both only hold user
//! choices; results are recomputed from the catalog on every call.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{Catalog, Category, Difficulty, Example};
use crate::query::{filter, sort, Filters, SortOption};
use crate::FinderError;

/// The five ways into the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinderMode {
    #[default]
    Simple,
    Quiz,
    Category,
    Gallery,
    Paths,
}

impl FinderMode {
    pub const ALL: [FinderMode; 5] = [
        FinderMode::Simple,
        FinderMode::Quiz,
        FinderMode::Category,
        FinderMode::Gallery,
        FinderMode::Paths,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FinderMode::Simple => "simple",
            FinderMode::Quiz => "quiz",
            FinderMode::Category => "category",
            FinderMode::Gallery => "gallery",
            FinderMode::Paths => "paths",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FinderMode::Simple => "Simple Search",
            FinderMode::Quiz => "Quiz Finder",
            FinderMode::Category => "Browse by Category",
            FinderMode::Gallery => "Visual Gallery",
            FinderMode::Paths => "Learning Paths",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|m| m == self).unwrap_or(0)
    }

    /// Next mode, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous mode, wrapping around
    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for FinderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FinderMode {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        FinderMode::ALL
            .into_iter()
            .find(|m| m.as_str() == wanted)
            .ok_or_else(|| {
                FinderError::Parse(format!(
                    "unknown mode '{}' (expected simple, quiz, category, gallery or paths)",
                    s
                ))
            })
    }
}

/// Filter criteria plus sort order for one browsing session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSession {
    filters: Filters,
    sort: SortOption,
}

impl FilterSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort(sort: SortOption) -> Self {
        Self {
            filters: Filters::default(),
            sort,
        }
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn sort_option(&self) -> SortOption {
        self.sort
    }

    /// Replace the free-text query; blank text clears it
    pub fn set_query(&mut self, query: &str) {
        self.filters.query = if query.trim().is_empty() {
            None
        } else {
            Some(query.to_string())
        };
    }

    /// Add `category` if absent, remove it if present
    pub fn toggle_category(&mut self, category: Category) {
        if let Some(pos) = self.filters.categories.iter().position(|c| *c == category) {
            self.filters.categories.remove(pos);
        } else {
            self.filters.categories.push(category);
        }
    }

    pub fn is_category_selected(&self, category: Category) -> bool {
        self.filters.categories.contains(&category)
    }

    pub fn set_difficulty(&mut self, difficulty: Option<Difficulty>) {
        self.filters.difficulty = difficulty;
    }

    /// Select `difficulty`, or clear it when it is already selected
    pub fn toggle_difficulty(&mut self, difficulty: Difficulty) {
        if self.filters.difficulty == Some(difficulty) {
            self.filters.difficulty = None;
        } else {
            self.filters.difficulty = Some(difficulty);
        }
    }

    pub fn toggle_new_only(&mut self) {
        self.filters.only_new = !self.filters.only_new;
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    /// Reset every filter; the sort order is kept
    pub fn clear(&mut self) {
        self.filters = Filters::default();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Matching examples in catalog order
    pub fn filtered<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Example> {
        filter(&self.filters, &catalog.all())
    }

    /// Matching examples in the session's sort order
    pub fn results<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Example> {
        sort(&self.filtered(catalog), self.sort)
    }
}

impl From<Filters> for FilterSession {
    fn from(filters: Filters) -> Self {
        Self {
            filters,
            sort: SortOption::default(),
        }
    }
}

/// Category chooser selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Category(Category),
}

impl CategorySelection {
    pub fn label(&self) -> &'static str {
        match self {
            CategorySelection::All => "All Categories",
            CategorySelection::Category(category) => category.label(),
        }
    }
}

impl FromStr for CategorySelection {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategorySelection::All)
        } else {
            s.parse().map(CategorySelection::Category)
        }
    }
}

/// State of the category browsing mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryBrowser {
    selection: CategorySelection,
    selected_id: Option<String>,
}

impl CategoryBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> CategorySelection {
        self.selection
    }

    pub fn set_selection(&mut self, selection: CategorySelection) {
        self.selection = selection;
    }

    /// Examples shown for the current selection, in catalog order
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Example> {
        match self.selection {
            CategorySelection::All => catalog.all(),
            CategorySelection::Category(category) => catalog
                .examples()
                .iter()
                .filter(|e| e.has_category(category))
                .collect(),
        }
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.selected_id = Some(id.into());
    }

    pub fn clear_selected(&mut self) {
        self.selected_id = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// The selected example, if its id exists in `catalog`
    pub fn selected<'a>(&self, catalog: &'a Catalog) -> Option<&'a Example> {
        self.selected_id.as_deref().and_then(|id| catalog.get(id))
    }
}
