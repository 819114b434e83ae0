//! Multi-criteria filtering

use serde::{Deserialize, Serialize};

use super::search::search;
use crate::catalog::{Category, Difficulty, Example};

/// Filter criteria, ANDed together
///
/// Every criterion is optional; an empty `categories` list means "any
/// category". Within `categories` the match is an OR.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,

    #[serde(default)]
    pub only_new: bool,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn only_new(mut self) -> Self {
        self.only_new = true;
        self
    }

    /// True when no criterion would remove anything
    pub fn is_empty(&self) -> bool {
        self.query.as_deref().map_or(true, |q| q.trim().is_empty())
            && self.categories.is_empty()
            && self.difficulty.is_none()
            && !self.only_new
    }
}

/// Apply `criteria` to `items`
///
/// Stages run in order (query, categories, difficulty, new flag) and each
/// one only narrows the output of the previous stage.
pub fn filter<'a>(criteria: &Filters, items: &[&'a Example]) -> Vec<&'a Example> {
    let mut filtered = search(criteria.query.as_deref(), items);

    if !criteria.categories.is_empty() {
        filtered.retain(|example| {
            criteria
                .categories
                .iter()
                .any(|category| example.has_category(*category))
        });
    }

    if let Some(difficulty) = criteria.difficulty {
        filtered.retain(|example| example.difficulty == difficulty);
    }

    if criteria.only_new {
        filtered.retain(|example| example.is_new);
    }

    tracing::debug!(
        candidates = items.len(),
        matched = filtered.len(),
        "filter applied"
    );
    filtered
}
