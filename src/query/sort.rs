//! Catalog sorting

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::catalog::Example;
use crate::FinderError;

/// Sort order for result lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// Beginner first
    #[default]
    Difficulty,
    /// By primary category identifier
    Category,
    /// Alphabetical by title
    Title,
}

impl SortOption {
    pub const ALL: [SortOption; 3] = [
        SortOption::Difficulty,
        SortOption::Category,
        SortOption::Title,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Difficulty => "difficulty",
            SortOption::Category => "category",
            SortOption::Title => "title",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Difficulty => "Difficulty",
            SortOption::Category => "Category",
            SortOption::Title => "Title",
        }
    }

    /// The option after this one, wrapping around
    pub fn next(&self) -> Self {
        match self {
            SortOption::Difficulty => SortOption::Category,
            SortOption::Category => SortOption::Title,
            SortOption::Title => SortOption::Difficulty,
        }
    }

    fn compare(&self, a: &Example, b: &Example) -> Ordering {
        match self {
            SortOption::Difficulty => a.difficulty.rank().cmp(&b.difficulty.rank()),
            SortOption::Category => match (a.primary_category(), b.primary_category()) {
                (Some(x), Some(y)) => x.as_str().cmp(y.as_str()),
                _ => Ordering::Equal,
            },
            SortOption::Title => compare_titles(&a.title, &b.title),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "difficulty" => Ok(SortOption::Difficulty),
            "category" => Ok(SortOption::Category),
            "title" => Ok(SortOption::Title),
            other => Err(FinderError::Parse(format!(
                "unknown sort option '{}' (expected difficulty, category or title)",
                other
            ))),
        }
    }
}

/// Collation for titles
///
/// Accents and case are ignored first. Ties go to the unaccented form, then
/// to lowercase before uppercase, then to the exact text.
pub(crate) fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| lower_first(a).cmp(lower_first(b)))
        .then_with(|| a.cmp(b))
}

fn collation_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn lower_first(text: &str) -> impl Iterator<Item = bool> + '_ {
    text.chars().map(char::is_uppercase)
}

/// Return a sorted copy of `items`
///
/// The sort is stable: items that compare equal, such as two examples with
/// the same primary category, keep their input order.
pub fn sort<'a>(items: &[&'a Example], option: SortOption) -> Vec<&'a Example> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| option.compare(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sort_by_difficulty_is_non_decreasing() {
        let sorted = sort(&Catalog::builtin().all(), SortOption::Difficulty);
        assert_eq!(sorted.len(), 16);
        assert!(sorted
            .windows(2)
            .all(|w| w[0].difficulty.rank() <= w[1].difficulty.rank()));
        assert_eq!(sorted[0].id, "todo");
        assert_eq!(sorted[1].id, "billboard");
    }

    #[test]
    fn test_sort_by_title() {
        let sorted = sort(&Catalog::builtin().all(), SortOption::Title);
        assert!(sorted
            .windows(2)
            .all(|w| compare_titles(&w[0].title, &w[1].title) != Ordering::Greater));
        assert_eq!(sorted.first().unwrap().title, "Aptos Friend");
        assert_eq!(sorted.last().unwrap().title, "Voting");
    }

    #[test]
    fn test_title_collation_folds_case_and_accents() {
        assert_eq!(compare_titles("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_titles("Apple", "apple"), Ordering::Greater);
        assert_eq!(compare_titles("Éclair", "Zebra"), Ordering::Less);
        assert_eq!(compare_titles("eclair", "éclair"), Ordering::Less);
        assert_eq!(compare_titles("banana", "Apple"), Ordering::Greater);
        assert_eq!(compare_titles("Voting", "Voting"), Ordering::Equal);
    }

    #[test]
    fn test_sort_by_primary_category_is_stable() {
        let all = Catalog::builtin().all();
        let sorted = sort(&all, SortOption::Category);
        let primaries: Vec<Category> = sorted
            .iter()
            .map(|e| e.primary_category().unwrap())
            .collect();
        assert_eq!(primaries.first(), Some(&Category::Auth));
        assert_eq!(primaries.last(), Some(&Category::Social));

        // defi-first examples keep catalog order
        let defi: Vec<&str> = sorted
            .iter()
            .filter(|e| e.primary_category() == Some(Category::Defi))
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(
            defi,
            vec!["launchpad", "vesting", "epoch", "dex", "dutch", "stablecoin", "dispatch"]
        );
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let all = Catalog::builtin().all();
        let before: Vec<String> = all.iter().map(|e| e.id.clone()).collect();
        let _ = sort(&all, SortOption::Title);
        let after: Vec<String> = all.iter().map(|e| e.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_sort_option_parsing() {
        assert_eq!("Title".parse::<SortOption>().unwrap(), SortOption::Title);
        assert!("popularity".parse::<SortOption>().is_err());
        assert_eq!(SortOption::default(), SortOption::Difficulty);
        assert_eq!(SortOption::Title.next(), SortOption::Difficulty);
    }
}
