//! Example catalog
//!
//! The catalog is the fixed list of code examples every finder mode queries.
//! A built-in catalog ships with the crate; a catalog file can replace it
//! (see [`CatalogLoader`]).
//!
//! ```text
//! built-in data ──┐
//!                 ├──► Catalog ──► search ──► filter ──► sort
//! catalog file ───┘       │
//!  (validated)            └──────► quiz recommend / learning paths
//! ```

mod data;
mod loader;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::FinderError;

pub use loader::{validate_examples, CatalogFile, CatalogLoader};

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    examples: data::builtin_examples(),
});

/// Category tag attached to an example
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Basics,
    Defi,
    Nft,
    Social,
    Infrastructure,
    Auth,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Category::Basics,
        Category::Defi,
        Category::Nft,
        Category::Social,
        Category::Infrastructure,
        Category::Auth,
    ];

    /// Identifier used in data files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Basics => "basics",
            Category::Defi => "defi",
            Category::Nft => "nft",
            Category::Social => "social",
            Category::Infrastructure => "infrastructure",
            Category::Auth => "auth",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Basics => "Basics",
            Category::Defi => "DeFi",
            Category::Nft => "NFTs",
            Category::Social => "Social",
            Category::Infrastructure => "Infrastructure",
            Category::Auth => "Authentication",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                FinderError::Parse(format!(
                    "unknown category '{}' (expected one of: basics, defi, nft, social, infrastructure, auth)",
                    s
                ))
            })
    }
}

/// Difficulty level of an example
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Sort rank, beginner first
    pub fn rank(&self) -> u8 {
        match self {
            Difficulty::Beginner => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Advanced => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| {
                FinderError::Parse(format!(
                    "unknown difficulty '{}' (expected beginner, intermediate or advanced)",
                    s
                ))
            })
    }
}

/// A code example with its browsing metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Example {
    /// Unique identifier
    pub id: String,

    /// Short title
    pub title: String,

    /// One line description
    pub description: String,

    /// Multi-sentence description
    pub long_description: String,

    /// Link to the example
    pub url: String,

    /// Categories, primary category first
    pub categories: Vec<Category>,

    pub difficulty: Difficulty,

    /// Time to complete, e.g. "1-2 hours" or "5+ hours"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,

    /// Searchable keywords
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub is_new: bool,

    /// First-person descriptions of why someone would build this
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_stories: Vec<String>,
}

impl Example {
    /// The first category tag, used for category sorting
    pub fn primary_category(&self) -> Option<Category> {
        self.categories.first().copied()
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Comma separated category labels
    pub fn categories_display(&self) -> String {
        self.categories
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// An immutable, validated list of examples
#[derive(Debug, Clone)]
pub struct Catalog {
    examples: Vec<Example>,
}

impl Catalog {
    /// Build a catalog from user supplied examples, validating them first
    pub fn new(examples: Vec<Example>) -> crate::Result<Self> {
        validate_examples(&examples)?;
        Ok(Self { examples })
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Borrowed view of every example, in catalog order
    pub fn all(&self) -> Vec<&Example> {
        self.examples.iter().collect()
    }

    /// Look up an example by id
    pub fn get(&self, id: &str) -> Option<&Example> {
        self.examples.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 16);
        assert!(validate_examples(catalog.examples()).is_ok());
    }

    #[test]
    fn test_builtin_ids_unique() {
        let ids: HashSet<_> = Catalog::builtin()
            .examples()
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids.len(), Catalog::builtin().len());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::builtin();
        let todo = catalog.get("todo").expect("todo example");
        assert_eq!(todo.title, "To-Do List");
        assert_eq!(todo.difficulty, Difficulty::Beginner);
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("DeFi".parse::<Category>().unwrap(), Category::Defi);
        assert_eq!(" auth ".parse::<Category>().unwrap(), Category::Auth);
        assert!("gaming".parse::<Category>().is_err());
    }

    #[test]
    fn test_difficulty_order() {
        assert!(Difficulty::Beginner < Difficulty::Intermediate);
        assert!(Difficulty::Intermediate < Difficulty::Advanced);
        assert_eq!("ADVANCED".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::Nft.label(), "NFTs");
        assert_eq!(Category::Auth.label(), "Authentication");
        assert_eq!(Difficulty::Intermediate.label(), "Intermediate");
    }

    #[test]
    fn test_example_serializes_camel_case() {
        let example = Catalog::builtin().get("todo").unwrap();
        let json = serde_json::to_value(example).unwrap();
        assert_eq!(json["estimatedTime"], "1-2 hours");
        assert_eq!(json["isNew"], false);
        assert_eq!(json["categories"][0], "basics");
        assert!(json.get("longDescription").is_some());
    }
}
