//! Curated learning paths
//!
//! Each path is four steps, each step pointing at a catalog example by id.
//! Step ids resolve lazily against whichever catalog is active; an id that
//! is not in the catalog resolves to [`placeholder_example`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{Catalog, Category, Difficulty, Example};
use crate::FinderError;

/// Id of the placeholder returned for unknown ids
pub const PLACEHOLDER_ID: &str = "default";

/// The available learning paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    #[default]
    Web3,
    Defi,
    Nft,
}

impl PathKind {
    pub const ALL: [PathKind; 3] = [PathKind::Web3, PathKind::Defi, PathKind::Nft];

    pub fn as_str(&self) -> &'static str {
        match self {
            PathKind::Web3 => "web3",
            PathKind::Defi => "defi",
            PathKind::Nft => "nft",
        }
    }

    /// Short label used on path selector tabs
    pub fn label(&self) -> &'static str {
        match self {
            PathKind::Web3 => "Web3 Basics",
            PathKind::Defi => "DeFi",
            PathKind::Nft => "NFTs",
        }
    }

    pub fn path(&self) -> LearningPath {
        LearningPath::get(*self)
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathKind {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PathKind::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| {
                FinderError::Parse(format!(
                    "unknown learning path '{}' (expected web3, defi or nft)",
                    s
                ))
            })
    }
}

/// One step of a learning path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStep {
    pub title: &'static str,
    pub description: &'static str,
    pub example_id: &'static str,
}

impl PathStep {
    const fn new(title: &'static str, description: &'static str, example_id: &'static str) -> Self {
        Self {
            title,
            description,
            example_id,
        }
    }

    /// The example this step points at, or the placeholder
    pub fn resolve(&self, catalog: &Catalog) -> Example {
        find_example_by_id(catalog, self.example_id)
    }
}

/// A curated, ordered list of examples
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningPath {
    pub kind: PathKind,
    pub title: &'static str,
    pub description: &'static str,
    pub steps: [PathStep; 4],
}

const WEB3_STEPS: [PathStep; 4] = [
    PathStep::new(
        "Step 1: Basic Web3 App",
        "Start with a simple To-Do List to learn the basics",
        "todo",
    ),
    PathStep::new(
        "Step 2: User Authentication",
        "Add user authentication to your app",
        "keyless",
    ),
    PathStep::new(
        "Step 3: Social Features",
        "Build social features into your application",
        "aptosfriend",
    ),
    PathStep::new(
        "Step 4: Advanced Features",
        "Explore more complex functionality",
        "voting",
    ),
];

const DEFI_STEPS: [PathStep; 4] = [
    PathStep::new(
        "Step 1: Token Basics",
        "Learn about fungible assets on Aptos",
        "launchpad",
    ),
    PathStep::new(
        "Step 2: Token Vesting",
        "Implement token vesting and staking",
        "vesting",
    ),
    PathStep::new(
        "Step 3: Marketplace",
        "Build a marketplace with auctions",
        "dutch",
    ),
    PathStep::new(
        "Step 4: Advanced DeFi",
        "Create a stablecoin or DEX",
        "stablecoin",
    ),
];

const NFT_STEPS: [PathStep; 4] = [
    PathStep::new(
        "Step 1: NFT Basics",
        "Learn about non-fungible tokens on Aptos",
        "nft",
    ),
    PathStep::new(
        "Step 2: Randomness",
        "Implement fair and transparent minting",
        "randomness",
    ),
    PathStep::new(
        "Step 3: Auctions",
        "Build an NFT auction system",
        "dutch",
    ),
    PathStep::new(
        "Step 4: Advanced NFT Features",
        "Explore more complex NFT functionality",
        "dispatch",
    ),
];

impl LearningPath {
    pub fn get(kind: PathKind) -> Self {
        match kind {
            PathKind::Web3 => Self {
                kind,
                title: "Web3 Development Path",
                description: "Learn the fundamentals of Web3 development on Aptos",
                steps: WEB3_STEPS,
            },
            PathKind::Defi => Self {
                kind,
                title: "DeFi Development Path",
                description: "Build decentralized finance applications on Aptos",
                steps: DEFI_STEPS,
            },
            PathKind::Nft => Self {
                kind,
                title: "NFT Development Path",
                description: "Create and manage NFTs on Aptos",
                steps: NFT_STEPS,
            },
        }
    }

    pub fn all() -> Vec<Self> {
        PathKind::ALL.into_iter().map(Self::get).collect()
    }

    /// Steps paired with their resolved examples
    pub fn resolve(&self, catalog: &Catalog) -> Vec<(PathStep, Example)> {
        self.steps
            .iter()
            .map(|step| (*step, step.resolve(catalog)))
            .collect()
    }
}

/// Stand-in shown when a path step names an unknown example
pub fn placeholder_example() -> Example {
    Example {
        id: PLACEHOLDER_ID.to_string(),
        title: "Example Not Found".to_string(),
        description: "The requested example could not be found".to_string(),
        long_description: "Please try another example or contact support".to_string(),
        url: "#".to_string(),
        categories: vec![Category::Basics],
        difficulty: Difficulty::Beginner,
        estimated_time: None,
        tags: Vec::new(),
        is_new: false,
        user_stories: Vec::new(),
    }
}

/// Look up `id`, falling back to the placeholder
pub fn find_example_by_id(catalog: &Catalog, id: &str) -> Example {
    match catalog.get(id) {
        Some(example) => example.clone(),
        None => {
            tracing::warn!(id, "learning path step references an unknown example");
            placeholder_example()
        }
    }
}
