//! Quiz answer types

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::catalog::{Category, Difficulty};
use crate::FinderError;

/// Blockchain development experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Experience {
    #[serde(rename = "none")]
    Newcomer,
    #[serde(rename = "some")]
    Familiar,
    #[serde(rename = "extensive")]
    Experienced,
}

impl Experience {
    pub const ALL: [Experience; 3] = [
        Experience::Newcomer,
        Experience::Familiar,
        Experience::Experienced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Experience::Newcomer => "none",
            Experience::Familiar => "some",
            Experience::Experienced => "extensive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Experience::Newcomer => "I'm new to blockchain development",
            Experience::Familiar => "I have some experience with blockchain",
            Experience::Experienced => "I'm experienced with blockchain development",
        }
    }

    /// Difficulty the recommender targets for this level
    pub fn target_difficulty(&self) -> Difficulty {
        match self {
            Experience::Newcomer => Difficulty::Beginner,
            Experience::Familiar => Difficulty::Intermediate,
            Experience::Experienced => Difficulty::Advanced,
        }
    }
}

impl FromStr for Experience {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Experience::ALL
            .into_iter()
            .find(|e| e.as_str() == wanted)
            .ok_or_else(|| {
                FinderError::Parse(format!(
                    "unknown experience '{}' (expected none, some or extensive)",
                    s
                ))
            })
    }
}

/// Development background. Collected by the quiz but not used for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Background {
    #[serde(rename = "web2")]
    Web2,
    #[serde(rename = "blockchain")]
    Blockchain,
    #[serde(rename = "both")]
    Both,
    #[serde(rename = "none")]
    NewToDevelopment,
}

impl Background {
    pub const ALL: [Background; 4] = [
        Background::Web2,
        Background::Blockchain,
        Background::Both,
        Background::NewToDevelopment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Background::Web2 => "web2",
            Background::Blockchain => "blockchain",
            Background::Both => "both",
            Background::NewToDevelopment => "none",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Background::Web2 => "Web2/Traditional development",
            Background::Blockchain => "Other blockchain platforms",
            Background::Both => "Both Web2 and blockchain",
            Background::NewToDevelopment => "I'm new to development",
        }
    }
}

impl FromStr for Background {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Background::ALL
            .into_iter()
            .find(|b| b.as_str() == wanted)
            .ok_or_else(|| {
                FinderError::Parse(format!(
                    "unknown background '{}' (expected web2, blockchain, both or none)",
                    s
                ))
            })
    }
}

/// Project interest: a category, or no preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interest {
    NoPreference,
    Category(Category),
}

impl Interest {
    /// Options offered by the quiz, categories first
    pub fn options() -> Vec<Interest> {
        Category::ALL
            .into_iter()
            .map(Interest::Category)
            .chain(std::iter::once(Interest::NoPreference))
            .collect()
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            Interest::NoPreference => None,
            Interest::Category(category) => Some(*category),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::NoPreference => "any",
            Interest::Category(category) => category.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Interest::NoPreference => "No preference",
            Interest::Category(Category::Basics) => "Basic Web3 applications",
            Interest::Category(Category::Defi) => "DeFi applications",
            Interest::Category(Category::Nft) => "NFT projects",
            Interest::Category(Category::Social) => "Social applications",
            Interest::Category(Category::Infrastructure) => "Infrastructure/Developer tools",
            Interest::Category(Category::Auth) => "Authentication systems",
        }
    }
}

impl FromStr for Interest {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "any" | "none" => Ok(Interest::NoPreference),
            other => other.parse().map(Interest::Category),
        }
    }
}

/// Time available for a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBudget {
    Short,
    Medium,
    Long,
}

impl TimeBudget {
    pub const ALL: [TimeBudget; 3] = [TimeBudget::Short, TimeBudget::Medium, TimeBudget::Long];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeBudget::Short => "short",
            TimeBudget::Medium => "medium",
            TimeBudget::Long => "long",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeBudget::Short => "1-2 hours",
            TimeBudget::Medium => "2-4 hours",
            TimeBudget::Long => "4+ hours",
        }
    }

    /// Does an example's time estimate fit this budget?
    ///
    /// Examples without an estimate always fit. Otherwise the estimate label
    /// must contain the budget's marker text.
    pub fn fits(&self, estimated_time: Option<&str>) -> bool {
        let Some(estimate) = estimated_time else {
            return true;
        };
        match self {
            TimeBudget::Short => estimate.contains("1-2"),
            TimeBudget::Medium => estimate.contains("2-4"),
            TimeBudget::Long => estimate.contains("4+") || estimate.contains("5+"),
        }
    }
}

impl FromStr for TimeBudget {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        TimeBudget::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| {
                FinderError::Parse(format!(
                    "unknown time budget '{}' (expected short, medium or long)",
                    s
                ))
            })
    }
}

/// An answer to one of the quiz questions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Experience(Experience),
    Background(Background),
    Interest(Interest),
    Time(TimeBudget),
}

/// Answers collected so far
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswers {
    pub experience: Option<Experience>,
    pub background: Option<Background>,
    pub interest: Option<Interest>,
    pub time: Option<TimeBudget>,
}

impl QuizAnswers {
    pub fn set(&mut self, answer: Answer) {
        match answer {
            Answer::Experience(value) => self.experience = Some(value),
            Answer::Background(value) => self.background = Some(value),
            Answer::Interest(value) => self.interest = Some(value),
            Answer::Time(value) => self.time = Some(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
