use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::catalog::{Category, Difficulty};
use crate::paths::PathKind;
use crate::query::SortOption;
use crate::quiz::{Background, Experience, Interest, TimeBudget};
use crate::session::CategorySelection;

/// example-finder: find code examples by keyword, quiz, category or learning path
#[derive(Parser, Debug)]
#[command(name = "example-finder")]
#[command(version)]
#[command(about = "Find code examples by keyword, quiz, category or learning path")]
#[command(
    long_about = "example-finder queries a curated catalog of code examples. Search by keyword, filter and sort the gallery, browse by category, answer a short quiz for recommendations, or follow a guided learning path."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (default: ./example-finder.yaml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog file (YAML or JSON) replacing the built-in catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Set log level
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Keyword search with optional filters
    Search {
        /// Search text, matched against titles, tags, descriptions and user stories
        query: Option<String>,

        /// Only examples in this category (repeatable)
        #[arg(short, long = "category")]
        categories: Vec<Category>,

        /// Only examples of this difficulty
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Only examples marked new
        #[arg(long = "new")]
        only_new: bool,

        /// Sort order (difficulty, category, title)
        #[arg(short, long)]
        sort: Option<SortOption>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Filterable gallery of every example
    Gallery {
        /// Only examples in this category (repeatable)
        #[arg(short, long = "category")]
        categories: Vec<Category>,

        /// Only examples of this difficulty
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Only examples marked new
        #[arg(long = "new")]
        only_new: bool,

        /// Sort order (difficulty, category, title)
        #[arg(short, long)]
        sort: Option<SortOption>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse examples by category
    Browse {
        /// Category to list, or "all"
        #[arg(default_value = "all")]
        category: CategorySelection,

        /// Show details for this example id
        #[arg(long)]
        select: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Answer the four quiz questions and get up to three recommendations
    Quiz {
        /// Blockchain experience (none, some, extensive)
        #[arg(long)]
        experience: Experience,

        /// Development background (web2, blockchain, both, none)
        #[arg(long)]
        background: Background,

        /// Project interest: a category, or "any"
        #[arg(long, default_value = "any")]
        interest: Interest,

        /// Available time (short, medium, long)
        #[arg(long)]
        time: TimeBudget,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the curated learning paths
    Paths {
        /// Path to show (web3, defi, nft); all paths when omitted
        path: Option<PathKind>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one example in detail
    Show {
        /// Example id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a catalog file
    Validate {
        /// Catalog file (YAML, or JSON with a .json extension)
        file: PathBuf,
    },

    /// Show the effective configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive terminal finder
    #[cfg(feature = "tui")]
    Tui,
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Search { .. } => "search",
            Commands::Gallery { .. } => "gallery",
            Commands::Browse { .. } => "browse",
            Commands::Quiz { .. } => "quiz",
            Commands::Paths { .. } => "paths",
            Commands::Show { .. } => "show",
            Commands::Validate { .. } => "validate",
            Commands::Config { .. } => "config",
            #[cfg(feature = "tui")]
            Commands::Tui => "tui",
        }
    }

    /// Check if this command needs the configuration and active catalog
    pub fn needs_context(&self) -> bool {
        !matches!(self, Commands::Validate { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_search_parsing() {
        let cli = Cli::parse_from([
            "example-finder",
            "search",
            "token",
            "-c",
            "defi",
            "--category",
            "nft",
            "-d",
            "advanced",
            "--new",
            "--sort",
            "title",
        ]);

        match cli.command {
            Commands::Search {
                query,
                categories,
                difficulty,
                only_new,
                sort,
                json,
            } => {
                assert_eq!(query.as_deref(), Some("token"));
                assert_eq!(categories, vec![Category::Defi, Category::Nft]);
                assert_eq!(difficulty, Some(Difficulty::Advanced));
                assert!(only_new);
                assert_eq!(sort, Some(SortOption::Title));
                assert!(!json);
            }
            _ => panic!("Wrong command parsed"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "example-finder",
            "gallery",
            "--catalog",
            "my.yaml",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.catalog, Some(PathBuf::from("my.yaml")));
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(cli.config, None);
        assert_eq!(cli.command.name(), "gallery");
    }

    #[test]
    fn test_browse_defaults_to_all() {
        let cli = Cli::parse_from(["example-finder", "browse"]);
        match cli.command {
            Commands::Browse {
                category, select, ..
            } => {
                assert_eq!(category, CategorySelection::All);
                assert!(select.is_none());
            }
            _ => panic!("Wrong command parsed"),
        }
    }

    #[test]
    fn test_quiz_parsing() {
        let cli = Cli::parse_from([
            "example-finder",
            "quiz",
            "--experience",
            "none",
            "--background",
            "web2",
            "--time",
            "medium",
        ]);
        match cli.command {
            Commands::Quiz {
                experience,
                background,
                interest,
                time,
                json,
            } => {
                assert_eq!(experience, Experience::Newcomer);
                assert_eq!(background, Background::Web2);
                assert_eq!(interest, Interest::NoPreference);
                assert_eq!(time, TimeBudget::Medium);
                assert!(!json);
            }
            _ => panic!("Wrong command parsed"),
        }
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Cli::try_parse_from(["example-finder", "search", "-c", "gaming"]).is_err());
        assert!(Cli::try_parse_from(["example-finder", "paths", "rust"]).is_err());
        assert!(Cli::try_parse_from(["example-finder", "quiz", "--experience", "none"]).is_err());
    }

    #[test]
    fn test_paths_optional_kind() {
        let cli = Cli::parse_from(["example-finder", "paths", "nft", "--json"]);
        match cli.command {
            Commands::Paths { path, json } => {
                assert_eq!(path, Some(PathKind::Nft));
                assert!(json);
            }
            _ => panic!("Wrong command parsed"),
        }
        assert!(!Commands::Validate { file: PathBuf::from("x") }.needs_context());
        assert!(Commands::Config { json: false }.needs_context());
    }
}
