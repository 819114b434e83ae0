//! Code example finder
//!
//! A small query engine over a curated catalog of code examples, with five
//! ways in: keyword search, a recommendation quiz, category browsing, a
//! filterable gallery and guided learning paths.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod paths;
pub mod query;
pub mod quiz;
pub mod session;

pub use catalog::{Catalog, Category, Difficulty, Example};
pub use error::{FinderError, Result};
pub use query::{filter, search, sort, Filters, SortOption};
pub use quiz::{recommend, QuizState};
