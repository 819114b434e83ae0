//! Read-only catalog queries
//!
//! Every stage takes a slice of borrowed examples and returns a new list, so
//! stages compose freely and never touch the catalog itself:
//! search → filter → sort.

mod filter;
mod search;
mod sort;

pub use filter::{filter, Filters};
pub use search::{relevance_score, search, ScoreWeights, SCORE_WEIGHTS};
pub use sort::{sort, SortOption};
