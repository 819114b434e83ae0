pub mod paths;

pub use paths::FinderPaths;
