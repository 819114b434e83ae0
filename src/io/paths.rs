use crate::{FinderError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// File name of the per-user configuration file
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE_NAME: &str = "example-finder.yaml";

/// Platform locations used by the finder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderPaths {
    /// Per-user configuration directory
    pub config_dir: PathBuf,
}

impl FinderPaths {
    /// Resolve the platform configuration directory
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "example-finder").ok_or_else(|| {
            FinderError::Path("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Use an explicit configuration directory
    pub fn for_dir(config_dir: &Path) -> Self {
        Self {
            config_dir: config_dir.to_path_buf(),
        }
    }

    /// Per-user configuration file path
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Configuration file looked up in `working_dir`
    pub fn local_config_file(working_dir: &Path) -> PathBuf {
        working_dir.join(LOCAL_CONFIG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finder_paths_creation() {
        if let Ok(paths) = FinderPaths::new() {
            assert!(paths.config_file().ends_with(CONFIG_FILE_NAME));
        }
    }

    #[test]
    fn test_explicit_dir() {
        let paths = FinderPaths::for_dir(Path::new("/tmp/finder"));
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/finder/config.yaml"));
        assert_eq!(
            FinderPaths::local_config_file(Path::new("/work")),
            PathBuf::from("/work/example-finder.yaml")
        );
    }
}
