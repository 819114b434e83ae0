use super::types::{ConfigSource, FinderConfig, LoadedConfig};
use crate::io::FinderPaths;
use crate::{FinderError, Result};
use std::path::{Path, PathBuf};

/// Configuration loader with file discovery
pub struct ConfigLoader {
    /// Directory searched for `example-finder.yaml`
    working_dir: PathBuf,
    /// Platform paths; `None` when they cannot be determined
    paths: Option<FinderPaths>,
}

impl ConfigLoader {
    /// Loader rooted at the current directory and the platform config dir
    pub fn new() -> Self {
        let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let paths = match FinderPaths::new() {
            Ok(paths) => Some(paths),
            Err(e) => {
                tracing::debug!("platform config directory unavailable: {}", e);
                None
            }
        };
        Self { working_dir, paths }
    }

    /// Loader with explicit search locations
    pub fn with_locations(working_dir: impl Into<PathBuf>, paths: Option<FinderPaths>) -> Self {
        Self {
            working_dir: working_dir.into(),
            paths,
        }
    }

    /// Candidate files in discovery order, excluding `--config`
    pub fn candidates(&self) -> Vec<ConfigSource> {
        let mut candidates = vec![ConfigSource::Local(FinderPaths::local_config_file(
            &self.working_dir,
        ))];
        if let Some(paths) = &self.paths {
            candidates.push(ConfigSource::User(paths.config_file()));
        }
        candidates
    }

    /// Resolve the effective configuration
    ///
    /// An explicit file must load. A discovered file that fails to load is
    /// logged and skipped.
    pub fn discover(&self, explicit: Option<&Path>) -> Result<LoadedConfig> {
        if let Some(path) = explicit {
            let config = self.load_config_file(path)?;
            return Ok(LoadedConfig {
                config,
                source: ConfigSource::Explicit(path.to_path_buf()),
            });
        }

        for source in self.candidates() {
            let path = match &source {
                ConfigSource::Local(path) | ConfigSource::User(path) => path.clone(),
                _ => continue,
            };
            if !path.exists() {
                continue;
            }

            match self.load_config_file(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded configuration");
                    return Ok(LoadedConfig { config, source });
                }
                Err(e) => {
                    tracing::warn!("Failed to load config file {}: {}", path.display(), e);
                }
            }
        }

        Ok(LoadedConfig::defaults())
    }

    /// Load and validate a single configuration file
    pub fn load_config_file<P: AsRef<Path>>(&self, path: P) -> Result<FinderConfig> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|e| {
            FinderError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut config = Self::parse(&contents).map_err(|e| {
            FinderError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        if let Some(catalog) = config.catalog.take() {
            config.catalog = Some(Self::resolve_relative(path, catalog));
        }

        Ok(config)
    }

    /// Parse and validate configuration text; an empty document is the default
    pub fn parse(contents: &str) -> Result<FinderConfig> {
        if contents.trim().is_empty() {
            return Ok(FinderConfig::default());
        }
        let config: FinderConfig = serde_yaml_ng::from_str(contents)?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &FinderConfig) -> Result<()> {
        if let Some(catalog) = &config.catalog {
            if catalog.as_os_str().is_empty() {
                return Err(FinderError::Config(
                    "catalog path must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    fn resolve_relative(config_path: &Path, catalog: PathBuf) -> PathBuf {
        if catalog.is_absolute() {
            return catalog;
        }
        match config_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(catalog),
            _ => catalog,
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
