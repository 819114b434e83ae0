use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::query::SortOption;
use crate::session::FinderMode;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Contents of `example-finder.yaml` / `config.yaml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FinderConfig {
    /// Sort order used when `--sort` is not given
    #[serde(default)]
    pub default_sort: SortOption,

    /// Mode the interactive finder opens in
    #[serde(default)]
    pub default_mode: FinderMode,

    /// Catalog file replacing the built-in catalog. Relative paths are
    /// resolved against the directory of the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Output format used when `--json` is not given
    #[serde(default)]
    pub format: OutputFormat,
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum ConfigSource {
    /// `--config` flag
    Explicit(PathBuf),
    /// `example-finder.yaml` in the working directory
    Local(PathBuf),
    /// Per-user configuration directory
    User(PathBuf),
    /// No file found
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(path) => write!(f, "{} (--config)", path.display()),
            ConfigSource::Local(path) => write!(f, "{} (working directory)", path.display()),
            ConfigSource::User(path) => write!(f, "{} (user config)", path.display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// A configuration together with its origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedConfig {
    pub config: FinderConfig,
    pub source: ConfigSource,
}

impl LoadedConfig {
    pub fn defaults() -> Self {
        Self {
            config: FinderConfig::default(),
            source: ConfigSource::Defaults,
        }
    }
}
