pub mod browse;
pub mod config;
pub mod gallery;
pub mod paths;
pub mod quiz;
pub mod search;
pub mod show;
pub mod validate;

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, CatalogLoader};
use crate::config::{ConfigLoader, LoadedConfig, OutputFormat};
use crate::Result;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Configuration and catalog shared by every command
#[derive(Debug, Clone)]
pub struct FinderContext {
    pub config: LoadedConfig,
    catalog: Cow<'static, Catalog>,
    catalog_path: Option<PathBuf>,
}

impl FinderContext {
    /// Resolve configuration, then the catalog (`--catalog` beats the config file)
    pub fn load(config_path: Option<&Path>, catalog_path: Option<&Path>) -> Result<Self> {
        let config = ConfigLoader::new().discover(config_path)?;
        Self::with_config(config, catalog_path)
    }

    /// Build a context from an already resolved configuration
    pub fn with_config(config: LoadedConfig, catalog_path: Option<&Path>) -> Result<Self> {
        let catalog_path = catalog_path
            .map(Path::to_path_buf)
            .or_else(|| config.config.catalog.clone());

        let catalog = match &catalog_path {
            Some(path) => {
                let catalog = CatalogLoader::new().load(path)?;
                tracing::info!(path = %path.display(), examples = catalog.len(), "using catalog file");
                Cow::Owned(catalog)
            }
            None => Cow::Borrowed(Catalog::builtin()),
        };

        Ok(Self {
            config,
            catalog,
            catalog_path,
        })
    }

    /// Context with default configuration and the built-in catalog
    pub fn builtin() -> Self {
        Self {
            config: LoadedConfig::defaults(),
            catalog: Cow::Borrowed(Catalog::builtin()),
            catalog_path: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Catalog file in use, `None` for the built-in catalog
    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_path.as_deref()
    }

    /// JSON when the flag is set or the config asks for it
    pub fn wants_json(&self, json_flag: bool) -> bool {
        json_flag || self.config.config.format == OutputFormat::Json
    }
}
