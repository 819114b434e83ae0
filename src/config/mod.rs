//! Optional YAML configuration
//!
//! Discovery order: `--config <file>`, then `./example-finder.yaml`, then
//! `config.yaml` in the platform configuration directory. Missing files
//! fall back to defaults.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{ConfigSource, FinderConfig, LoadedConfig, OutputFormat};
