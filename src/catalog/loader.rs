//! Catalog file loading and validation
//!
//! A catalog file is either a bare list of examples or a document with an
//! `examples` list. Files ending in `.json` are parsed as JSON, anything
//! else as YAML.

use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::{Catalog, Example};
use crate::{FinderError, Result};

static ESTIMATED_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+(-\d+|\+) hours?$").expect("estimated time pattern is valid")
});

/// Catalog document with an `examples` list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    pub examples: Vec<Example>,
}

/// Loader for user supplied catalog files
#[derive(Debug, Default)]
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load and validate a catalog file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Catalog> {
        Catalog::new(self.load_examples(path)?)
    }

    /// Read and parse a catalog file without validating it
    pub fn load_examples<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Example>> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;

        let examples = self.parse(&contents, Self::is_json(path)).map_err(|e| {
            FinderError::Catalog(format!(
                "Failed to parse catalog file {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %path.display(), examples = examples.len(), "catalog file parsed");
        Ok(examples)
    }

    /// Parse catalog contents without validating them
    ///
    /// The top level decides the shape: a sequence is a bare list of
    /// examples, a mapping is a document with an `examples` key. Field
    /// errors are reported against that shape.
    pub fn parse(&self, contents: &str, json: bool) -> Result<Vec<Example>> {
        if json {
            let value: serde_json::Value = serde_json::from_str(contents)?;
            if value.is_array() {
                Ok(serde_json::from_str(contents)?)
            } else if value.is_object() {
                let document: CatalogFile = serde_json::from_str(contents)?;
                Ok(document.examples)
            } else {
                Err(Self::bad_shape())
            }
        } else {
            let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(contents)?;
            if value.is_sequence() {
                Ok(serde_yaml_ng::from_str(contents)?)
            } else if value.is_mapping() {
                let document: CatalogFile = serde_yaml_ng::from_str(contents)?;
                Ok(document.examples)
            } else {
                Err(Self::bad_shape())
            }
        }
    }

    fn bad_shape() -> FinderError {
        FinderError::Catalog(
            "expected a list of examples or a document with an 'examples' list".to_string(),
        )
    }

    fn is_json(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

/// Check catalog invariants, collecting every violation
pub fn validate_examples(examples: &[Example]) -> Result<()> {
    let mut problems = Vec::new();

    if examples.is_empty() {
        problems.push("catalog contains no examples".to_string());
    }

    let mut seen = HashSet::new();
    for (index, example) in examples.iter().enumerate() {
        if example.id.trim().is_empty() {
            problems.push(format!("example at index {} has an empty id", index));
        } else if !seen.insert(example.id.as_str()) {
            problems.push(format!("duplicate example id '{}'", example.id));
        }

        if example.title.trim().is_empty() {
            problems.push(format!("example '{}' has an empty title", example.id));
        }

        if example.categories.is_empty() {
            problems.push(format!("example '{}' has no categories", example.id));
        }

        if let Some(time) = &example.estimated_time {
            if !ESTIMATED_TIME.is_match(time.trim()) {
                problems.push(format!(
                    "example '{}' has malformed estimatedTime '{}' (expected \"N-M hours\" or \"N+ hours\")",
                    example.id, time
                ));
            }
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(FinderError::Validation(problems))
    }
}
