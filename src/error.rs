use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Catalog validation failed:\n{}", .0.join("\n"))]
    Validation(Vec<String>),

    #[error("Example not found: {0}")]
    ExampleNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Quiz error: {0}")]
    Quiz(String),

    #[error("Invalid value: {0}")]
    Parse(String),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, FinderError>;
