use std::io;
use std::path::PathBuf;

/// Failure of a single JSON Schema → Avro translation.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The input text is not a JSON document.
    #[error("Error converting JSON Schema to Avro: {0}")]
    MalformedInput(#[from] serde_json::Error),
}

/// Errors from the schema registry and its stores.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Invalid JSON schema: {0}")]
    InvalidSchema(String),

    #[error("Schema with type '{schema_type}' and version '{version}' already exists")]
    AlreadyExists {
        schema_type: String,
        version: String,
    },

    #[error("Schema not found for type '{schema_type}' and version '{version}'")]
    NotFound {
        schema_type: String,
        version: String,
    },

    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Errors from converting a schema file or URL into an Avro schema file.
#[derive(Debug, thiserror::Error)]
pub enum ConvertFileError {
    #[error("HTTP fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Failed to read schema file {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Translate(#[from] TranslateError),
}
