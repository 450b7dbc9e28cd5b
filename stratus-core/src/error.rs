//! Template error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading, decoding or writing a template
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Malformed JSON, or a JSON document that does not fit the model
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A resource envelope without a `Type` key
    #[error("Resource '{0}' has no Type")]
    MissingType(String),

    /// A resource of a registered type that failed to decode
    #[error("Invalid resource '{logical_id}' ({type_name}): {source}")]
    InvalidResource {
        logical_id: String,
        type_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource '{logical_id}' type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        logical_id: String,
        expected: String,
        actual: String,
    },

    #[error("Unsupported template format: {0}")]
    UnsupportedFormat(String),

    /// A YAML construct with no JSON equivalent (e.g. a non-string map key)
    #[error("Unsupported YAML: {0}")]
    UnsupportedYaml(String),
}

impl TemplateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn not_found(logical_id: impl Into<String>) -> Self {
        Self::NotFound(logical_id.into())
    }

    pub fn type_mismatch(
        logical_id: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            logical_id: logical_id.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

pub type TemplateResult<T> = Result<T, TemplateError>;
