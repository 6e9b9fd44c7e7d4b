//! Error types for the I/O and ingestion boundaries.
//!
//! The evaluator itself never fails; these errors come from loading,
//! validating, persisting and configuring cases.

use thiserror::Error;

use crate::loaders::LoadError;
use crate::validation::ValidationError;

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid case: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    #[error("load error: {0}")]
    Load(#[from] LoadError),
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::Validation(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
