//! Loader Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Why a single alert entry was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Entry is not a JSON object
    #[error("Entry is not an object")]
    NotAnObject,

    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Field present with the wrong JSON type
    #[error("Field {field} must be a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    /// Field that is not part of an alert
    #[error("Unexpected field: {0}")]
    UnexpectedField(String),
}

/// Errors that abort loading a whole batch
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source file does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Source could not be read
    #[error("Failed to read alerts: {0}")]
    Io(#[from] std::io::Error),

    /// Source is not valid JSON
    #[error("Invalid JSON format: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Document lacks an `alerts` array
    #[error("Invalid JSON structure: {0}")]
    InvalidStructure(&'static str),
}
