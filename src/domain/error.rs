use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MigrateError {
    /// Input text could not be decoded (malformed JSON, unreadable CSV).
    Parse(String),
    /// An operation was invoked without the data it needs loaded.
    Input(String),
    /// A record failed the mapping-boundary field check.
    Validation(String),
    /// An internal invariant was violated (e.g. misaligned sequences).
    Precondition(String),
    IoError(String),
}

impl fmt::Display for MigrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrateError::Parse(msg) => write!(f, "Parse error: {}", msg),
            MigrateError::Input(msg) => write!(f, "Input error: {}", msg),
            MigrateError::Validation(msg) => write!(f, "Validation error: {}", msg),
            MigrateError::Precondition(msg) => write!(f, "Precondition error: {}", msg),
            MigrateError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for MigrateError {}

impl From<std::io::Error> for MigrateError {
    fn from(err: std::io::Error) -> Self {
        MigrateError::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MigrateError>;
