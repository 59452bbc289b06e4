use crate::logging::{codes, Code};
use std::path::PathBuf;

/// Registry loading errors
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("No registry inputs were supplied")]
    NoInputs,

    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported registry file {}: expected .toml or .json", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid TOML in {}: {message}", path.display())]
    Toml { path: PathBuf, message: String },

    #[error("Invalid JSON in {}: {message}", path.display())]
    Json { path: PathBuf, message: String },

    #[error("Duplicate registry key '{key}' in {} and {}", first.display(), second.display())]
    DuplicateKey {
        key: String,
        first: PathBuf,
        second: PathBuf,
    },
}

impl LoadError {
    /// Get the appropriate error code for this error type
    pub fn error_code(&self) -> Code {
        match self {
            LoadError::NoInputs => codes::registry::NO_INPUTS,
            LoadError::Io { .. } => codes::registry::IO_ERROR,
            LoadError::UnsupportedFormat { .. } => codes::registry::UNSUPPORTED_FORMAT,
            LoadError::Toml { .. } | LoadError::Json { .. } => codes::registry::PARSE_ERROR,
            LoadError::DuplicateKey { .. } => codes::registry::DUPLICATE_KEY,
        }
    }
}
