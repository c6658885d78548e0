//! Error types for configuration and loading.
//!
//! The structural operations themselves never fail; these errors only come
//! from compiling path-replacement rules and reading configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while building path-replacement rules.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid path pattern \"{pattern}\": {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid path replacements: expected array, got {actual}")]
    InvalidRules { actual: String },

    #[error("invalid path replacement at index {index}: {source}")]
    InvalidRule {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors while loading values or configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl LoadError {
    /// Returns true if the error came from the filesystem rather than content.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            LoadError::FileNotFound { .. } | LoadError::ReadError { .. }
        )
    }
}
