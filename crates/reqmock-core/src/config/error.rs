//! Error types for fixture manifest loading.

use std::path::PathBuf;
use thiserror::Error;

/// Fixture manifest loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Manifest could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Unknown file type
    #[error("Unknown file type: {0}")]
    UnknownFileType(String),
    /// Invalid glob pattern
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// Matched path could not be inspected
    #[error("glob error: {0}")]
    Glob(#[from] glob::GlobError),
    /// Fixture definition is inconsistent
    #[error("invalid mock {method} {url}: {reason}")]
    InvalidMock {
        method: String,
        url: String,
        reason: String,
    },
}
