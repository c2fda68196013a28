//! Error types produced by mocked endpoints and registry lookups.

use std::path::PathBuf;
use thiserror::Error;

/// Message carried by [`MockError::Injected`].
pub const INJECTED_ERROR_MESSAGE: &str =
    "Error! This is from request#MockError. If you don't want an error don't mock it.";

/// Error returned by a mocked endpoint as part of its response.
///
/// These are ordinary results handed back to the request path, not failures
/// of the registry itself.
#[derive(Debug, Error)]
pub enum MockError {
    /// Fixed error registered through `mock_error`
    #[error("{}", INJECTED_ERROR_MESSAGE)]
    Injected,
    /// Fixture file could not be opened or read
    #[error("failed to read mock response file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Error supplied by a hand-written generator
    #[error("{0}")]
    Custom(String),
}

/// Lookup failure: mocking is active but the endpoint was never mocked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("attempted to make service request w/o mocking endpoint: {verb} {url}")]
    Unmocked { verb: String, url: String },
}
