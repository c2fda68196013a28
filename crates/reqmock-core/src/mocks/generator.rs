//! Ready-made response generators.
//!
//! Each function returns a [`MockedResponseGenerator`] suitable for
//! [`MockRegistry::mock_response`](crate::mocks::registry::MockRegistry::mock_response).

use crate::mocks::error::MockError;
use crate::types::response::{MockedResponse, MockedResponseGenerator};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Status used by [`error`].
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// Always answers with `status_code` and a copy of `body`.
pub fn from_bytes(status_code: u16, body: impl Into<Vec<u8>>) -> MockedResponseGenerator {
    let body = body.into();
    Arc::new(move || MockedResponse::new(status_code, body.clone()))
}

pub fn from_string(status_code: u16, body: impl Into<String>) -> MockedResponseGenerator {
    from_bytes(status_code, body.into().into_bytes())
}

/// Reads `path` on every call.
///
/// Changes to the file between calls are visible. Open or read failures are
/// reported as [`MockError::Io`] with the configured status and an empty body.
pub fn from_file(status_code: u16, path: impl Into<PathBuf>) -> MockedResponseGenerator {
    let path = path.into();
    Arc::new(move || match read_file(&path) {
        Ok(contents) => MockedResponse::new(status_code, contents),
        Err(source) => MockedResponse::error(
            status_code,
            MockError::Io {
                path: path.clone(),
                source,
            },
        ),
    })
}

/// Always answers with a 500 and [`MockError::Injected`].
pub fn error() -> MockedResponseGenerator {
    Arc::new(|| MockedResponse::error(INTERNAL_SERVER_ERROR, MockError::Injected))
}

fn read_file(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut contents = Vec::new();
    file.read_to_end(&mut contents)?;
    Ok(contents)
}
