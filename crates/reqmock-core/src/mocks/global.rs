//! Process-wide registry used by the request path.
//!
//! Test suites register mocks here and call [`clear_mocked_responses`]
//! between cases so state does not leak from one test into the next.

use crate::config::error::ConfigError;
use crate::mocks::registry::{MockRegistry, MockState};
use crate::types::response::{InjectedResponse, MockedResponse, MockedResponseGenerator};
use once_cell::sync::Lazy;
use parking_lot::MutexGuard;
use std::path::PathBuf;

static REGISTRY: Lazy<MockRegistry> = Lazy::new(MockRegistry::new);

pub fn global() -> &'static MockRegistry {
    &REGISTRY
}

/// Lock the process-wide registry for a batch of unlocked registrations.
pub fn lock_mocks() -> MutexGuard<'static, MockState> {
    REGISTRY.lock()
}

pub fn mock_response<F>(verb: &str, url: &str, generator: F)
where
    F: Fn() -> MockedResponse + Send + Sync + 'static,
{
    REGISTRY.mock_response(verb, url, generator);
}

pub fn mock_generator(verb: &str, url: &str, generator: MockedResponseGenerator) {
    REGISTRY.mock_generator(verb, url, generator);
}

pub fn mock_response_from_bytes(verb: &str, url: &str, status_code: u16, body: impl Into<Vec<u8>>) {
    REGISTRY.mock_response_from_bytes(verb, url, status_code, body);
}

pub fn mock_response_from_string(verb: &str, url: &str, status_code: u16, body: impl Into<String>) {
    REGISTRY.mock_response_from_string(verb, url, status_code, body);
}

pub fn mock_response_from_file(verb: &str, url: &str, status_code: u16, path: impl Into<PathBuf>) {
    REGISTRY.mock_response_from_file(verb, url, status_code, path);
}

pub fn mock_error(verb: &str, url: &str) {
    REGISTRY.mock_error(verb, url);
}

pub fn register_fixture_files(pattern: &str) -> Result<usize, ConfigError> {
    REGISTRY.register_fixture_files(pattern)
}

pub fn clear_mocked_responses() {
    REGISTRY.clear();
}

/// Hook for the request path, called right before real network I/O.
///
/// `None` means mock mode is off. See [`MockRegistry::lookup`] for the
/// panic on unmocked endpoints.
pub fn mocked_response_injector(verb: &str, url: &str) -> Option<InjectedResponse> {
    REGISTRY.lookup(verb, url)
}
