//! Registry of mocked endpoints.
//!
//! `MockRegistry` guards a [`MockState`] with a single mutex. Every method on
//! the registry takes that lock for the duration of the call. The same
//! registration methods exist on `MockState` itself; they do no locking and
//! are reached only through [`MockRegistry::lock`] or [`MockRegistry::batch`],
//! so a batch of registrations pays for one lock acquisition.

use crate::config::error::ConfigError;
use crate::config::fixture::{load_fixtures, MockFixture};
use crate::mocks::error::LookupError;
use crate::mocks::generator;
use crate::types::key::MockKey;
use crate::types::response::{InjectedResponse, MockedResponse, MockedResponseGenerator};
use parking_lot::{Mutex, MutexGuard};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, trace};

/// Mock mode flag and registered generators.
///
/// Mock mode turns on with the first registration and stays on until
/// [`clear`](MockState::clear).
#[derive(Default)]
pub struct MockState {
    active: bool,
    mocks: HashMap<MockKey, MockedResponseGenerator>,
}

impl MockState {
    /// Register `generator` for `(verb, url)`, replacing any earlier one.
    pub fn mock_response<F>(&mut self, verb: &str, url: &str, generator: F)
    where
        F: Fn() -> MockedResponse + Send + Sync + 'static,
    {
        self.mock_generator(verb, url, Arc::new(generator));
    }

    /// Register an already shared generator for `(verb, url)`.
    pub fn mock_generator(&mut self, verb: &str, url: &str, generator: MockedResponseGenerator) {
        let key = MockKey::new(verb, url);
        debug!(%key, "registering mocked response");
        self.active = true;
        self.mocks.insert(key, generator);
    }

    pub fn mock_response_from_bytes(
        &mut self,
        verb: &str,
        url: &str,
        status_code: u16,
        body: impl Into<Vec<u8>>,
    ) {
        self.mock_generator(verb, url, generator::from_bytes(status_code, body));
    }

    pub fn mock_response_from_string(
        &mut self,
        verb: &str,
        url: &str,
        status_code: u16,
        body: impl Into<String>,
    ) {
        self.mock_generator(verb, url, generator::from_string(status_code, body));
    }

    /// Serve the contents of `path`, read fresh on every hit.
    pub fn mock_response_from_file(
        &mut self,
        verb: &str,
        url: &str,
        status_code: u16,
        path: impl Into<PathBuf>,
    ) {
        self.mock_generator(verb, url, generator::from_file(status_code, path));
    }

    /// Answer `(verb, url)` with a 500 and an injected error.
    pub fn mock_error(&mut self, verb: &str, url: &str) {
        self.mock_generator(verb, url, generator::error());
    }

    pub fn register_fixture(&mut self, fixture: &MockFixture) {
        self.mock_generator(&fixture.method, &fixture.url, fixture.generator());
    }

    /// Leave mock mode and drop every registration.
    pub fn clear(&mut self) {
        debug!(count = self.mocks.len(), "clearing mocked responses");
        self.active = false;
        self.mocks.clear();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn contains(&self, verb: &str, url: &str) -> bool {
        self.mocks.contains_key(&MockKey::new(verb, url))
    }

    pub fn len(&self) -> usize {
        self.mocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mocks.is_empty()
    }

    /// Generator to run for `(verb, url)`; `Ok(None)` while mock mode is off.
    fn resolve(&self, verb: &str, url: &str) -> Result<Option<MockedResponseGenerator>, LookupError> {
        if !self.active {
            return Ok(None);
        }
        self.mocks
            .get(&MockKey::new(verb, url))
            .map(|generator| Some(Arc::clone(generator)))
            .ok_or_else(|| LookupError::Unmocked {
                verb: verb.to_string(),
                url: url.to_string(),
            })
    }
}

impl fmt::Debug for MockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.mocks.keys().map(MockKey::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("MockState")
            .field("active", &self.active)
            .field("mocks", &keys)
            .finish()
    }
}

/// Thread-safe table of mocked endpoints.
#[derive(Debug, Default)]
pub struct MockRegistry {
    state: Mutex<MockState>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold the registry lock and work on the state directly.
    ///
    /// Calling any other `MockRegistry` method on the same thread while the
    /// guard is alive deadlocks.
    pub fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock()
    }

    /// Run `f` with the lock held once.
    pub fn batch<R>(&self, f: impl FnOnce(&mut MockState) -> R) -> R {
        f(&mut self.state.lock())
    }

    pub fn mock_response<F>(&self, verb: &str, url: &str, generator: F)
    where
        F: Fn() -> MockedResponse + Send + Sync + 'static,
    {
        self.state.lock().mock_response(verb, url, generator);
    }

    pub fn mock_generator(&self, verb: &str, url: &str, generator: MockedResponseGenerator) {
        self.state.lock().mock_generator(verb, url, generator);
    }

    pub fn mock_response_from_bytes(
        &self,
        verb: &str,
        url: &str,
        status_code: u16,
        body: impl Into<Vec<u8>>,
    ) {
        self.state
            .lock()
            .mock_response_from_bytes(verb, url, status_code, body);
    }

    pub fn mock_response_from_string(
        &self,
        verb: &str,
        url: &str,
        status_code: u16,
        body: impl Into<String>,
    ) {
        self.state
            .lock()
            .mock_response_from_string(verb, url, status_code, body);
    }

    pub fn mock_response_from_file(
        &self,
        verb: &str,
        url: &str,
        status_code: u16,
        path: impl Into<PathBuf>,
    ) {
        self.state
            .lock()
            .mock_response_from_file(verb, url, status_code, path);
    }

    pub fn mock_error(&self, verb: &str, url: &str) {
        self.state.lock().mock_error(verb, url);
    }

    /// Register every fixture under a single lock acquisition.
    ///
    /// Returns the number of fixtures registered. Later fixtures for the same
    /// key replace earlier ones.
    pub fn register_fixtures<'a>(
        &self,
        fixtures: impl IntoIterator<Item = &'a MockFixture>,
    ) -> usize {
        self.batch(|state| {
            let mut count = 0;
            for fixture in fixtures {
                state.register_fixture(fixture);
                count += 1;
            }
            debug!(count, "registered mock fixtures");
            count
        })
    }

    /// Load manifests matching `pattern` and register their fixtures.
    ///
    /// Nothing is registered if any manifest fails to load.
    pub fn register_fixture_files(&self, pattern: &str) -> Result<usize, ConfigError> {
        let fixtures = load_fixtures(pattern)?;
        Ok(self.register_fixtures(&fixtures))
    }

    pub fn clear(&self) {
        self.state.lock().clear();
    }

    pub fn is_active(&self) -> bool {
        self.state.lock().is_active()
    }

    pub fn len(&self) -> usize {
        self.state.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().is_empty()
    }

    /// Consult the registry before a real request is made.
    ///
    /// - `Ok(None)`: mock mode is off, perform the real request.
    /// - `Ok(Some(_))`: use the mocked response and skip the network.
    /// - `Err(_)`: mock mode is on but `(verb, url)` was never mocked.
    ///
    /// The generator runs after the registry lock is released.
    pub fn try_lookup(&self, verb: &str, url: &str) -> Result<Option<InjectedResponse>, LookupError> {
        let Some(generator) = self.state.lock().resolve(verb, url)? else {
            trace!(verb, url, "mock mode inactive, passing through");
            return Ok(None);
        };
        debug!(verb, url, "serving mocked response");
        Ok(Some(generator().into()))
    }

    /// Like [`try_lookup`](Self::try_lookup), but a missing mock is fatal.
    ///
    /// # Panics
    /// Panics with a message naming `verb` and `url` when mock mode is on and
    /// the endpoint has no registered mock.
    pub fn lookup(&self, verb: &str, url: &str) -> Option<InjectedResponse> {
        match self.try_lookup(verb, url) {
            Ok(response) => response,
            Err(err) => {
                error!(verb, url, "request to unmocked endpoint");
                panic!("{err}");
            }
        }
    }
}
