//! Test-time substitution of outbound HTTP calls.
//!
//! Handlers registered per `(verb, url)` synthesize the response the request
//! path would otherwise fetch from the network. Registering any handler turns
//! mock mode on; from then on every request must hit a registered handler.

pub mod config;
pub mod mocks;
pub mod types;

pub use config::error::ConfigError;
pub use config::fixture::{load_fixtures, MockDefinition, MockFixture};
pub use mocks::error::{LookupError, MockError};
pub use mocks::global::{
    clear_mocked_responses, global, lock_mocks, mock_error, mock_generator, mock_response,
    mock_response_from_bytes, mock_response_from_file, mock_response_from_string,
    mocked_response_injector, register_fixture_files,
};
pub use mocks::registry::{MockRegistry, MockState};
pub use types::key::MockKey;
pub use types::response::{InjectedResponse, MockedResponse, MockedResponseGenerator, ResponseMeta};
