//! Mocked response values.

use crate::mocks::error::MockError;
use std::sync::Arc;

/// Outcome of one mocked call: status, body and an optional error.
#[derive(Debug, Default)]
pub struct MockedResponse {
    /// Raw response body
    pub body: Vec<u8>,
    /// HTTP status code
    pub status_code: u16,
    /// Error handed back to the caller alongside the response
    pub error: Option<MockError>,
}

impl MockedResponse {
    pub fn new(status_code: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            status_code,
            error: None,
        }
    }

    /// Response with an empty body carrying `error`.
    pub fn error(status_code: u16, error: MockError) -> Self {
        Self {
            body: Vec::new(),
            status_code,
            error: Some(error),
        }
    }
}

/// Produces a fresh [`MockedResponse`] every time a mocked endpoint is hit.
pub type MockedResponseGenerator = Arc<dyn Fn() -> MockedResponse + Send + Sync>;

/// Response metadata reported to the request path in place of a real response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResponseMeta {
    pub status_code: u16,
    pub content_length: u64,
}

/// Result of a lookup that hit a registered mock.
#[derive(Debug)]
pub struct InjectedResponse {
    pub meta: ResponseMeta,
    pub body: Vec<u8>,
    pub error: Option<MockError>,
}

impl From<MockedResponse> for InjectedResponse {
    fn from(response: MockedResponse) -> Self {
        Self {
            meta: ResponseMeta {
                status_code: response.status_code,
                content_length: response.body.len() as u64,
            },
            body: response.body,
            error: response.error,
        }
    }
}
