//! Registry key derived from an HTTP verb and URL.

use std::fmt;

/// Lookup key for a mocked endpoint.
///
/// Built as `"{verb}_{url}"` from the exact strings supplied. No case folding
/// or URL normalization is applied, so `GET` and `get` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MockKey(String);

impl MockKey {
    pub fn new(verb: &str, url: &str) -> Self {
        Self(format!("{verb}_{url}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
