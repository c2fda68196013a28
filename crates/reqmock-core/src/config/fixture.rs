//! Fixture manifests: mocks described in YAML/JSON/JSONC files.
//!
//! ```yaml
//! mocks:
//!   - method: GET
//!     url: http://api.local/users/1
//!     body: { "id": 1 }
//!   - method: GET
//!     url: http://api.local/avatar
//!     file: fixtures/avatar.png
//!   - method: POST
//!     url: http://api.local/users
//!     error: true
//! ```

use crate::config::error::ConfigError;
use crate::config::parser::read_config;
use crate::mocks::generator;
use crate::types::response::MockedResponseGenerator;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Status used when a definition does not set one.
pub const DEFAULT_STATUS: u16 = 200;

/// Top-level manifest document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureManifest {
    #[serde(default)]
    pub mocks: Vec<MockDefinition>,
}

/// One mocked endpoint as written in a manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MockDefinition {
    /// HTTP verb, matched exactly
    pub method: String,
    /// Request URL, matched exactly
    pub url: String,
    /// Response status (defaults to 200)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Inline body; strings are used verbatim, other values are serialized as JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    /// Body file, relative to the manifest's directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Answer with a 500 and an injected error
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub error: bool,
}

/// What a resolved fixture answers with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureResponse {
    Body { status: u16, body: Vec<u8> },
    File { status: u16, path: PathBuf },
    Error,
}

/// Definition with its body encoded and file path resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockFixture {
    pub method: String,
    pub url: String,
    pub response: FixtureResponse,
}

impl MockFixture {
    pub fn generator(&self) -> MockedResponseGenerator {
        match &self.response {
            FixtureResponse::Body { status, body } => generator::from_bytes(*status, body.clone()),
            FixtureResponse::File { status, path } => generator::from_file(*status, path.clone()),
            FixtureResponse::Error => generator::error(),
        }
    }
}

impl MockDefinition {
    /// Validate the definition and resolve `file` against `base_dir`.
    pub fn resolve(self, base_dir: &Path) -> Result<MockFixture, ConfigError> {
        let sources = [self.body.is_some(), self.file.is_some(), self.error]
            .into_iter()
            .filter(|set| *set)
            .count();
        if sources > 1 {
            return Err(ConfigError::InvalidMock {
                method: self.method,
                url: self.url,
                reason: "only one of body, file or error may be set".to_string(),
            });
        }

        let status = self.status.unwrap_or(DEFAULT_STATUS);
        let response = if self.error {
            if let Some(status) = self.status {
                warn!(method = %self.method, url = %self.url, status, "status ignored for error mock");
            }
            FixtureResponse::Error
        } else if let Some(file) = self.file {
            FixtureResponse::File {
                status,
                path: base_dir.join(file),
            }
        } else {
            let body = match self.body {
                None => Vec::new(),
                Some(Value::String(text)) => text.into_bytes(),
                Some(value) => serde_json::to_vec(&value)?,
            };
            FixtureResponse::Body { status, body }
        };

        Ok(MockFixture {
            method: self.method,
            url: self.url,
            response,
        })
    }
}

/// Load one manifest and resolve its definitions.
pub fn load_fixture_file(path: &Path) -> Result<Vec<MockFixture>, ConfigError> {
    let manifest: FixtureManifest = read_config(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    manifest
        .mocks
        .into_iter()
        .map(|definition| definition.resolve(base_dir))
        .collect()
}

/// Load every manifest matching the glob `pattern`, in path order.
pub fn load_fixtures(pattern: &str) -> Result<Vec<MockFixture>, ConfigError> {
    let mut paths = glob::glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
    paths.sort();

    let mut fixtures = Vec::new();
    for path in &paths {
        let loaded = load_fixture_file(path)?;
        debug!(path = %path.display(), count = loaded.len(), "loaded mock fixtures");
        fixtures.extend(loaded);
    }
    Ok(fixtures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use std::fs;

    fn definition(method: &str, url: &str) -> MockDefinition {
        MockDefinition {
            method: method.to_string(),
            url: url.to_string(),
            status: None,
            body: None,
            file: None,
            error: false,
        }
    }

    #[rstest]
    #[case(Some(json!("hello")), b"hello".to_vec())]
    #[case(Some(json!({"id": 1})), br#"{"id":1}"#.to_vec())]
    #[case(Some(json!([1, 2])), b"[1,2]".to_vec())]
    #[case(None, Vec::new())]
    fn test_resolve_body(#[case] body: Option<Value>, #[case] expected: Vec<u8>) {
        let mut def = definition("GET", "http://x/y");
        def.body = body;
        let fixture = def.resolve(Path::new(".")).expect("valid");
        assert_eq!(
            fixture.response,
            FixtureResponse::Body {
                status: DEFAULT_STATUS,
                body: expected
            }
        );
    }

    #[rstest]
    fn test_resolve_file_relative_to_manifest() {
        let mut def = definition("GET", "http://x/y");
        def.status = Some(206);
        def.file = Some(PathBuf::from("bodies/user.json"));
        let fixture = def.resolve(Path::new("/srv/mocks")).expect("valid");
        assert_eq!(
            fixture.response,
            FixtureResponse::File {
                status: 206,
                path: PathBuf::from("/srv/mocks/bodies/user.json")
            }
        );
    }

    #[rstest]
    fn test_resolve_error() {
        let mut def = definition("POST", "http://x/y");
        def.error = true;
        def.status = Some(418);
        let fixture = def.resolve(Path::new(".")).expect("valid");
        assert_eq!(fixture.response, FixtureResponse::Error);
        assert_eq!(fixture.generator()().status_code, 500);
    }

    #[rstest]
    #[case(Some(json!("x")), Some("a.json"), false)]
    #[case(Some(json!("x")), None, true)]
    #[case(None, Some("a.json"), true)]
    fn test_resolve_rejects_multiple_sources(
        #[case] body: Option<Value>,
        #[case] file: Option<&str>,
        #[case] error: bool,
    ) {
        let mut def = definition("GET", "http://x/y");
        def.body = body;
        def.file = file.map(PathBuf::from);
        def.error = error;
        assert!(matches!(
            def.resolve(Path::new(".")).unwrap_err(),
            ConfigError::InvalidMock { ref method, ref url, .. } if method == "GET" && url == "http://x/y"
        ));
    }

    #[rstest]
    fn test_manifest_rejects_unknown_fields() {
        let result: Result<FixtureManifest, _> =
            serde_yaml::from_str("mocks:\n  - method: GET\n    url: /a\n    bdy: oops\n");
        assert!(result.is_err());
    }

    #[rstest]
    fn test_load_fixtures_across_formats() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join("a.yaml"),
            "mocks:\n  - method: GET\n    url: http://x/a\n    body: hello\n  - method: POST\n    url: http://x/a\n    error: true\n",
        )
        .expect("write");
        fs::write(
            dir.path().join("b.jsonc"),
            "{\n  // users\n  \"mocks\": [{\"method\": \"GET\", \"url\": \"http://x/b\", \"status\": 404, \"file\": \"b.txt\"}]\n}",
        )
        .expect("write");

        let pattern = format!("{}/*.*", dir.path().display());
        let fixtures = load_fixtures(&pattern).expect("loads");
        assert_eq!(fixtures.len(), 3);
        assert_eq!(fixtures[0].url, "http://x/a");
        assert_eq!(fixtures[1].response, FixtureResponse::Error);
        assert_eq!(
            fixtures[2].response,
            FixtureResponse::File {
                status: 404,
                path: dir.path().join("b.txt")
            }
        );
    }

    #[rstest]
    fn test_load_fixtures_no_matches() {
        let dir = tempfile::tempdir().expect("temp dir");
        let pattern = format!("{}/*.yaml", dir.path().display());
        assert!(load_fixtures(&pattern).expect("loads").is_empty());
    }

    #[rstest]
    fn test_load_fixtures_invalid_pattern() {
        assert!(matches!(
            load_fixtures("[").unwrap_err(),
            ConfigError::Pattern(_)
        ));
    }

    #[rstest]
    fn test_load_fixture_file_unknown_type() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("mocks.toml");
        fs::write(&path, "mocks = []").expect("write");
        assert!(matches!(
            load_fixture_file(&path).unwrap_err(),
            ConfigError::UnknownFileType(_)
        ));
    }
}
