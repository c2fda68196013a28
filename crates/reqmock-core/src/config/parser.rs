//! Manifest parsing (YAML/JSON/JSONC).

use crate::config::error::ConfigError;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Manifest file type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFileType {
    Yaml,
    Json,
    Jsonc,
    Unknown,
}

/// Get manifest file type from path extension
pub fn get_file_type(path: &Path) -> ConfigFileType {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yaml" | "yml" => ConfigFileType::Yaml,
        "json" => ConfigFileType::Json,
        "jsonc" => ConfigFileType::Jsonc,
        _ => ConfigFileType::Unknown,
    }
}

/// Strip `//` and `/* */` comments from JSONC content.
///
/// Comment markers inside string literals are kept. Line comments keep their
/// terminating newline so line numbers in parse errors stay accurate.
pub fn strip_json_comments(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            result.push(c);
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (c, chars.peek()) {
            ('"', _) => {
                in_string = true;
                result.push(c);
            }
            ('/', Some('/')) => {
                for c in chars.by_ref() {
                    if c == '\n' || c == '\r' {
                        result.push(c);
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            _ => result.push(c),
        }
    }

    result
}

/// Parse JSON content
pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Parse JSONC content (JSON with comments)
pub fn parse_jsonc<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    parse_json(&strip_json_comments(content))
}

/// Parse YAML content
pub fn parse_yaml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Parse manifest content based on the file type of `path`
pub fn parse_config<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T, ConfigError> {
    match get_file_type(path) {
        ConfigFileType::Yaml => parse_yaml(content),
        ConfigFileType::Json => parse_json(content),
        ConfigFileType::Jsonc => parse_jsonc(content),
        ConfigFileType::Unknown => Err(ConfigError::UnknownFileType(
            path.display().to_string(),
        )),
    }
}

/// Read and parse the manifest at `path`
pub fn read_config<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case("mocks.yaml", ConfigFileType::Yaml)]
    #[case("mocks.YAML", ConfigFileType::Yaml)]
    #[case("mocks.yml", ConfigFileType::Yaml)]
    #[case("mocks.json", ConfigFileType::Json)]
    #[case("mocks.JSON", ConfigFileType::Json)]
    #[case("mocks.jsonc", ConfigFileType::Jsonc)]
    #[case("dir.d/mocks.txt", ConfigFileType::Unknown)]
    #[case("mocks", ConfigFileType::Unknown)]
    #[case("", ConfigFileType::Unknown)]
    fn test_get_file_type(#[case] path: &str, #[case] expected: ConfigFileType) {
        assert_eq!(get_file_type(Path::new(path)), expected);
    }

    #[rstest]
    #[case(r#"{"a": 1}"#, r#"{"a": 1}"#)]
    #[case("{\"a\": 1} // trailing", "{\"a\": 1} ")]
    #[case("{\"a\": 1} /* block */", "{\"a\": 1} ")]
    #[case("// head\n{\"a\": 1}", "\n{\"a\": 1}")]
    #[case("{/* x */\"a\": /* y */ 1}", "{\"a\":  1}")]
    #[case("{\"a\": 1} /* multi\nline */", "{\"a\": 1} ")]
    fn test_strip_json_comments(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_json_comments(input), expected);
    }

    #[rstest]
    #[case(r#"{"url": "http://x/y"}"#)]
    #[case(r#"{"body": "/* not a comment */"}"#)]
    #[case(r#"{"body": "quote \" // still string"}"#)]
    #[case(r#"{"body": "backslash \\"} // comment"#)]
    fn test_strip_json_comments_respects_strings(#[case] input: &str) {
        let stripped = strip_json_comments(input);
        let value: Value = serde_json::from_str(&stripped).expect("valid json after stripping");
        assert!(value.is_object());
        if !input.contains("} //") {
            assert_eq!(stripped, input);
        }
    }

    #[rstest]
    fn test_parse_jsonc_valid() {
        let content = "{\n  // the id\n  \"id\": \"test\" /* inline */\n}";
        let value: Value = parse_jsonc(content).expect("should parse");
        assert_eq!(value["id"], "test");
    }

    #[rstest]
    fn test_parse_json_invalid() {
        let result: Result<Value, _> = parse_json("invalid json");
        assert!(matches!(result.unwrap_err(), ConfigError::Json(_)));
    }

    #[rstest]
    fn test_parse_yaml_invalid() {
        let result: Result<Value, _> = parse_yaml("invalid: yaml: [");
        assert!(matches!(result.unwrap_err(), ConfigError::Yaml(_)));
    }

    #[rstest]
    #[case("mocks.yaml", "id: test")]
    #[case("mocks.json", r#"{"id": "test"}"#)]
    #[case("mocks.jsonc", r#"{"id": "test"} // c"#)]
    fn test_parse_config_by_extension(#[case] path: &str, #[case] content: &str) {
        let value: Value = parse_config(content, Path::new(path)).expect("should parse");
        assert_eq!(value["id"], "test");
    }

    #[rstest]
    #[case("mocks.txt")]
    #[case("")]
    fn test_parse_config_unknown_file_type(#[case] path: &str) {
        let result: Result<Value, _> = parse_config(r#"{"id": "test"}"#, Path::new(path));
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::UnknownFileType(_)
        ));
    }

    #[rstest]
    fn test_read_config_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing.yaml");
        let result: Result<Value, _> = read_config(&path);
        match result.unwrap_err() {
            ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
