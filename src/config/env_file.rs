//! `.env` file parsing.
//!
//! Reads environment variable files in the `KEY=value` format used by the
//! deployment stage collaborator.

use crate::error::{Result, ShipcheckError};
use std::collections::HashMap;
use std::path::Path;

/// Parses `.env` files into a map of variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Exported: `export KEY=value`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
///
/// # Example
///
/// ```
/// use shipcheck::config::EnvFileParser;
///
/// let content = r#"
/// # Database
/// MYSQL_HOST=db.internal
/// export FLASK_ENV="production"
/// MYSQL_PASSWORD=
/// "#;
///
/// let vars = EnvFileParser::parse(content);
/// assert_eq!(vars.get("MYSQL_HOST"), Some(&"db.internal".to_string()));
/// assert_eq!(vars.get("FLASK_ENV"), Some(&"production".to_string()));
/// assert_eq!(vars.get("MYSQL_PASSWORD"), Some(&"".to_string()));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse env file content into a map of variables.
    ///
    /// Lines without `=` or with an empty key are ignored. Later
    /// assignments override earlier ones.
    pub fn parse(content: &str) -> HashMap<String, String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(Self::parse_line)
            .collect()
    }

    fn parse_line(line: &str) -> Option<(String, String)> {
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some((key.to_string(), Self::unquote(value.trim()).to_string()))
    }

    fn unquote(value: &str) -> &str {
        let quoted = value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')));
        if quoted {
            &value[1..value.len() - 1]
        } else {
            value
        }
    }

    /// Load and parse an env file, returning an empty map if it doesn't exist.
    pub fn load_optional(path: &Path) -> Result<HashMap<String, String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Self::parse(&content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(source) => Err(ShipcheckError::ArtifactRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
