//! Scan configuration discovery and loading.
//!
//! The configuration file is optional. An explicitly requested file must
//! exist; a discovered one is used only when present.

use crate::config::schema::ScanConfig;
use crate::error::{Result, ShipcheckError};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the per-project scan configuration.
pub const CONFIG_FILE_NAME: &str = ".shipcheck.yml";

/// Find the scan configuration at the project root.
pub fn discover_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
/// Returns `ConfigValidationError` if values are out of range.
pub fn load_config_file(path: &Path) -> Result<ScanConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ShipcheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ShipcheckError::Io(e)
        }
    })?;

    let config = parse_config(&content, path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse YAML content into a [`ScanConfig`].
///
/// An empty or comment-only document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ScanConfig> {
    let parse_error = |e: serde_yaml::Error| ShipcheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    };

    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(parse_error)?;
    if value.is_null() {
        return Ok(ScanConfig::default());
    }
    serde_yaml::from_value(value).map_err(parse_error)
}

/// Check values serde cannot check.
pub fn validate(config: &ScanConfig) -> Result<()> {
    let extension = config.source_extension.trim();
    if extension.is_empty() {
        return Err(ShipcheckError::ConfigValidationError {
            message: "source_extension must not be empty".to_string(),
        });
    }
    if extension.starts_with('.') {
        return Err(ShipcheckError::ConfigValidationError {
            message: format!(
                "source_extension should not start with a dot (use \"{}\")",
                extension.trim_start_matches('.')
            ),
        });
    }
    Ok(())
}

/// Load the configuration for a project.
///
/// Uses `config_override` when given (it must exist), otherwise the
/// discovered `.shipcheck.yml`, otherwise the defaults.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ScanConfig> {
    let path = match config_override {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(project_root),
    };

    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading scan configuration");
            load_config_file(&path)
        }
        None => {
            tracing::debug!("no scan configuration found, using defaults");
            Ok(ScanConfig::default())
        }
    }
}
