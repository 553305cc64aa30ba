//! Deployment stage configuration.
//!
//! Resolves the typed settings an application would run with in a given
//! [`DeploymentStage`], from a `.env` file overlaid by the process
//! environment. The scanner never consults this module; it backs the
//! `stage` command.

use crate::config::env_file::EnvFileParser;
use crate::error::{Result, ShipcheckError};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Secret key used when none is configured. Rejected in production.
pub const DEFAULT_SECRET_KEY: &str = "dev-key-change-in-production";

/// Variable that selects the stage when none is given explicitly.
pub const STAGE_VAR: &str = "FLASK_ENV";

/// Database name forced for the testing stage.
pub const TEST_DATABASE: &str = "test_db";

const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &[
    "txt", "pdf", "png", "jpg", "jpeg", "gif", "xls", "xlsx", "doc", "docx",
];

/// A deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentStage {
    #[default]
    Development,
    Staging,
    Production,
    Testing,
}

impl DeploymentStage {
    /// All stages, in display order.
    pub const ALL: [DeploymentStage; 4] = [
        DeploymentStage::Development,
        DeploymentStage::Staging,
        DeploymentStage::Production,
        DeploymentStage::Testing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }

    /// Resolve the stage: explicit name, else `FLASK_ENV`, else development.
    pub fn resolve(explicit: Option<&str>, vars: &HashMap<String, String>) -> Result<Self> {
        match explicit.or_else(|| vars.get(STAGE_VAR).map(String::as_str)) {
            Some(name) if !name.trim().is_empty() => name.parse(),
            _ => Ok(Self::default()),
        }
    }
}

impl fmt::Display for DeploymentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentStage {
    type Err = ShipcheckError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str() == name)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|s| s.as_str()).collect();
                ShipcheckError::ConfigurationInvalid {
                    message: format!("unknown stage '{}'. Use: {}", s.trim(), valid.join(", ")),
                }
            })
    }
}

/// Application settings for one stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageConfig {
    pub stage: DeploymentStage,
    #[serde(skip_serializing)]
    pub secret_key: String,
    pub debug: bool,
    pub testing: bool,
    pub mysql_host: String,
    pub mysql_port: u16,
    pub mysql_user: Option<String>,
    #[serde(skip_serializing)]
    pub mysql_password: Option<String>,
    pub mysql_db: Option<String>,
    pub host: String,
    pub port: u16,
    pub session_cookie_secure: bool,
    pub session_cookie_httponly: bool,
    pub session_cookie_samesite: String,
    pub session_lifetime: Duration,
    pub max_content_length: u64,
    pub upload_folder: String,
    pub allowed_extensions: Vec<String>,
    pub log_level: String,
    pub log_file: String,
}

impl StageConfig {
    /// Build the configuration for `stage` from a variable map.
    ///
    /// Does not validate required fields; see [`StageConfig::validate`].
    pub fn from_vars(stage: DeploymentStage, vars: &HashMap<String, String>) -> Result<Self> {
        let get = |key: &str| vars.get(key).filter(|v| !v.is_empty()).cloned();
        let get_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let (debug, testing, session_cookie_secure) = match stage {
            DeploymentStage::Development => (true, false, false),
            DeploymentStage::Staging => (false, false, true),
            DeploymentStage::Production => (false, false, true),
            DeploymentStage::Testing => (true, true, false),
        };

        let mysql_db = match stage {
            DeploymentStage::Testing => Some(TEST_DATABASE.to_string()),
            _ => get("MYSQL_DB"),
        };

        Ok(Self {
            stage,
            secret_key: get_or("FLASK_SECRET_KEY", DEFAULT_SECRET_KEY),
            debug,
            testing,
            mysql_host: get_or("MYSQL_HOST", "localhost"),
            mysql_port: parse_number(vars, "MYSQL_PORT", 3306)?,
            mysql_user: get("MYSQL_USER"),
            mysql_password: get("MYSQL_PASSWORD"),
            mysql_db,
            host: get_or("HOST", "127.0.0.1"),
            port: parse_number(vars, "PORT", 5000)?,
            session_cookie_secure,
            session_cookie_httponly: true,
            session_cookie_samesite: "Lax".to_string(),
            session_lifetime: Duration::from_secs(24 * 60 * 60),
            max_content_length: parse_number(vars, "MAX_CONTENT_LENGTH", 52_428_800)?,
            upload_folder: get_or("UPLOAD_FOLDER", "app/static/uploads"),
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            log_level: get_or("LOG_LEVEL", "INFO"),
            log_file: get_or("LOG_FILE", "logs/app.log"),
        })
    }

    /// Resolve and validate the configuration for a project.
    ///
    /// Variables come from `env_file` (if present) overlaid by the process
    /// environment.
    pub fn load(explicit_stage: Option<&str>, env_file: &Path) -> Result<Self> {
        let mut vars = EnvFileParser::load_optional(env_file)?;
        vars.extend(std::env::vars());
        Self::resolve(explicit_stage, &vars)
    }

    /// Resolve and validate the configuration from a variable map.
    pub fn resolve(explicit_stage: Option<&str>, vars: &HashMap<String, String>) -> Result<Self> {
        let stage = DeploymentStage::resolve(explicit_stage, vars)?;
        tracing::debug!(%stage, "resolving stage configuration");
        let config = Self::from_vars(stage, vars)?;
        config.validate()?;
        Ok(config)
    }

    /// Names of required production variables that are unset or empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("MYSQL_USER", self.mysql_user.as_deref()),
            ("MYSQL_PASSWORD", self.mysql_password.as_deref()),
            ("MYSQL_DB", self.mysql_db.as_deref()),
            ("MYSQL_HOST", Some(self.mysql_host.as_str())),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none_or(str::is_empty))
        .map(|(name, _)| name)
        .collect()
    }

    /// Whether the secret key is still the built-in default.
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }

    /// Reject production configurations with missing or insecure values.
    ///
    /// Other stages always validate.
    pub fn validate(&self) -> Result<()> {
        if self.stage != DeploymentStage::Production {
            return Ok(());
        }

        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(ShipcheckError::ConfigurationInvalid {
                message: format!(
                    "required in production but not set: {}",
                    missing.join(", ")
                ),
            });
        }

        if self.uses_default_secret() {
            return Err(ShipcheckError::ConfigurationInvalid {
                message: "FLASK_SECRET_KEY must not be the default key in production".to_string(),
            });
        }

        Ok(())
    }
}

fn parse_number<T: FromStr>(vars: &HashMap<String, String>, key: &str, default: T) -> Result<T> {
    match vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty()) {
        Some(raw) => raw
            .parse()
            .map_err(|_| ShipcheckError::ConfigurationInvalid {
                message: format!("{} must be a number, got '{}'", key, raw),
            }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn production_vars() -> HashMap<String, String> {
        vars(&[
            ("MYSQL_USER", "app"),
            ("MYSQL_PASSWORD", "s3cret-pass"),
            ("MYSQL_DB", "app"),
            ("MYSQL_HOST", "db"),
            ("FLASK_SECRET_KEY", "a-real-secret"),
        ])
    }

    #[test]
    fn stage_parses_case_insensitively() {
        assert_eq!(
            "PRODUCTION".parse::<DeploymentStage>().unwrap(),
            DeploymentStage::Production
        );
        assert_eq!(
            " Staging ".parse::<DeploymentStage>().unwrap(),
            DeploymentStage::Staging
        );
    }

    #[test]
    fn unknown_stage_lists_valid_names() {
        let err = "qa".parse::<DeploymentStage>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("qa"));
        assert!(msg.contains("development, staging, production, testing"));
    }

    #[test]
    fn stage_resolution_order() {
        let env = vars(&[("FLASK_ENV", "staging")]);

        assert_eq!(
            DeploymentStage::resolve(Some("testing"), &env).unwrap(),
            DeploymentStage::Testing
        );
        assert_eq!(
            DeploymentStage::resolve(None, &env).unwrap(),
            DeploymentStage::Staging
        );
        assert_eq!(
            DeploymentStage::resolve(None, &HashMap::new()).unwrap(),
            DeploymentStage::Development
        );
    }

    #[test]
    fn development_defaults() {
        let config = StageConfig::from_vars(DeploymentStage::Development, &HashMap::new()).unwrap();

        assert!(config.debug);
        assert!(!config.session_cookie_secure);
        assert_eq!(config.mysql_host, "localhost");
        assert_eq!(config.mysql_port, 3306);
        assert_eq!(config.port, 5000);
        assert_eq!(config.max_content_length, 52_428_800);
        assert_eq!(config.session_lifetime, Duration::from_secs(86_400));
        assert!(config.uses_default_secret());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn testing_forces_test_database() {
        let env = vars(&[("MYSQL_DB", "real_db")]);
        let config = StageConfig::from_vars(DeploymentStage::Testing, &env).unwrap();

        assert!(config.debug);
        assert!(config.testing);
        assert_eq!(config.mysql_db.as_deref(), Some(TEST_DATABASE));
    }

    #[test]
    fn staging_uses_secure_cookies() {
        let config = StageConfig::from_vars(DeploymentStage::Staging, &HashMap::new()).unwrap();
        assert!(!config.debug);
        assert!(config.session_cookie_secure);
    }

    #[test]
    fn missing_required_names_empty_fields() {
        let env = vars(&[("MYSQL_USER", "app"), ("MYSQL_PASSWORD", "")]);
        let config = StageConfig::from_vars(DeploymentStage::Production, &env).unwrap();

        assert_eq!(config.missing_required(), vec!["MYSQL_PASSWORD", "MYSQL_DB"]);
    }

    #[test]
    fn production_rejects_missing_fields() {
        let err = StageConfig::resolve(Some("production"), &HashMap::new()).unwrap_err();

        assert!(matches!(err, ShipcheckError::ConfigurationInvalid { .. }));
        assert!(err.to_string().contains("MYSQL_USER"));
    }

    #[test]
    fn production_rejects_default_secret() {
        let mut env = production_vars();
        env.remove("FLASK_SECRET_KEY");

        let err = StageConfig::resolve(Some("production"), &env).unwrap_err();
        assert!(err.to_string().contains("FLASK_SECRET_KEY"));
    }

    #[test]
    fn production_accepts_complete_config() {
        let config = StageConfig::resolve(Some("production"), &production_vars()).unwrap();

        assert_eq!(config.stage, DeploymentStage::Production);
        assert!(config.missing_required().is_empty());
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let env = vars(&[("PORT", "http")]);
        let err = StageConfig::from_vars(DeploymentStage::Development, &env).unwrap_err();

        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn load_overlays_env_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let env_file = temp.path().join(".env");
        std::fs::write(&env_file, "UPLOAD_FOLDER=/srv/uploads\n").unwrap();

        let config = StageConfig::load(Some("development"), &env_file).unwrap();
        assert_eq!(config.upload_folder, "/srv/uploads");
    }
}
