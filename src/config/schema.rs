//! Scan configuration schema.
//!
//! [`ScanConfig`] maps to the optional `.shipcheck.yml` file at the
//! project root. Every key is optional; missing keys take the defaults of a
//! conventional Flask + Docker + nginx layout.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where each artifact lives and which rules run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Source files scanned for hardcoded credentials.
    pub credential_files: Vec<PathBuf>,

    /// Application entry point checked for debug mode.
    pub entry_point: PathBuf,

    /// Directory scanned recursively for SQL construction.
    pub app_dir: PathBuf,

    /// Extension (without dot) of source files under `app_dir`.
    pub source_extension: String,

    /// Environment file.
    pub env_file: PathBuf,

    /// Substrings that mark an unfilled environment file.
    pub placeholder_markers: Vec<String>,

    /// Revision-control ignore file.
    pub ignore_file: PathBuf,

    /// Patterns the ignore file must mention.
    pub ignore_patterns: Vec<String>,

    /// Dependency manifest.
    pub manifest: PathBuf,

    /// Container build file.
    pub dockerfile: PathBuf,

    /// Reverse-proxy configuration.
    pub proxy_config: PathBuf,

    /// Orchestration manifest.
    pub compose_file: PathBuf,

    /// Backup script.
    pub backup_script: PathBuf,

    /// Deploy helper that can generate a backup script.
    pub deploy_helper: PathBuf,

    /// Rule ids to skip.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disabled_rules: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            credential_files: vec![
                PathBuf::from("app/app.py"),
                PathBuf::from("app/login.py"),
                PathBuf::from("config.py"),
            ],
            entry_point: PathBuf::from("app/app.py"),
            app_dir: PathBuf::from("app"),
            source_extension: "py".to_string(),
            env_file: PathBuf::from(".env"),
            placeholder_markers: strings(&["seu_", "your_", "<", "{"]),
            ignore_file: PathBuf::from(".gitignore"),
            ignore_patterns: strings(&[".env", "*.pem", "*.key", "*.sql", "logs/"]),
            manifest: PathBuf::from("requirements.txt"),
            dockerfile: PathBuf::from("Dockerfile"),
            proxy_config: PathBuf::from("nginx.conf"),
            compose_file: PathBuf::from("docker-compose.yml"),
            backup_script: PathBuf::from("backup.sh"),
            deploy_helper: PathBuf::from("deploy.py"),
            disabled_rules: Vec::new(),
        }
    }
}

impl ScanConfig {
    /// Whether the rule with `id` is disabled.
    pub fn is_disabled(&self, id: &str) -> bool {
        self.disabled_rules.iter().any(|r| r == id)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
