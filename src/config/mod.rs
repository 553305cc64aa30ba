//! Configuration.
//!
//! Two independent pieces live here:
//!
//! - [`ScanConfig`]: where the scanned artifacts live and which rules run,
//!   loaded from an optional `.shipcheck.yml`
//! - [`StageConfig`]: the settings an application resolves for a
//!   [`DeploymentStage`], backing the `stage` command

pub mod env_file;
pub mod loader;
pub mod schema;
pub mod stage;

pub use env_file::EnvFileParser;
pub use loader::{discover_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::ScanConfig;
pub use stage::{DeploymentStage, StageConfig, DEFAULT_SECRET_KEY};
