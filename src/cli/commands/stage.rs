//! Stage command implementation.
//!
//! The `shipcheck stage` command resolves the configuration the application
//! would run with in a deployment stage and validates it. Production
//! requires database credentials and a non-default secret key.

use std::path::{Path, PathBuf};

use crate::cli::args::StageArgs;
use crate::config::{load_config, StageConfig};
use crate::error::{Result, ShipcheckError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The stage command implementation.
pub struct StageCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: StageArgs,
}

impl StageCommand {
    /// Create a new stage command.
    pub fn new(project_root: &Path, args: StageArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: None,
            args,
        }
    }

    /// Use an explicit scan config file.
    pub fn with_config(mut self, config_path: Option<&Path>) -> Self {
        self.config_path = config_path.map(Path::to_path_buf);
        self
    }

    fn show(&self, config: &StageConfig, ui: &mut dyn UserInterface) {
        let optional = |v: &Option<String>| v.clone().unwrap_or_else(|| "(unset)".to_string());
        let secret = if config.uses_default_secret() {
            "(default)"
        } else {
            "(set)"
        };

        let rows = [
            ("debug", config.debug.to_string()),
            ("testing", config.testing.to_string()),
            ("secret_key", secret.to_string()),
            (
                "database",
                format!(
                    "{}@{}:{}/{}",
                    optional(&config.mysql_user),
                    config.mysql_host,
                    config.mysql_port,
                    optional(&config.mysql_db)
                ),
            ),
            ("listen", format!("{}:{}", config.host, config.port)),
            (
                "session_cookie_secure",
                config.session_cookie_secure.to_string(),
            ),
            ("log_level", config.log_level.clone()),
        ];

        for (key, value) in rows {
            ui.message(&format!("  {:<22} {}", key, value));
        }
    }
}

impl Command for StageCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let scan_config = load_config(&self.project_root, self.config_path.as_deref())?;
        let env_file = self.project_root.join(&scan_config.env_file);

        match StageConfig::load(self.args.stage.as_deref(), &env_file) {
            Ok(config) => {
                ui.success(&format!("Stage configuration valid: {}", config.stage));
                if config.uses_default_secret() {
                    ui.warning(
                        "FLASK_SECRET_KEY is the built-in default; production will reject it",
                    );
                }
                self.show(&config, ui);
                Ok(CommandResult::success())
            }
            Err(ShipcheckError::ConfigurationInvalid { message }) => {
                ui.error(&format!("Invalid stage configuration: {}", message));
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
