//! Rules command implementation.
//!
//! The `shipcheck rules` command lists the built-in rules (id, name and
//! description) in the order a scan runs them, marking those disabled by
//! the scan configuration.

use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::error::Result;
use crate::scan::RuleRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The rules command implementation.
pub struct RulesCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl RulesCommand {
    /// Create a new rules command.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: None,
        }
    }

    /// Use an explicit scan config file.
    pub fn with_config(mut self, config_path: Option<&Path>) -> Self {
        self.config_path = config_path.map(Path::to_path_buf);
        self
    }
}

impl Command for RulesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        let registry = RuleRegistry::with_builtins();
        registry.ensure_known(config.disabled_rules.iter().map(String::as_str))?;

        let width = registry
            .iter()
            .map(|rule| rule.id().as_str().len())
            .max()
            .unwrap_or(0);

        for rule in registry.iter() {
            let id = rule.id();
            let line = format!(
                "{:<width$}  {} - {}",
                id,
                rule.name(),
                rule.description(),
                width = width
            );
            if config.is_disabled(id.as_str()) {
                ui.message(&format!("{} (disabled)", line));
            } else {
                ui.message(&line);
            }
        }

        Ok(CommandResult::success())
    }
}
