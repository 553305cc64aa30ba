//! Scan command implementation.
//!
//! The `shipcheck scan` command runs every enabled rule against the project
//! and prints the report. The exit code is the verdict's.

use std::path::{Path, PathBuf};

use crate::cli::args::ScanArgs;
use crate::config::load_config;
use crate::error::{Result, ShipcheckError};
use crate::scan::{
    HumanFormatter, JsonFormatter, OutputFormat, Report, ScanContext, Scanner, Verdict,
};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The scan command implementation.
pub struct ScanCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    use_color: bool,
    args: ScanArgs,
}

impl ScanCommand {
    /// Create a new scan command.
    pub fn new(project_root: &Path, args: ScanArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: None,
            use_color: false,
            args,
        }
    }

    /// Use an explicit scan config file.
    pub fn with_config(mut self, config_path: Option<&Path>) -> Self {
        self.config_path = config_path.map(Path::to_path_buf);
        self
    }

    /// Enable or disable colored output for the human format.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ScanArgs {
        &self.args
    }

    fn render(&self, report: &Report) -> Result<(String, Verdict)> {
        let mut output = Vec::new();
        let verdict = match self.args.format {
            OutputFormat::Human => {
                report.render(&HumanFormatter::new(self.use_color), &mut output)?
            }
            OutputFormat::Json => report.render(&JsonFormatter::new(), &mut output)?,
        };
        let output = String::from_utf8_lossy(&output).trim_end().to_string();
        Ok((output, verdict))
    }
}

impl Command for ScanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.project_root.is_dir() {
            return Err(ShipcheckError::Other(anyhow::anyhow!(
                "project root {} is not a directory",
                self.project_root.display()
            )));
        }

        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        let ctx = ScanContext::new(&self.project_root, config);
        let scanner = Scanner::with_builtins();
        scanner.validate(&ctx)?;

        tracing::info!(root = %self.project_root.display(), "starting security scan");
        let report = scanner.collect(&ctx);
        let (output, verdict) = self.render(&report)?;
        ui.message(&output);

        tracing::debug!(%verdict, findings = report.findings().len(), "scan finished");
        Ok(CommandResult::from(verdict))
    }
}
