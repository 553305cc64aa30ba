//! Debug-mode exposure in the application entry point.

use regex::Regex;

use crate::error::Result;
use crate::scan::{Finding, RuleId, ScanContext, ScanRule, Severity};

/// Debug flag hardcoded at the framework run call. `[^)]` spans lines, so
/// multi-line calls are caught.
const DEBUG_RUN_PATTERN: &str = r"app\.run\([^)]*debug\s*=\s*True";

/// Markers of debug mode being driven by the environment.
const ENV_READ_MARKER: &str = "os.getenv";
const ENV_NAME_MARKER: &str = "FLASK_ENV";

/// Flags a hardcoded debug flag and rewards environment-driven debug control.
///
/// The two signals are independent: a file may earn both the issue and the
/// pass, and a file with neither produces nothing.
pub struct DebugModeRule;

impl ScanRule for DebugModeRule {
    fn id(&self) -> RuleId {
        RuleId::new("debug-mode")
    }

    fn name(&self) -> &str {
        "Debug Mode"
    }

    fn description(&self) -> &str {
        "Detects debug=True at the app.run() call in the entry point"
    }

    fn check(&self, ctx: &ScanContext) -> Result<Vec<Finding>> {
        let entry_point = &ctx.config().entry_point;

        let Some(content) = ctx.read(entry_point)? else {
            return Ok(vec![Finding::new(
                self.id(),
                Severity::Warning,
                format!("{} not found; debug mode not verified", entry_point.display()),
            )]);
        };

        let mut findings = Vec::new();

        let debug_run = Regex::new(DEBUG_RUN_PATTERN).map_err(anyhow::Error::from)?;
        if debug_run.is_match(&content) {
            findings.push(Finding::new(
                self.id(),
                Severity::Issue,
                "app.run() called with debug=True may reach production",
            ));
        }

        if content.contains(ENV_READ_MARKER) && content.contains(ENV_NAME_MARKER) {
            findings.push(Finding::new(
                self.id(),
                Severity::Passed,
                "Debug mode controlled by environment variable",
            ));
        }

        Ok(findings)
    }
}
