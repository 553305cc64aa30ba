//! Backup strategy presence.

use crate::error::Result;
use crate::scan::{Finding, RuleId, ScanContext, ScanRule, Severity};

/// Checks a backup script or the deploy helper that generates one exists.
pub struct BackupRule;

impl ScanRule for BackupRule {
    fn id(&self) -> RuleId {
        RuleId::new("backup")
    }

    fn name(&self) -> &str {
        "Backup Strategy"
    }

    fn description(&self) -> &str {
        "Checks for a backup script or a deploy helper with backup support"
    }

    fn check(&self, ctx: &ScanContext) -> Result<Vec<Finding>> {
        let config = ctx.config();

        let finding = if ctx.exists(&config.backup_script) {
            Finding::new(self.id(), Severity::Passed, "Backup script found")
        } else if ctx.exists(&config.deploy_helper) {
            Finding::new(
                self.id(),
                Severity::Passed,
                format!("{} provides backup support", config.deploy_helper.display()),
            )
        } else {
            Finding::new(self.id(), Severity::Warning, "No automated backup script found")
        };

        Ok(vec![finding])
    }
}
