//! Ignore-file coverage of sensitive paths.

use crate::error::Result;
use crate::scan::{Finding, RuleId, ScanContext, ScanRule, Severity};

/// Checks the revision-control ignore file lists sensitive path patterns.
pub struct IgnoreFileRule;

impl ScanRule for IgnoreFileRule {
    fn id(&self) -> RuleId {
        RuleId::new("ignore-file")
    }

    fn name(&self) -> &str {
        "Ignore File"
    }

    fn description(&self) -> &str {
        "Checks the ignore file excludes env files, keys, dumps and logs"
    }

    fn check(&self, ctx: &ScanContext) -> Result<Vec<Finding>> {
        let config = ctx.config();
        let name = config.ignore_file.display();

        let Some(content) = ctx.read(&config.ignore_file)? else {
            return Ok(vec![Finding::new(
                self.id(),
                Severity::Issue,
                format!("{} not found", name),
            )]);
        };

        let missing: Vec<&str> = config
            .ignore_patterns
            .iter()
            .map(String::as_str)
            .filter(|pattern| !content.contains(pattern))
            .collect();

        if missing.is_empty() {
            Ok(vec![Finding::new(
                self.id(),
                Severity::Passed,
                format!("{} covers sensitive files", name),
            )])
        } else {
            Ok(vec![Finding::new(
                self.id(),
                Severity::Warning,
                format!("{} should include: {}", name, missing.join(", ")),
            )])
        }
    }
}
