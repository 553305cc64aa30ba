//! Hardcoded credential detection.
//!
//! Scans the configured credential files line by line for password, API key
//! and secret literals.

use crate::error::Result;
use crate::scan::{
    CaseMode, Finding, Location, PatternSet, RuleId, ScanContext, ScanRule, Severity,
};

/// Credential patterns, matched case-insensitively.
///
/// The password value may not start with `<` or `{`, which keeps template
/// placeholders such as `"<your password>"` out of the results; the
/// character class already excludes both.
pub const CREDENTIAL_PATTERNS: &[(&str, &str)] = &[
    (
        r#"password\s*=\s*["'][\w@!#$%^&*]{8,}"#,
        "Possible hardcoded password",
    ),
    (
        r#"api[_-]?key\s*=\s*["'][a-zA-Z0-9]{20,}"#,
        "Possible hardcoded API key",
    ),
    (r#"secret\s*=\s*["'][\w\-]{20,}"#, "Possible hardcoded secret"),
];

/// Flags credential literals in source files.
pub struct CredentialsRule;

impl ScanRule for CredentialsRule {
    fn id(&self) -> RuleId {
        RuleId::new("hardcoded-credentials")
    }

    fn name(&self) -> &str {
        "Hardcoded Credentials"
    }

    fn description(&self) -> &str {
        "Detects password, API key and secret literals in source files"
    }

    fn check(&self, ctx: &ScanContext) -> Result<Vec<Finding>> {
        let patterns = PatternSet::compile(CREDENTIAL_PATTERNS, CaseMode::Insensitive)?;
        let files = &ctx.config().credential_files;

        let mut findings = Vec::new();
        let mut scanned = 0;
        let mut found = false;

        for rel in files {
            let content = match ctx.read(rel) {
                Ok(Some(content)) => content,
                Ok(None) => continue,
                Err(err) => {
                    findings.push(Finding::new(self.id(), Severity::Warning, err.to_string()));
                    continue;
                }
            };
            scanned += 1;
            tracing::debug!(file = %rel.display(), "scanning for credentials");

            for hit in patterns.scan_lines(&content) {
                found = true;
                findings.push(
                    Finding::new(self.id(), Severity::Issue, hit.message)
                        .with_location(Location::line(rel, hit.line)),
                );
            }
        }

        if scanned == 0 && findings.is_empty() {
            let names: Vec<_> = files.iter().map(|f| f.display().to_string()).collect();
            findings.push(Finding::new(
                self.id(),
                Severity::Warning,
                format!("No credential scan targets found ({})", names.join(", ")),
            ));
        } else if scanned > 0 && !found {
            findings.push(Finding::new(
                self.id(),
                Severity::Passed,
                "No hardcoded credentials detected",
            ));
        }

        Ok(findings)
    }
}
