//! Unsafe SQL construction in application sources.

use crate::error::Result;
use crate::scan::{
    CaseMode, Finding, Location, PatternSet, RuleId, ScanContext, ScanRule, Severity,
};

/// Query-construction shapes that splice values into SQL text. Matched
/// case-sensitively against single lines.
///
/// The f-string shape anchors the `f`/`rf` prefix right after the opening
/// parenthesis; a shape like `["'].*f["']` only matches a literal that ends
/// in `f` and misses `cursor.execute(f"...")`. The concatenation shape
/// matches one whole single- or double-quoted literal followed by `+`, so a
/// quote of the other kind inside the literal does not end it.
pub const SQL_PATTERNS: &[(&str, &str)] = &[
    (
        r#"cursor\.execute\(["'].*\{.*\}.*["']\.format"#,
        "Possible SQL injection via str.format()",
    ),
    (
        r#"cursor\.execute\(\s*[fF][rR]?["']"#,
        "Possible SQL injection via f-string",
    ),
    (
        r#"cursor\.execute\(\s*(?:"[^"]*"|'[^']*')\s*\+"#,
        "Possible SQL injection via string concatenation",
    ),
];

/// Flags unsafe query construction anywhere under the application directory.
pub struct SqlInjectionRule;

impl ScanRule for SqlInjectionRule {
    fn id(&self) -> RuleId {
        RuleId::new("sql-injection")
    }

    fn name(&self) -> &str {
        "SQL Injection"
    }

    fn description(&self) -> &str {
        "Detects formatted, interpolated or concatenated SQL passed to cursor.execute()"
    }

    fn check(&self, ctx: &ScanContext) -> Result<Vec<Finding>> {
        let config = ctx.config();
        let patterns = PatternSet::compile(SQL_PATTERNS, CaseMode::Sensitive)?;

        let Some(sources) = ctx.source_files(&config.app_dir, &config.source_extension)? else {
            return Ok(vec![Finding::new(
                self.id(),
                Severity::Warning,
                format!(
                    "{} directory not found; SQL patterns not checked",
                    config.app_dir.display()
                ),
            )]);
        };

        let mut findings: Vec<Finding> = sources
            .errors
            .iter()
            .map(|err| Finding::new(self.id(), Severity::Warning, err.to_string()))
            .collect();
        let mut scanned = 0;
        let mut found = false;

        for rel in &sources.files {
            let content = match ctx.read(rel) {
                Ok(Some(content)) => content,
                Ok(None) => continue,
                Err(err) => {
                    findings.push(Finding::new(self.id(), Severity::Warning, err.to_string()));
                    continue;
                }
            };
            scanned += 1;
            tracing::debug!(file = %rel.display(), "scanning for SQL construction");

            for hit in patterns.scan_lines(&content) {
                found = true;
                findings.push(
                    Finding::new(self.id(), Severity::Issue, hit.message)
                        .with_location(Location::line(rel, hit.line)),
                );
            }
        }

        if scanned == 0 && findings.is_empty() {
            findings.push(Finding::new(
                self.id(),
                Severity::Warning,
                format!(
                    "No .{} files found under {}; SQL patterns not checked",
                    config.source_extension,
                    config.app_dir.display()
                ),
            ));
        } else if scanned > 0 && !found {
            findings.push(Finding::new(
                self.id(),
                Severity::Passed,
                "No SQL injection patterns detected",
            ));
        }

        Ok(findings)
    }
}
