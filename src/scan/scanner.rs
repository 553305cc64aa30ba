//! Scan orchestration.
//!
//! A [`Scanner`] is built once per run. [`Scanner::collect`] consumes it,
//! runs every enabled rule exactly once in registry order and returns the
//! [`Report`]; rendering the report is the terminal step.

use super::artifact::ScanContext;
use super::registry::RuleRegistry;
use super::report::Report;
use crate::error::Result;

/// Runs a rule set against one project.
pub struct Scanner {
    registry: RuleRegistry,
}

impl Scanner {
    /// Create a scanner over `registry`.
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Create a scanner with the built-in rules.
    pub fn with_builtins() -> Self {
        Self::new(RuleRegistry::with_builtins())
    }

    /// The rules this scanner will run.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Check that every rule disabled in the configuration exists.
    pub fn validate(&self, ctx: &ScanContext) -> Result<()> {
        self.registry
            .ensure_known(ctx.config().disabled_rules.iter().map(String::as_str))
    }

    /// Run every enabled rule once and collect the findings.
    pub fn collect(self, ctx: &ScanContext) -> Report {
        let mut report = Report::new();

        for rule in self.registry.iter() {
            let id = rule.id();
            if ctx.config().is_disabled(id.as_str()) {
                tracing::debug!(rule = %id, "rule disabled by configuration");
                continue;
            }

            tracing::info!("Checking {}", rule.name().to_lowercase());
            let findings = rule.inspect(ctx);
            tracing::debug!(rule = %id, findings = findings.len(), "rule finished");
            report.extend(findings);
        }

        report
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;
    use crate::scan::{Finding, RuleId, ScanRule, Severity};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    struct CountingRule {
        id: &'static str,
        calls: Arc<AtomicUsize>,
    }

    impl ScanRule for CountingRule {
        fn id(&self) -> RuleId {
            RuleId::new(self.id)
        }
        fn name(&self) -> &str {
            "Counting"
        }
        fn description(&self) -> &str {
            "Counts invocations"
        }
        fn check(&self, _ctx: &ScanContext) -> Result<Vec<Finding>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Finding::new(self.id(), Severity::Passed, self.id)])
        }
    }

    #[test]
    fn invokes_each_rule_once_in_order() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = RuleRegistry::new();
        for id in ["first", "second", "third"] {
            registry.register(Box::new(CountingRule {
                id,
                calls: Arc::clone(&calls),
            }));
        }

        let ctx = ScanContext::new("/nonexistent", ScanConfig::default());
        let report = Scanner::new(registry).collect(&ctx);

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        let messages: Vec<_> = report.findings().iter().map(|f| f.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn skips_disabled_rules() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(CountingRule {
            id: "kept",
            calls: Arc::clone(&calls),
        }));
        registry.register(Box::new(CountingRule {
            id: "dropped",
            calls: Arc::clone(&calls),
        }));

        let config = ScanConfig {
            disabled_rules: vec!["dropped".to_string()],
            ..Default::default()
        };
        let ctx = ScanContext::new("/nonexistent", config);
        let report = Scanner::new(registry).collect(&ctx);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(report.findings().len(), 1);
        assert_eq!(report.findings()[0].message, "kept");
    }

    #[test]
    fn validate_rejects_unknown_disabled_rule() {
        let config = ScanConfig {
            disabled_rules: vec!["no-such-rule".to_string()],
            ..Default::default()
        };
        let ctx = ScanContext::new("/nonexistent", config);

        assert!(Scanner::with_builtins().validate(&ctx).is_err());
    }

    #[test]
    fn every_builtin_rule_reports_on_empty_project() {
        let temp = TempDir::new().unwrap();
        let ctx = ScanContext::new(temp.path(), ScanConfig::default());

        for rule in RuleRegistry::with_builtins().iter() {
            let findings = rule.inspect(&ctx);
            assert!(
                findings
                    .iter()
                    .any(|f| f.severity != Severity::Passed),
                "rule {} reported nothing actionable on an empty project",
                rule.id()
            );
        }
    }
}
