//! Rule registry.
//!
//! The [`RuleRegistry`] stores the rules in execution order. Order only
//! affects how the report reads, never the verdict.

use super::rule::{RuleId, ScanRule};
use super::rules::{
    BackupRule, CredentialsRule, DatastoreRule, DebugModeRule, DependencyPinningRule,
    DockerfileRule, EnvFileRule, IgnoreFileRule, ProxyHeadersRule, SqlInjectionRule,
};
use crate::error::{Result, ShipcheckError};

/// Ordered collection of scan rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn ScanRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules, in report order.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(EnvFileRule));
        registry.register(Box::new(CredentialsRule));
        registry.register(Box::new(IgnoreFileRule));
        registry.register(Box::new(DebugModeRule));
        registry.register(Box::new(DependencyPinningRule));
        registry.register(Box::new(SqlInjectionRule));
        registry.register(Box::new(DockerfileRule));
        registry.register(Box::new(ProxyHeadersRule));
        registry.register(Box::new(DatastoreRule));
        registry.register(Box::new(BackupRule));
        registry
    }

    /// Register a rule. A rule with the same id is replaced in place.
    pub fn register(&mut self, rule: Box<dyn ScanRule>) {
        let id = rule.id();
        match self.rules.iter().position(|r| r.id() == id) {
            Some(idx) => self.rules[idx] = rule,
            None => self.rules.push(rule),
        }
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn ScanRule> {
        self.rules
            .iter()
            .find(|r| &r.id() == id)
            .map(|r| r.as_ref())
    }

    /// Fail with `UnknownRule` for the first id that is not registered.
    pub fn ensure_known<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Result<()> {
        for id in ids {
            if self.get(&RuleId::new(id)).is_none() {
                return Err(ShipcheckError::UnknownRule { id: id.to_string() });
            }
        }
        Ok(())
    }

    /// Iterate over all rules in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn ScanRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{Finding, ScanContext};

    struct MockRule {
        id: RuleId,
        name: &'static str,
    }

    impl ScanRule for MockRule {
        fn id(&self) -> RuleId {
            self.id.clone()
        }
        fn name(&self) -> &str {
            self.name
        }
        fn description(&self) -> &str {
            "A mock rule for testing"
        }
        fn check(&self, _ctx: &ScanContext) -> Result<Vec<Finding>> {
            Ok(vec![])
        }
    }

    fn mock(id: &str, name: &'static str) -> Box<MockRule> {
        Box::new(MockRule {
            id: RuleId::new(id),
            name,
        })
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry = RuleRegistry::new();
        registry.register(mock("mock", "Mock"));

        assert!(!registry.is_empty());
        assert!(registry.get(&RuleId::new("mock")).is_some());
        assert!(registry.get(&RuleId::new("unknown")).is_none());
    }

    #[test]
    fn registry_preserves_registration_order() {
        let mut registry = RuleRegistry::new();
        registry.register(mock("b", "B"));
        registry.register(mock("a", "A"));
        registry.register(mock("c", "C"));

        let ids: Vec<_> = registry.iter().map(|r| r.id().0).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn registering_same_id_replaces_in_place() {
        let mut registry = RuleRegistry::new();
        registry.register(mock("a", "First"));
        registry.register(mock("b", "B"));
        registry.register(mock("a", "Second"));

        assert_eq!(registry.len(), 2);
        let first = registry.iter().next().unwrap();
        assert_eq!(first.name(), "Second");
    }

    #[test]
    fn ensure_known_rejects_unknown_ids() {
        let registry = RuleRegistry::with_builtins();

        assert!(registry.ensure_known(["backup", "sql-injection"]).is_ok());
        let err = registry.ensure_known(["backup", "nope"]).unwrap_err();
        assert!(matches!(err, ShipcheckError::UnknownRule { id } if id == "nope"));
    }

    #[test]
    fn registry_with_builtins_has_rules_in_report_order() {
        let registry = RuleRegistry::with_builtins();
        let ids: Vec<_> = registry.iter().map(|r| r.id().0).collect();

        assert_eq!(
            ids,
            vec![
                "env-file",
                "hardcoded-credentials",
                "ignore-file",
                "debug-mode",
                "dependency-pinning",
                "sql-injection",
                "dockerfile",
                "proxy-headers",
                "datastore",
                "backup",
            ]
        );
    }
}
