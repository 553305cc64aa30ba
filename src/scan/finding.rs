//! Scan findings.
//!
//! This module provides the [`Finding`] type, the unit of scanner output:
//! a severity-tagged message, optionally pinned to a `file:line` location.

use super::location::Location;
use super::rule::{RuleId, Severity};

/// One observation produced by a scan rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// The rule that produced this finding.
    pub rule_id: RuleId,
    /// Severity of this finding.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Optional source location.
    pub location: Option<Location>,
}

impl Finding {
    /// Create a new finding.
    pub fn new(rule_id: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            location: None,
        }
    }

    /// Attach a source location.
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Message as shown in reports, prefixed with `file:line` when located.
    pub fn display_message(&self) -> String {
        match &self.location {
            Some(loc) => format!("{} - {}", loc, self.message),
            None => self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finding_creation() {
        let finding = Finding::new(RuleId::new("test-rule"), Severity::Issue, "Test message");

        assert_eq!(finding.rule_id, RuleId::new("test-rule"));
        assert_eq!(finding.severity, Severity::Issue);
        assert_eq!(finding.message, "Test message");
        assert!(finding.location.is_none());
    }

    #[test]
    fn display_message_without_location() {
        let finding = Finding::new(RuleId::new("env-file"), Severity::Warning, ".env not found");
        assert_eq!(finding.display_message(), ".env not found");
    }

    #[test]
    fn display_message_with_location() {
        let finding = Finding::new(
            RuleId::new("hardcoded-credentials"),
            Severity::Issue,
            "Possible hardcoded password",
        )
        .with_location(Location::line("config.py", 7));

        assert_eq!(
            finding.display_message(),
            "config.py:7 - Possible hardcoded password"
        );
    }
}
