//! Scan rule definitions.
//!
//! This module provides the core traits and types for defining scan rules:
//!
//! - [`ScanRule`] - The trait that all scan rules must implement
//! - [`RuleId`] - Unique identifier for a scan rule
//! - [`Severity`] - Severity of a finding (Passed, Warning, Issue)

use serde::Serialize;

use super::artifact::ScanContext;
use super::finding::Finding;
use crate::error::Result;

/// Unique identifier for a scan rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Confirmed-safe observation.
    Passed,
    /// Advisory hygiene gap.
    Warning,
    /// Blocking security defect.
    Issue,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Passed => write!(f, "passed"),
            Severity::Warning => write!(f, "warning"),
            Severity::Issue => write!(f, "issue"),
        }
    }
}

/// A rule that inspects one class of project artifact.
///
/// Rules are read-only with respect to the filesystem and independent of
/// each other. Implementors put the fallible work in [`ScanRule::check`];
/// the scanner calls [`ScanRule::inspect`], which turns any error into a
/// warning finding so a broken artifact never aborts the scan.
pub trait ScanRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Inspect the project and return findings.
    fn check(&self, ctx: &ScanContext) -> Result<Vec<Finding>>;

    /// Inspect the project, downgrading errors to a warning finding.
    fn inspect(&self, ctx: &ScanContext) -> Vec<Finding> {
        match self.check(ctx) {
            Ok(findings) => findings,
            Err(err) => {
                tracing::warn!(rule = %self.id(), error = %err, "rule failed, reporting as warning");
                vec![Finding::new(
                    self.id(),
                    Severity::Warning,
                    format!("{} check could not complete: {}", self.name(), err),
                )]
            }
        }
    }
}
