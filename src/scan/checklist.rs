//! Substring checklists for hygiene rules.
//!
//! Hygiene rules read one artifact and look for a handful of desirable
//! markers. Each item passes when any of its needles occurs in the content
//! and otherwise becomes a warning; hygiene gaps are never blocking.

use super::finding::Finding;
use super::rule::{RuleId, Severity};

/// One desirable marker in an artifact.
#[derive(Debug, Clone, Copy)]
pub struct ChecklistItem {
    /// Any of these substrings satisfies the item.
    pub needles: &'static [&'static str],
    /// Message when present.
    pub present: &'static str,
    /// Message when absent.
    pub absent: &'static str,
}

impl ChecklistItem {
    /// Whether `content` satisfies this item.
    pub fn is_satisfied(&self, content: &str) -> bool {
        self.needles.iter().any(|needle| content.contains(needle))
    }
}

/// Evaluate every item independently against `content`.
pub fn evaluate(rule_id: &RuleId, content: &str, items: &[ChecklistItem]) -> Vec<Finding> {
    items
        .iter()
        .map(|item| {
            if item.is_satisfied(content) {
                Finding::new(rule_id.clone(), Severity::Passed, item.present)
            } else {
                Finding::new(rule_id.clone(), Severity::Warning, item.absent)
            }
        })
        .collect()
}
