//! Status vocabulary for report output.
//!
//! `StatusKind` maps finding severities and verdicts onto one set of
//! icons and styles, so sections, bullets and the verdict banner agree.

use console::Style;

use super::theme::ShipcheckTheme;
use crate::scan::{Severity, Verdict};

/// Canonical status kinds used in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Passed,
    /// Advisory warning.
    Warning,
    /// Blocking issue.
    Failed,
}

impl StatusKind {
    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Passed => "✓",
            Self::Warning => "⚠",
            Self::Failed => "✗",
        }
    }

    /// Style for this status in the given theme.
    pub fn style(self, theme: &ShipcheckTheme) -> &Style {
        match self {
            Self::Passed => &theme.success,
            Self::Warning => &theme.warning,
            Self::Failed => &theme.error,
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &ShipcheckTheme, msg: &str) -> String {
        format!("{} {}", self.style(theme).apply_to(self.icon()), msg)
    }
}

impl From<Severity> for StatusKind {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Passed => Self::Passed,
            Severity::Warning => Self::Warning,
            Severity::Issue => Self::Failed,
        }
    }
}

impl From<Verdict> for StatusKind {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Pass => Self::Passed,
            Verdict::Warn => Self::Warning,
            Verdict::Fail => Self::Failed,
        }
    }
}
