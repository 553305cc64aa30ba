//! Finding collection and verdict.
//!
//! A [`Report`] is one flat, append-only sequence of findings. The passed,
//! warning and issue buckets are views over that sequence, and the
//! [`Verdict`] is derived from their sizes, never stored.

use std::io::Write;

use serde::Serialize;

use super::finding::Finding;
use super::output::ReportFormatter;
use super::rule::Severity;

/// Overall outcome of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// No issues and no warnings.
    Pass,
    /// No issues, at least one warning.
    Warn,
    /// At least one issue.
    Fail,
}

impl Verdict {
    /// Process exit code for this verdict.
    pub fn exit_code(self) -> u8 {
        match self {
            Verdict::Pass => 0,
            Verdict::Fail => 1,
            Verdict::Warn => 2,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "pass"),
            Verdict::Warn => write!(f, "warn"),
            Verdict::Fail => write!(f, "fail"),
        }
    }
}

/// Findings collected during one scan.
#[derive(Debug, Clone, Default)]
pub struct Report {
    findings: Vec<Finding>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one finding.
    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Append findings in order.
    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    /// All findings in collection order.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Findings of one severity, in collection order.
    pub fn bucket(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }

    /// Number of findings of one severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.bucket(severity).count()
    }

    /// Derive the verdict: any issue fails, else any warning warns.
    pub fn verdict(&self) -> Verdict {
        if self.count(Severity::Issue) > 0 {
            Verdict::Fail
        } else if self.count(Severity::Warning) > 0 {
            Verdict::Warn
        } else {
            Verdict::Pass
        }
    }

    /// Render with `formatter` and return the verdict.
    pub fn render<F: ReportFormatter, W: Write>(
        &self,
        formatter: &F,
        writer: &mut W,
    ) -> std::io::Result<Verdict> {
        formatter.format(self, writer)?;
        Ok(self.verdict())
    }
}
