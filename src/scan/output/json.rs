//! JSON report formatter.
//!
//! Formats scan reports as machine-readable JSON for pipeline integration.

use super::ReportFormatter;
use crate::scan::{Report, Severity, Verdict};
use serde::Serialize;
use std::io::Write;

/// Formats scan reports as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    findings: Vec<JsonFinding<'a>>,
    summary: JsonSummary,
    verdict: Verdict,
    exit_code: u8,
}

#[derive(Serialize)]
struct JsonFinding<'a> {
    rule_id: &'a str,
    severity: Severity,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
}

#[derive(Serialize)]
struct JsonSummary {
    passed: usize,
    warnings: usize,
    issues: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let findings = report
            .findings()
            .iter()
            .map(|f| JsonFinding {
                rule_id: f.rule_id.as_str(),
                severity: f.severity,
                message: &f.message,
                file: f.location.as_ref().map(|l| l.file.display().to_string()),
                line: f.location.as_ref().map(|l| l.line),
            })
            .collect();

        let verdict = report.verdict();
        let output = JsonOutput {
            findings,
            summary: JsonSummary {
                passed: report.count(Severity::Passed),
                warnings: report.count(Severity::Warning),
                issues: report.count(Severity::Issue),
            },
            verdict,
            exit_code: verdict.exit_code(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
