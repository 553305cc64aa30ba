//! Human-readable report formatter.
//!
//! Renders the PASSED, WARNINGS and ISSUES sections followed by a one-line
//! verdict banner. Empty sections are omitted.

use super::ReportFormatter;
use crate::scan::{Report, Severity, Verdict};
use crate::ui::{ShipcheckTheme, StatusKind};
use std::io::Write;

const BANNER_WIDTH: usize = 60;
const TITLE: &str = "shipcheck - Security Check";

/// Formats scan reports for terminal display.
pub struct HumanFormatter {
    theme: ShipcheckTheme,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        let theme = if use_color {
            ShipcheckTheme::new()
        } else {
            ShipcheckTheme::plain()
        };
        Self { theme }
    }

    fn section_label(severity: Severity) -> &'static str {
        match severity {
            Severity::Passed => "PASSED",
            Severity::Warning => "WARNINGS",
            Severity::Issue => "ISSUES",
        }
    }

    fn verdict_line(verdict: Verdict) -> &'static str {
        match verdict {
            Verdict::Pass => "RESULT: PASSED - ready to deploy",
            Verdict::Warn => "RESULT: WARNINGS - review the warnings above",
            Verdict::Fail => "RESULT: FAILED - fix the issues above",
        }
    }

    fn rule<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(
            writer,
            "{}",
            self.theme.border.apply_to("=".repeat(BANNER_WIDTH))
        )
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        self.rule(writer)?;
        writeln!(
            writer,
            "{}",
            self.theme
                .header
                .apply_to(format!("{:^width$}", TITLE, width = BANNER_WIDTH))
        )?;
        self.rule(writer)?;

        for severity in [Severity::Passed, Severity::Warning, Severity::Issue] {
            let count = report.count(severity);
            if count == 0 {
                continue;
            }

            let kind = StatusKind::from(severity);
            writeln!(writer)?;
            writeln!(
                writer,
                "{}",
                kind.style(&self.theme)
                    .apply_to(format!("{} ({}):", Self::section_label(severity), count))
            )?;
            for finding in report.bucket(severity) {
                writeln!(
                    writer,
                    "   {}",
                    kind.format(&self.theme, &finding.display_message())
                )?;
            }
        }

        writeln!(writer)?;
        self.rule(writer)?;

        let verdict = report.verdict();
        let kind = StatusKind::from(verdict);
        writeln!(
            writer,
            "{}",
            kind.style(&self.theme).apply_to(Self::verdict_line(verdict))
        )?;

        Ok(())
    }
}
