//! Security posture scanning.
//!
//! This module runs a fixed, ordered set of independent rules over a
//! project's deployable artifacts and aggregates their findings into a
//! single verdict.
//!
//! # Overview
//!
//! The scan system consists of:
//!
//! - **Rules** - Individual checks, one per artifact class ([`ScanRule`] trait)
//! - **Registry** - The ordered rule set ([`RuleRegistry`])
//! - **Findings** - Severity-tagged observations ([`Finding`])
//! - **Report** - The flat finding list and derived [`Verdict`] ([`Report`])
//!
//! # Example
//!
//! ```
//! use shipcheck::scan::{Report, Finding, RuleId, Severity, Verdict};
//!
//! let mut report = Report::new();
//! report.push(Finding::new(RuleId::new("backup"), Severity::Warning, "No automated backup script found"));
//! assert_eq!(report.verdict(), Verdict::Warn);
//!
//! // Severity has ordering
//! assert!(Severity::Passed < Severity::Warning);
//! assert!(Severity::Warning < Severity::Issue);
//! ```

pub mod artifact;
pub mod checklist;
pub mod finding;
pub mod location;
pub mod output;
pub mod pattern;
pub mod registry;
pub mod report;
pub mod rule;
pub mod rules;
pub mod scanner;

pub use artifact::{ScanContext, SourceFiles};
pub use finding::Finding;
pub use location::Location;
pub use output::{HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter};
pub use pattern::{CaseMode, LineMatch, Pattern, PatternSet};
pub use registry::RuleRegistry;
pub use report::{Report, Verdict};
pub use rule::{RuleId, ScanRule, Severity};
pub use scanner::Scanner;
