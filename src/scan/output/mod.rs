//! Report formatters.
//!
//! This module provides formatters for rendering a scan [`Report`]
//! as a human-readable console report or as JSON.

pub mod human;
pub mod json;

use crate::scan::Report;
use std::io::Write;

/// Output format for scan reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting a scan report.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
