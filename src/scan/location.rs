//! Source locations for line-oriented findings.

use serde::Serialize;
use std::path::PathBuf;

/// A line within a project artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Path relative to the project root.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
}

impl Location {
    /// Create a location for a single line.
    pub fn line(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)
    }
}
