//! Line-oriented pattern matching.
//!
//! Rules that look for anti-patterns in text share [`PatternSet`]: an
//! ordered list of `(regex, message)` pairs evaluated against one line at a
//! time. Credential patterns are compiled case-insensitively; code-construct
//! patterns (SQL call shapes) are case-sensitive.

use regex::{Regex, RegexBuilder};

use crate::error::Result;

/// A compiled pattern and the message reported when it matches.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Message describing what a match means.
    pub message: String,
    /// Compiled expression.
    pub regex: Regex,
}

/// Case handling for a [`PatternSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    Sensitive,
    Insensitive,
}

/// A match of one pattern on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch<'a> {
    /// Line number (1-indexed).
    pub line: usize,
    /// Message of the matching pattern.
    pub message: &'a str,
}

/// Ordered set of patterns.
///
/// # Example
///
/// ```
/// use shipcheck::scan::{CaseMode, PatternSet};
///
/// let set = PatternSet::compile(
///     &[(r"password\s*=", "Password assignment")],
///     CaseMode::Insensitive,
/// )
/// .unwrap();
///
/// assert_eq!(set.first_match("PASSWORD = x"), Some("Password assignment"));
/// assert!(set.first_match("user = x").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Compile `(regex, message)` pairs.
    pub fn compile(pairs: &[(&str, &str)], case: CaseMode) -> Result<Self> {
        let patterns = pairs
            .iter()
            .map(|(pattern, message)| -> Result<Pattern> {
                let regex = RegexBuilder::new(pattern)
                    .case_insensitive(case == CaseMode::Insensitive)
                    .build()
                    .map_err(anyhow::Error::from)?;
                Ok(Pattern {
                    message: message.to_string(),
                    regex,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Message of the first pattern matching `line`.
    pub fn first_match(&self, line: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|p| p.regex.is_match(line))
            .map(|p| p.message.as_str())
    }

    /// Messages of every pattern matching `line`, in pattern order.
    pub fn matches(&self, line: &str) -> Vec<&str> {
        self.patterns
            .iter()
            .filter(|p| p.regex.is_match(line))
            .map(|p| p.message.as_str())
            .collect()
    }

    /// Every `(line, pattern)` match in `text`.
    pub fn scan_lines<'a>(&'a self, text: &str) -> Vec<LineMatch<'a>> {
        let mut found = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            for message in self.matches(line) {
                found.push(LineMatch {
                    line: idx + 1,
                    message,
                });
            }
        }
        found
    }

    /// Get the number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if the set has no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
