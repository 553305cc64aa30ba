//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use shipcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Scanning");
//! ui.success("Done!");
//!
//! assert!(ui.messages().contains(&"Scanning".to_string()));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages shown via `message()`.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Messages shown via `success()`.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Messages shown via `warning()`.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Messages shown via `error()`.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// All plain messages joined with newlines.
    pub fn output(&self) -> String {
        self.messages.join("\n")
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
