//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal usage
//! - [`MockUI`] for capturing output in tests
//! - [`ShipcheckTheme`] and [`StatusKind`] for consistent styling
//!
//! # Example
//!
//! ```
//! use shipcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.warning("Dockerfile not found");
//! assert_eq!(ui.warnings().len(), 1);
//! ```

pub mod icons;
pub mod mock;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, ShipcheckTheme};

/// Trait for user interface interactions.
///
/// This trait allows capturing command output in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
