//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{ShipcheckTheme, UserInterface};

/// Terminal UI writing reports to stdout and errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: ShipcheckTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(use_color: bool) -> Self {
        let theme = if use_color {
            ShipcheckTheme::new()
        } else {
            ShipcheckTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}
