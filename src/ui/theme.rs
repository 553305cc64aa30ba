//! Visual theme and styling.

use console::Style;

/// shipcheck's visual theme.
#[derive(Debug, Clone)]
pub struct ShipcheckTheme {
    /// Style for passed checks (green).
    pub success: Style,
    /// Style for warnings (orange).
    pub warning: Style,
    /// Style for issues and errors (red bold).
    pub error: Style,
    /// Style for report titles (cyan bold).
    pub header: Style,
    /// Style for banner rules (dim).
    pub border: Style,
}

impl Default for ShipcheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ShipcheckTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().cyan(),
            border: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            border: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = ShipcheckTheme::plain();
        let msg = theme.format_success("Complete");
        assert_eq!(msg, "✓ Complete");
    }

    #[test]
    fn theme_formats_warning() {
        let theme = ShipcheckTheme::plain();
        let msg = theme.format_warning("Caution");
        assert_eq!(msg, "⚠ Caution");
    }

    #[test]
    fn theme_formats_error() {
        let theme = ShipcheckTheme::plain();
        let msg = theme.format_error("Failed");
        assert_eq!(msg, "✗ Failed");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = ShipcheckTheme::default();
        let new = ShipcheckTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
