//! Environment file presence and placeholder detection.

use crate::error::Result;
use crate::scan::{Finding, RuleId, ScanContext, ScanRule, Severity};

/// Checks that the environment file exists and has been filled in.
///
/// A missing file only warns: first-time setups are expected to start from
/// a template. Leftover placeholder markers are an issue because the
/// deployment would run with template values.
pub struct EnvFileRule;

impl ScanRule for EnvFileRule {
    fn id(&self) -> RuleId {
        RuleId::new("env-file")
    }

    fn name(&self) -> &str {
        "Environment File"
    }

    fn description(&self) -> &str {
        "Checks the environment file exists and contains no template placeholders"
    }

    fn check(&self, ctx: &ScanContext) -> Result<Vec<Finding>> {
        let config = ctx.config();
        let name = config.env_file.display();

        let Some(content) = ctx.read(&config.env_file)? else {
            return Ok(vec![Finding::new(
                self.id(),
                Severity::Warning,
                format!("{} not found", name),
            )]);
        };

        let found: Vec<&str> = config
            .placeholder_markers
            .iter()
            .map(String::as_str)
            .filter(|marker| content.contains(marker))
            .collect();

        if found.is_empty() {
            Ok(vec![Finding::new(
                self.id(),
                Severity::Passed,
                format!("{} is configured", name),
            )])
        } else {
            Ok(vec![Finding::new(
                self.id(),
                Severity::Issue,
                format!("{} contains placeholders ({})", name, found.join(", ")),
            )])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::rules::test_support::{context, project};

    #[test]
    fn missing_env_file_warns() {
        let temp = project(&[]);
        let findings = EnvFileRule.check(&context(temp.path())).unwrap();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[0].message, ".env not found");
    }

    #[test]
    fn filled_env_file_passes() {
        let temp = project(&[(".env", "MYSQL_USER=app\nMYSQL_PASSWORD=s3cret\n")]);
        let findings = EnvFileRule.check(&context(temp.path())).unwrap();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Passed);
    }

    #[test]
    fn marker_prefix_is_an_issue() {
        let temp = project(&[(".env", "MYSQL_PASSWORD=seu_password\n")]);
        let findings = EnvFileRule.check(&context(temp.path())).unwrap();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Issue);
        assert!(findings[0].message.contains("seu_"));
    }

    #[test]
    fn template_tokens_are_an_issue() {
        for content in ["KEY=<fill me>\n", "KEY={{ value }}\n", "KEY=your_key\n"] {
            let temp = project(&[(".env", content)]);
            let findings = EnvFileRule.check(&context(temp.path())).unwrap();

            assert_eq!(findings.len(), 1, "content: {}", content);
            assert_eq!(findings[0].severity, Severity::Issue, "content: {}", content);
        }
    }
}
