//! Dependency pinning in the requirements manifest.

use crate::error::Result;
use crate::scan::{Finding, RuleId, ScanContext, ScanRule, Severity};

/// Exact-version operator. Range operators (`>=`, `~=`) do not pin.
const PIN_OPERATOR: &str = "==";

/// Names listed in the warning before the remainder is summarized.
const MAX_LISTED: usize = 5;

/// Characters that end a requirement's name.
const NAME_DELIMITERS: &[char] = &['=', '<', '>', '!', '~', ';', '[', '@'];

/// Checks every requirement is pinned to an exact version.
pub struct DependencyPinningRule;

/// Extract the package name from a requirement line.
///
/// ```
/// use shipcheck::scan::rules::pinning::requirement_name;
///
/// assert_eq!(requirement_name("flask>=2.0"), "flask");
/// assert_eq!(requirement_name("requests[socks] ; python_version>'3'"), "requests");
/// assert_eq!(requirement_name("gunicorn"), "gunicorn");
/// ```
pub fn requirement_name(line: &str) -> &str {
    let line = line.trim();
    let end = line
        .find(|c: char| c.is_whitespace() || NAME_DELIMITERS.contains(&c))
        .unwrap_or(line.len());
    if end == 0 {
        line
    } else {
        &line[..end]
    }
}

/// Names of requirements without an exact pin, in manifest order.
pub fn unpinned_requirements(manifest: &str) -> Vec<&str> {
    manifest
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| !line.contains(PIN_OPERATOR))
        .map(requirement_name)
        .collect()
}

impl ScanRule for DependencyPinningRule {
    fn id(&self) -> RuleId {
        RuleId::new("dependency-pinning")
    }

    fn name(&self) -> &str {
        "Dependency Pinning"
    }

    fn description(&self) -> &str {
        "Checks every requirement pins an exact version with =="
    }

    fn check(&self, ctx: &ScanContext) -> Result<Vec<Finding>> {
        let manifest = &ctx.config().manifest;

        let Some(content) = ctx.read(manifest)? else {
            return Ok(vec![Finding::new(
                self.id(),
                Severity::Warning,
                format!("{} not found", manifest.display()),
            )]);
        };

        let unpinned = unpinned_requirements(&content);
        if unpinned.is_empty() {
            return Ok(vec![Finding::new(
                self.id(),
                Severity::Passed,
                "All dependencies are pinned",
            )]);
        }

        let listed = unpinned
            .iter()
            .take(MAX_LISTED)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        let mut message = format!("Unpinned dependencies (use ==): {}", listed);
        if unpinned.len() > MAX_LISTED {
            message.push_str(&format!(" (+{} more)", unpinned.len() - MAX_LISTED));
        }

        Ok(vec![Finding::new(self.id(), Severity::Warning, message)])
    }
}
