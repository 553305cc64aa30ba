//! Container build file hygiene.

use crate::error::Result;
use crate::scan::checklist::{self, ChecklistItem};
use crate::scan::{Finding, RuleId, ScanContext, ScanRule, Severity};

const ITEMS: &[ChecklistItem] = &[
    ChecklistItem {
        needles: &["-slim", "-alpine", "distroless"],
        present: "Dockerfile uses a slim base image",
        absent: "Dockerfile does not use a slim base image",
    },
    ChecklistItem {
        needles: &["useradd", "adduser"],
        present: "Dockerfile creates a non-root user",
        absent: "Dockerfile does not create a non-root user",
    },
    ChecklistItem {
        needles: &["HEALTHCHECK"],
        present: "Dockerfile configures a health check",
        absent: "Dockerfile has no HEALTHCHECK",
    },
    ChecklistItem {
        needles: &["apt-get clean", "rm -rf /var/lib/apt"],
        present: "Dockerfile cleans the apt cache",
        absent: "Dockerfile does not clean the apt cache",
    },
];

/// Checks the container build file for hardening markers.
pub struct DockerfileRule;

impl ScanRule for DockerfileRule {
    fn id(&self) -> RuleId {
        RuleId::new("dockerfile")
    }

    fn name(&self) -> &str {
        "Dockerfile"
    }

    fn description(&self) -> &str {
        "Checks for a slim base image, non-root user, health check and cleaned package cache"
    }

    fn check(&self, ctx: &ScanContext) -> Result<Vec<Finding>> {
        let path = &ctx.config().dockerfile;
        match ctx.read(path)? {
            Some(content) => Ok(checklist::evaluate(&self.id(), &content, ITEMS)),
            None => Ok(vec![Finding::new(
                self.id(),
                Severity::Warning,
                format!("{} not found", path.display()),
            )]),
        }
    }
}
